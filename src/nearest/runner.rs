//! Nearest-neighbour construction loop.

use super::config::NearestNeighborConfig;
use crate::error::TspResult;
use crate::geometry::{distance, City};
use crate::search::{Evaluator, TourStrategy};
use crate::tour::Tour;

/// Builds the greedy nearest-neighbour tour starting at `start`.
///
/// Unvisited cities are scanned in index order and only a strictly shorter
/// distance replaces the current candidate, so ties resolve to the lowest
/// index.
///
/// # Panics
/// Panics if `start >= cities.len()`.
pub fn nearest_neighbor_tour(cities: &[City], start: usize) -> Tour {
    let n = cities.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    visited[start] = true;
    order.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut nearest = None;
        let mut nearest_distance = f64::INFINITY;
        for (candidate, city) in cities.iter().enumerate() {
            if visited[candidate] {
                continue;
            }
            let d = distance(&cities[current], city);
            if nearest.is_none() || d < nearest_distance {
                nearest = Some(candidate);
                nearest_distance = d;
            }
        }
        // n - 1 iterations over n cities: an unvisited city always remains.
        let Some(next) = nearest else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Tour::new(order)
}

/// Nearest-neighbour heuristic over every start city.
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::nearest::{NearestNeighbor, NearestNeighborConfig};
/// use u_tsp::TourStrategy;
///
/// let cities = [
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let result = NearestNeighbor::new(NearestNeighborConfig::default())
///     .run(&cities)
///     .unwrap();
/// assert_eq!(result.evaluated, 4);
/// assert!((result.length - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestNeighbor {
    config: NearestNeighborConfig,
}

impl NearestNeighbor {
    /// Creates the strategy with `config`.
    pub fn new(config: NearestNeighborConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &NearestNeighborConfig {
        &self.config
    }

    fn starts(&self, n: usize) -> std::ops::Range<usize> {
        match self.config.start_city {
            Some(start) => start..start + 1,
            None => 0..n,
        }
    }

    fn search_sequential(&self, eval: &mut Evaluator<'_>) {
        let cities = eval.cities();
        for start in self.starts(cities.len()) {
            if eval.should_stop() {
                break;
            }
            let tour = nearest_neighbor_tour(cities, start);
            let length = eval.evaluate(&tour);
            log::debug!("{}: start={start} length={length:.4}", super::NAME);
        }
    }

    #[cfg(feature = "parallel")]
    fn search_parallel(&self, eval: &mut Evaluator<'_>) {
        use rayon::prelude::*;

        let cities = eval.cities();
        let tours: Vec<(usize, Tour)> = self
            .starts(cities.len())
            .into_par_iter()
            .map(|start| (start, nearest_neighbor_tour(cities, start)))
            .collect();

        for (start, tour) in &tours {
            if eval.should_stop() {
                break;
            }
            let length = eval.evaluate(tour);
            log::debug!("{}: start={start} length={length:.4}", super::NAME);
        }
    }
}

impl TourStrategy for NearestNeighbor {
    fn name(&self) -> &'static str {
        super::NAME
    }

    fn validate(&self, cities: &[City]) -> TspResult<()> {
        self.config.validate(cities.len())
    }

    fn search(&self, eval: &mut Evaluator<'_>) {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return self.search_parallel(eval);
        }
        self.search_sequential(eval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::random::create_rng;
    use crate::report::StepLog;
    use proptest::prelude::*;
    use rand::Rng;

    #[test]
    fn test_tie_goes_to_lowest_index() {
        // Cities 1 and 2 are both at distance 1 from city 0.
        let cities = [City::new(0.0, 0.0), City::new(1.0, 0.0), City::new(-1.0, 0.0)];
        assert_eq!(&*nearest_neighbor_tour(&cities, 0), &[0, 1, 2]);
    }

    #[test]
    fn test_greedy_order() {
        let cities = [
            City::new(0.0, 0.0),
            City::new(10.0, 0.0),
            City::new(1.0, 0.0),
            City::new(3.0, 0.0),
        ];
        assert_eq!(&*nearest_neighbor_tour(&cities, 0), &[0, 2, 3, 1]);
        assert_eq!(&*nearest_neighbor_tour(&cities, 1), &[1, 3, 2, 0]);
    }

    #[test]
    fn test_two_cities_same_length_from_both_starts() {
        let cities = [City::new(0.0, 0.0), City::new(3.0, 4.0)];
        let mut log = StepLog::new();
        let result = NearestNeighbor::default()
            .run_with_reporter(&cities, &mut log)
            .unwrap();

        let lengths: Vec<f64> = log.records().iter().map(|r| r.length).collect();
        assert_eq!(lengths.len(), 2);
        assert!((lengths[0] - 10.0).abs() < 1e-12);
        assert!((lengths[0] - lengths[1]).abs() < 1e-12);
        assert_eq!(result.improvements, 1);
    }

    #[test]
    fn test_one_tour_per_start() {
        let cities: Vec<City> = (0..7).map(|i| City::new(i as f64, (i % 3) as f64)).collect();
        let mut log = StepLog::new();
        NearestNeighbor::default()
            .run_with_reporter(&cities, &mut log)
            .unwrap();
        let starts: Vec<usize> = log.records().iter().map(|r| r.tour[0]).collect();
        assert_eq!(starts, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_start_city_override() {
        let cities: Vec<City> = (0..6).map(|i| City::new(i as f64, 0.0)).collect();
        let strategy = NearestNeighbor::new(NearestNeighborConfig::default().with_start_city(2));
        let result = strategy.run(&cities).unwrap();
        assert_eq!(result.evaluated, 1);
        assert_eq!(result.tour[0], 2);
    }

    #[test]
    fn test_start_city_out_of_range() {
        let cities = [City::new(0.0, 0.0), City::new(1.0, 0.0)];
        let strategy = NearestNeighbor::new(NearestNeighborConfig::default().with_start_city(2));
        assert!(matches!(strategy.run(&cities), Err(TspError::Config { .. })));
    }

    #[test]
    fn test_single_city() {
        let result = NearestNeighbor::default().run(&[City::new(5.0, 5.0)]).unwrap();
        assert_eq!(&*result.tour, &[0]);
        assert_eq!(result.length, 0.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = create_rng(17);
        let cities: Vec<City> = (0..30)
            .map(|_| City::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();

        let seq = NearestNeighbor::new(NearestNeighborConfig::default().with_parallel(false))
            .run(&cities)
            .unwrap();
        let par = NearestNeighbor::new(NearestNeighborConfig::default().with_parallel(true))
            .run(&cities)
            .unwrap();
        assert_eq!(seq.tour, par.tour);
        assert_eq!(seq.length, par.length);
        assert_eq!(seq.length_history, par.length_history);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_every_construction_is_a_permutation(
            pts in prop::collection::vec((0.0f64..50.0, 0.0f64..50.0), 1..15),
        ) {
            let cities: Vec<City> = pts.into_iter().map(City::from).collect();
            let n = cities.len();
            for start in 0..n {
                let tour = nearest_neighbor_tour(&cities, start);
                prop_assert!(tour.is_permutation(n));
                prop_assert_eq!(tour[0], start);
            }
        }
    }
}
