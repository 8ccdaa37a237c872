//! Genetic search loop.
//!
//! initialize → for each generation: pair → crossover → mutate → (repair)
//! → evaluate → replace population.

use std::ops::ControlFlow;

use rand::Rng;

use super::config::GeneticConfig;
use super::operators::{repair, single_point_crossover, swap_mutation};
use crate::error::{TspError, TspResult};
use crate::geometry::City;
use crate::random::rng_from;
use crate::search::{Evaluator, TourStrategy};
use crate::tour::Tour;

/// Genetic search with full or capped pairwise breeding.
///
/// # Usage
///
/// ```
/// use u_tsp::genetic::{GeneticConfig, GeneticSearch, Pairing};
/// use u_tsp::geometry::City;
/// use u_tsp::TourStrategy;
///
/// let cities: Vec<City> = (0..6).map(|i| City::new(i as f64, (i * i) as f64)).collect();
/// let config = GeneticConfig::default()
///     .with_population_size(10)
///     .with_generations(5)
///     .with_pairing(Pairing::Capped(100))
///     .with_seed(42);
/// let result = GeneticSearch::new(config).run(&cities).unwrap();
/// assert_eq!(result.evaluated, 5 * 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticSearch {
    config: GeneticConfig,
}

impl GeneticSearch {
    /// Creates the strategy with `config`.
    pub fn new(config: GeneticConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Random initial population of `population_size` permutations.
    pub fn initial_population<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Tour> {
        (0..self.config.population_size)
            .map(|_| Tour::random(n, rng))
            .collect()
    }

    /// Breeds one generation from `population`.
    ///
    /// `visit` sees every child as soon as it is produced; returning
    /// `ControlFlow::Break` ends the generation early. Children bred so far,
    /// including the one that broke, are returned.
    pub fn next_generation<R, F>(&self, population: &[Tour], rng: &mut R, mut visit: F) -> Vec<Tour>
    where
        R: Rng,
        F: FnMut(&Tour) -> ControlFlow<()>,
    {
        let size = population.len();
        let count = self.config.pairing.children(size as u128);
        let full = count == (size as u128).saturating_mul(size as u128);
        let mut next = Vec::with_capacity(usize::try_from(count).unwrap_or(0).min(1 << 20));

        if full {
            for parent1 in population {
                for parent2 in population {
                    let child = self.breed(parent1, parent2, rng);
                    let flow = visit(&child);
                    next.push(child);
                    if flow.is_break() {
                        return next;
                    }
                }
            }
        } else {
            for _ in 0..count {
                let parent1 = &population[rng.random_range(0..size)];
                let parent2 = &population[rng.random_range(0..size)];
                let child = self.breed(parent1, parent2, rng);
                let flow = visit(&child);
                next.push(child);
                if flow.is_break() {
                    return next;
                }
            }
        }
        next
    }

    fn breed<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        let mut child = single_point_crossover(parent1, parent2, rng);
        if rng.random_range(0.0..1.0) < self.config.mutation_rate {
            swap_mutation(&mut child, rng);
        }
        if self.config.repair {
            let n = child.len();
            repair(&mut child, n);
        }
        child
    }
}

impl TourStrategy for GeneticSearch {
    fn name(&self) -> &'static str {
        super::NAME
    }

    fn min_cities(&self) -> usize {
        2
    }

    fn time_limit_ms(&self) -> Option<u64> {
        self.config.time_limit_ms
    }

    fn validate(&self, _cities: &[City]) -> TspResult<()> {
        self.config.validate()?;
        TspError::check_budget(
            super::NAME,
            self.config.estimated_evaluations(),
            self.config.max_evaluations,
        )
    }

    fn search(&self, eval: &mut Evaluator<'_>) {
        let n = eval.city_count();
        let mut rng = rng_from(self.config.seed);
        let mut population = self.initial_population(n, &mut rng);

        for generation in 1..=self.config.generations {
            if eval.should_stop() {
                break;
            }
            let mut malformed = 0usize;
            population = self.next_generation(&population, &mut rng, |child| {
                if !child.is_permutation(n) {
                    malformed += 1;
                }
                eval.evaluate(child);
                if eval.should_stop() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });
            log::debug!(
                "{}: generation={generation} population={} malformed={malformed} best_length={:.4}",
                super::NAME,
                population.len(),
                eval.best_length()
            );
        }

        let best = eval.best_tour();
        if !best.is_empty() && !best.is_permutation(n) {
            log::info!(
                "{}: best tour is not a permutation length={:.4}",
                super::NAME,
                eval.best_length()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetic::Pairing;
    use crate::random::create_rng;
    use crate::report::StepLog;
    use crate::search::StopReason;
    use crate::tour::tour_length;

    fn hexagon() -> Vec<City> {
        (0..6)
            .map(|k| {
                let a = k as f64 * std::f64::consts::TAU / 6.0;
                City::new(a.cos(), a.sin())
            })
            .collect()
    }

    fn keep_going(_: &Tour) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    #[test]
    fn test_population_of_two_squares() {
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(2)
                .with_generations(1),
        );
        let mut rng = create_rng(42);
        let population = search.initial_population(5, &mut rng);
        assert_eq!(population.len(), 2);

        let next = search.next_generation(&population, &mut rng, keep_going);
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn test_one_generation_of_two_evaluates_four_children() {
        let cities = hexagon();
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(2)
                .with_generations(1)
                .with_seed(7),
        );
        let mut log = StepLog::new();
        let result = search.run_with_reporter(&cities, &mut log).unwrap();

        assert_eq!(result.evaluated, 4);
        for record in log.records() {
            assert_eq!(record.tour.len(), 6);
            let expected = tour_length(&record.tour, &cities);
            assert!((record.length - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_full_pairing_growth() {
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(3)
                .with_generations(2)
                .with_pairing(Pairing::Full)
                .with_seed(1),
        );
        let result = search.run(&hexagon()).unwrap();
        assert_eq!(result.evaluated, 9 + 81);
    }

    #[test]
    fn test_capped_pairing_samples() {
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(10)
                .with_generations(3)
                .with_pairing(Pairing::Capped(50))
                .with_seed(1),
        );
        let mut rng = create_rng(3);
        let population = search.initial_population(6, &mut rng);
        assert_eq!(search.next_generation(&population, &mut rng, keep_going).len(), 50);

        let result = search.run(&hexagon()).unwrap();
        assert_eq!(result.evaluated, 150);
    }

    #[test]
    fn test_cap_above_square_is_full_product() {
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(4)
                .with_pairing(Pairing::Capped(1_000)),
        );
        let mut rng = create_rng(3);
        let population = search.initial_population(6, &mut rng);
        assert_eq!(search.next_generation(&population, &mut rng, keep_going).len(), 16);
    }

    #[test]
    fn test_children_can_be_malformed() {
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(10)
                .with_generations(1)
                .with_seed(5),
        );
        let mut log = StepLog::new();
        search.run_with_reporter(&hexagon(), &mut log).unwrap();
        assert_eq!(log.records().len(), 100);
        assert!(log.records().iter().any(|r| !r.tour.is_permutation(6)));
    }

    #[test]
    fn test_repair_yields_permutations() {
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(10)
                .with_generations(2)
                .with_repair(true)
                .with_seed(5),
        );
        let mut log = StepLog::new();
        let result = search.run_with_reporter(&hexagon(), &mut log).unwrap();
        assert!(log.records().iter().all(|r| r.tour.is_permutation(6)));
        assert!(result.tour.is_permutation(6));
    }

    #[test]
    fn test_break_stops_generation() {
        let search = GeneticSearch::new(GeneticConfig::default().with_population_size(5));
        let mut rng = create_rng(3);
        let population = search.initial_population(6, &mut rng);
        let mut seen = 0;
        let next = search.next_generation(&population, &mut rng, |_| {
            seen += 1;
            if seen == 7 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(next.len(), 7);
    }

    #[test]
    fn test_history_is_non_increasing() {
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(20)
                .with_generations(10)
                .with_pairing(Pairing::Capped(400))
                .with_repair(true)
                .with_seed(42),
        );
        let result = search.run(&hexagon()).unwrap();
        for window in result.length_history.windows(2) {
            assert!(window[1] < window[0]);
        }
        assert_eq!(result.length_history.last().copied(), Some(result.length));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let config = GeneticConfig::default()
            .with_population_size(8)
            .with_generations(3)
            .with_seed(77);
        let a = GeneticSearch::new(config.clone()).run(&hexagon()).unwrap();
        let b = GeneticSearch::new(config).run(&hexagon()).unwrap();
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.evaluated, b.evaluated);
    }

    #[test]
    fn test_malformed_best_is_flagged() {
        // With two cities the cut is always 1 and swap mutation is a no-op,
        // so crossing [0, 1] with [1, 0] yields [0, 0] or [1, 1], length 0.
        let cities = [City::new(0.0, 0.0), City::new(1.0, 0.0)];
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_population_size(16)
                .with_generations(2)
                .with_mutation_rate(1.0)
                .with_seed(11),
        );
        let parents = [Tour::new(vec![0, 1]), Tour::new(vec![1, 0])];
        let children = search.next_generation(&parents, &mut create_rng(1), keep_going);
        let expected: Vec<Tour> = [[0, 1], [0, 0], [1, 1], [1, 0]]
            .into_iter()
            .map(|order| Tour::new(order.to_vec()))
            .collect();
        assert_eq!(children, expected);

        let result = search.run(&cities).unwrap();
        assert_eq!(result.length, 0.0);
        assert!(!result.is_valid_tour());

        let repaired = GeneticSearch::new(search.config().clone().with_repair(true))
            .run(&cities)
            .unwrap();
        assert!(repaired.is_valid_tour());
        assert!((repaired.length - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_requires_two_cities() {
        let err = GeneticSearch::default().run(&[City::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_invalid_config_before_running() {
        let search = GeneticSearch::new(GeneticConfig::default().with_mutation_rate(2.0));
        let mut log = StepLog::new();
        let err = search.run_with_reporter(&hexagon(), &mut log).unwrap_err();
        assert!(matches!(err, TspError::Config { .. }));
        assert!(log.records().is_empty());
    }

    #[test]
    fn test_rejects_explosive_full_pairing() {
        let search = GeneticSearch::new(GeneticConfig::default().with_pairing(Pairing::Full));
        let err = search.run(&hexagon()).unwrap_err();
        assert!(matches!(err, TspError::ResourceExhaustion { .. }));
    }

    #[test]
    fn test_time_limit_stops_mid_generation() {
        let cities: Vec<City> = (0..50).map(|i| City::new(i as f64, (i % 7) as f64)).collect();
        let search = GeneticSearch::new(
            GeneticConfig::default()
                .with_generations(100)
                .with_time_limit_ms(20)
                .with_seed(1),
        );
        let result = search.run(&cities).unwrap();
        assert_eq!(result.stop, StopReason::TimeLimit);
        assert!(result.evaluated < 1_000_000);
    }
}
