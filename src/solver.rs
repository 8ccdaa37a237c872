//! Config-driven dispatch over the strategies.
//!
//! [`SolverConfig`] names one strategy and its parameters. With the `serde`
//! feature it round-trips through JSON, so a caller can pick and tune a
//! strategy without touching the concrete types:
//!
//! ```json
//! { "strategy": { "kind": "genetic", "population_size": 50, "seed": 7 } }
//! ```

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::enumeration::{EnumerationConfig, ExhaustiveSearch};
use crate::error::TspResult;
use crate::genetic::{GeneticConfig, GeneticSearch};
use crate::geometry::City;
use crate::mst::MstApproximation;
use crate::nearest::{NearestNeighbor, NearestNeighborConfig};
use crate::report::{NoopReporter, Reporter};
use crate::sampling::{RandomSampling, SamplingConfig};
use crate::search::{TourResult, TourStrategy};
use crate::tracker::BestTourTracker;

/// One strategy and its parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StrategyConfig {
    /// [`RandomSampling`].
    RandomSampling(SamplingConfig),
    /// [`NearestNeighbor`].
    NearestNeighbor(NearestNeighborConfig),
    /// [`MstApproximation`]; takes no parameters.
    Mst,
    /// [`GeneticSearch`].
    Genetic(GeneticConfig),
    /// [`ExhaustiveSearch`].
    Exhaustive(EnumerationConfig),
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::NearestNeighbor(NearestNeighborConfig::default())
    }
}

impl StrategyConfig {
    /// Builds the strategy this config describes.
    pub fn build(&self) -> Box<dyn TourStrategy> {
        match self {
            StrategyConfig::RandomSampling(c) => Box::new(RandomSampling::new(c.clone())),
            StrategyConfig::NearestNeighbor(c) => Box::new(NearestNeighbor::new(c.clone())),
            StrategyConfig::Mst => Box::new(MstApproximation::new()),
            StrategyConfig::Genetic(c) => Box::new(GeneticSearch::new(c.clone())),
            StrategyConfig::Exhaustive(c) => Box::new(ExhaustiveSearch::new(c.clone())),
        }
    }
}

/// Top-level solver configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Strategy to run. Defaults to nearest neighbour over every start.
    pub strategy: StrategyConfig,
}

impl SolverConfig {
    /// Config running `strategy`.
    pub fn new(strategy: StrategyConfig) -> Self {
        Self { strategy }
    }
}

/// Runs configured strategies against one owned [`BestTourTracker`].
///
/// The tracker is reset at the start of every run, so after a run it holds
/// that run's best tour.
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::solver::{Solver, SolverConfig, StrategyConfig};
///
/// let cities = [City::new(0.0, 0.0), City::new(3.0, 0.0), City::new(3.0, 4.0)];
/// let mut solver = Solver::new();
/// let result = solver.run(&cities, &SolverConfig::new(StrategyConfig::Mst)).unwrap();
/// assert!((result.length - 12.0).abs() < 1e-12);
/// assert_eq!(solver.tracker().best_length(), result.length);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    tracker: BestTourTracker,
}

impl Solver {
    /// Creates a solver with an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tracker holding the last run's best tour.
    pub fn tracker(&self) -> &BestTourTracker {
        &self.tracker
    }

    /// Runs `config` on `cities`.
    pub fn run(&mut self, cities: &[City], config: &SolverConfig) -> TspResult<TourResult> {
        self.run_with(cities, config, &mut NoopReporter, None)
    }

    /// Runs `config` on `cities` with a reporter and optional cancellation.
    pub fn run_with(
        &mut self,
        cities: &[City],
        config: &SolverConfig,
        reporter: &mut dyn Reporter,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<TourResult> {
        let strategy = config.strategy.build();
        log::debug!("solver: dispatch strategy={}", strategy.name());
        strategy.run_with_cancel(cities, &mut self.tracker, reporter, cancel)
    }
}

/// Runs `config` on `cities` with a fresh solver.
pub fn solve(cities: &[City], config: &SolverConfig) -> TspResult<TourResult> {
    Solver::new().run(cities, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::report::StepLog;
    use crate::search::StopReason;

    /// Unit square corners plus its centre.
    fn square_with_centre() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
            City::new(0.5, 0.5),
        ]
    }

    #[test]
    fn test_dispatches_every_strategy() {
        let cities = square_with_centre();
        let configs = [
            StrategyConfig::RandomSampling(SamplingConfig::default().with_seed(1)),
            StrategyConfig::NearestNeighbor(NearestNeighborConfig::default()),
            StrategyConfig::Mst,
            StrategyConfig::Genetic(
                GeneticConfig::default()
                    .with_population_size(6)
                    .with_generations(3)
                    .with_seed(1),
            ),
            StrategyConfig::Exhaustive(EnumerationConfig::default()),
        ];
        let names: Vec<&str> = configs.iter().map(|c| c.build().name()).collect();
        assert_eq!(
            names,
            ["random-sampling", "nearest-neighbor", "mst-approximation", "genetic", "exhaustive"]
        );

        let mut solver = Solver::new();
        for strategy in configs {
            let result = solver.run(&cities, &SolverConfig::new(strategy)).unwrap();
            assert!(result.evaluated >= 1);
            assert!(result.length.is_finite());
            assert_eq!(solver.tracker().best_length(), result.length);
        }
    }

    #[test]
    fn test_exhaustive_and_nearest_agree_on_optimum() {
        let cities = square_with_centre();
        let optimum = 3.0 + std::f64::consts::SQRT_2;
        let exact = solve(
            &cities,
            &SolverConfig::new(StrategyConfig::Exhaustive(EnumerationConfig::default())),
        )
        .unwrap();
        assert!((exact.length - optimum).abs() < 1e-9);

        let greedy = solve(&cities, &SolverConfig::default()).unwrap();
        assert!((greedy.length - optimum).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_beats_single_random_sample() {
        let cities = square_with_centre();
        let nearest = solve(&cities, &SolverConfig::default()).unwrap();

        let trials = 300;
        let mut strictly_shorter = 0;
        for seed in 0..trials {
            let sampling = StrategyConfig::RandomSampling(
                SamplingConfig::default()
                    .with_iteration_budget(1)
                    .with_seed(seed),
            );
            let sample = solve(&cities, &SolverConfig::new(sampling)).unwrap();
            assert!(nearest.length <= sample.length + 1e-12);
            if nearest.length < sample.length - 1e-9 {
                strictly_shorter += 1;
            }
        }
        assert!(strictly_shorter * 2 >= trials, "only {strictly_shorter} of {trials}");
    }

    #[test]
    fn test_errors_pass_through() {
        let err = solve(&[], &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput { .. }));

        let bad = StrategyConfig::Genetic(GeneticConfig::default().with_population_size(0));
        let err = solve(&square_with_centre(), &SolverConfig::new(bad)).unwrap_err();
        assert!(matches!(err, TspError::Config { .. }));
    }

    #[test]
    fn test_run_with_reporter_and_cancel() {
        let mut solver = Solver::new();
        let mut log = StepLog::new();
        let cancel = Arc::new(AtomicBool::new(true));
        let result = solver
            .run_with(
                &square_with_centre(),
                &SolverConfig::new(StrategyConfig::Exhaustive(EnumerationConfig::default())),
                &mut log,
                Some(cancel),
            )
            .unwrap();
        assert_eq!(result.stop, StopReason::Cancelled);
        assert!(log.records().is_empty());
        assert!(log.is_finished());
        assert!(solver.tracker().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json_shape() {
        let json = r#"{ "strategy": { "kind": "genetic", "population_size": 50, "seed": 7 } }"#;
        let config: SolverConfig = serde_json::from_str(json).unwrap();
        let expected = GeneticConfig::default()
            .with_population_size(50)
            .with_seed(7);
        assert_eq!(config, SolverConfig::new(StrategyConfig::Genetic(expected)));

        let mst: SolverConfig = serde_json::from_str(r#"{ "strategy": { "kind": "mst" } }"#).unwrap();
        assert_eq!(mst.strategy, StrategyConfig::Mst);

        let empty: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SolverConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_round_trip() {
        let configs = [
            StrategyConfig::RandomSampling(SamplingConfig::default().with_iteration_budget(10)),
            StrategyConfig::NearestNeighbor(NearestNeighborConfig::default().with_start_city(2)),
            StrategyConfig::Mst,
            StrategyConfig::Genetic(
                GeneticConfig::default().with_pairing(crate::genetic::Pairing::Full),
            ),
            StrategyConfig::Exhaustive(EnumerationConfig::default().with_time_limit_ms(5)),
        ];
        for strategy in configs {
            let config = SolverConfig::new(strategy);
            let json = serde_json::to_string(&config).unwrap();
            let back: SolverConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back, config, "{json}");
        }
    }
}
