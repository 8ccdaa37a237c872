//! Random sampling loop.

use rand::seq::SliceRandom;

use super::config::SamplingConfig;
use crate::error::TspResult;
use crate::geometry::City;
use crate::random::rng_from;
use crate::search::{Evaluator, TourStrategy};
use crate::tour::Tour;

/// Samples random tours up to a fixed budget.
///
/// # Usage
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::sampling::{RandomSampling, SamplingConfig};
/// use u_tsp::TourStrategy;
///
/// let cities = [
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let result = RandomSampling::new(SamplingConfig::default().with_seed(7))
///     .run(&cities)
///     .unwrap();
/// assert_eq!(result.evaluated, 24); // 4!
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomSampling {
    config: SamplingConfig,
}

impl RandomSampling {
    /// Creates the strategy with `config`.
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }
}

impl TourStrategy for RandomSampling {
    fn name(&self) -> &'static str {
        super::NAME
    }

    fn time_limit_ms(&self) -> Option<u64> {
        self.config.time_limit_ms
    }

    fn validate(&self, cities: &[City]) -> TspResult<()> {
        self.config.validate()?;
        self.config.check_budget(cities.len())
    }

    fn search(&self, eval: &mut Evaluator<'_>) {
        let n = eval.city_count();
        let iterations = self.config.planned_iterations(n);
        log::debug!("{}: sampling iterations={iterations}", super::NAME);

        let mut rng = rng_from(self.config.seed);
        let mut tour = Tour::identity(n);
        for _ in 0..iterations {
            if eval.should_stop() {
                break;
            }
            for (pos, city) in tour.iter_mut().enumerate() {
                *city = pos;
            }
            tour.shuffle(&mut rng);
            eval.evaluate(&tour);
        }
    }
}
