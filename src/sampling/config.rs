//! Random sampling configuration.

use crate::error::{TspError, TspResult};
use crate::random::factorial_saturating;

/// Default guard on the number of tours a single run may evaluate.
pub const DEFAULT_MAX_EVALUATIONS: u64 = 10_000_000;

/// Configuration for [`RandomSampling`](super::RandomSampling).
///
/// # Defaults
///
/// ```
/// use u_tsp::sampling::SamplingConfig;
///
/// let config = SamplingConfig::default();
/// assert_eq!(config.iteration_budget, None); // n! samples
/// assert_eq!(config.max_evaluations, 10_000_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplingConfig {
    /// Number of random tours to draw.
    ///
    /// `None` draws `n!` tours, where `n` is the city count. Draws are
    /// independent, so `n!` samples do not cover every permutation.
    pub iteration_budget: Option<u64>,

    /// Refuse to start when the planned sample count exceeds this.
    pub max_evaluations: u64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            iteration_budget: None,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl SamplingConfig {
    /// Sets a fixed number of samples instead of `n!`.
    pub fn with_iteration_budget(mut self, n: u64) -> Self {
        self.iteration_budget = Some(n);
        self
    }

    /// Sets the evaluation guard.
    pub fn with_max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.iteration_budget == Some(0) {
            return Err(TspError::config("iteration_budget must be at least 1"));
        }
        if self.max_evaluations == 0 {
            return Err(TspError::config("max_evaluations must be at least 1"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(TspError::config("time_limit_ms must be positive or None"));
        }
        Ok(())
    }

    /// Number of samples a run over `n` cities will draw, saturating.
    pub fn planned_iterations(&self, n: usize) -> u128 {
        match self.iteration_budget {
            Some(budget) => u128::from(budget),
            None => factorial_saturating(n),
        }
    }

    /// Fails with `ResourceExhaustion` when the planned sample count for `n`
    /// cities exceeds `max_evaluations`.
    pub fn check_budget(&self, n: usize) -> TspResult<()> {
        TspError::check_budget(super::NAME, self.planned_iterations(n), self.max_evaluations)
    }
}
