//! Exhaustive enumeration configuration.

use crate::error::{TspError, TspResult};
use crate::random::factorial_saturating;
use crate::sampling::DEFAULT_MAX_EVALUATIONS;

/// Configuration for [`ExhaustiveSearch`](super::ExhaustiveSearch).
///
/// ```
/// use u_tsp::enumeration::EnumerationConfig;
///
/// let config = EnumerationConfig::default();
/// assert_eq!(config.planned_tours(5), 24); // 4!
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnumerationConfig {
    /// Refuse to start when `(n-1)!` exceeds this.
    pub max_evaluations: u64,

    /// Optional wall-clock time limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            time_limit_ms: None,
        }
    }
}

impl EnumerationConfig {
    /// Sets the evaluation guard.
    pub fn with_max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.max_evaluations == 0 {
            return Err(TspError::config("max_evaluations must be at least 1"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(TspError::config("time_limit_ms must be positive or None"));
        }
        Ok(())
    }

    /// Distinct tours over `n` cities with the first city fixed, saturating.
    pub fn planned_tours(&self, n: usize) -> u128 {
        factorial_saturating(n.saturating_sub(1))
    }

    /// Fails with `ResourceExhaustion` when `n` cities exceed the guard.
    pub fn check_budget(&self, n: usize) -> TspResult<()> {
        TspError::check_budget(super::NAME, self.planned_tours(n), self.max_evaluations)
    }
}
