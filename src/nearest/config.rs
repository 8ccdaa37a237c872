//! Nearest-neighbour configuration.

use crate::error::{TspError, TspResult};

/// Configuration for [`NearestNeighbor`](super::NearestNeighbor).
///
/// ```
/// use u_tsp::nearest::NearestNeighborConfig;
///
/// let config = NearestNeighborConfig::default().with_start_city(3);
/// assert_eq!(config.start_city, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NearestNeighborConfig {
    /// Build a single tour from this city instead of one per city.
    pub start_city: Option<usize>,

    /// Build the per-start tours in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Tours are still
    /// evaluated in start-city order, so results match the sequential run.
    pub parallel: bool,
}

impl Default for NearestNeighborConfig {
    fn default() -> Self {
        Self {
            start_city: None,
            parallel: true,
        }
    }
}

impl NearestNeighborConfig {
    /// Restricts the run to a single start city.
    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = Some(city);
        self
    }

    /// Enables or disables parallel construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration for `n` cities.
    pub fn validate(&self, n: usize) -> TspResult<()> {
        match self.start_city {
            Some(start) if start >= n => Err(TspError::config(format!(
                "start_city {start} out of range for {n} cities"
            ))),
            _ => Ok(()),
        }
    }
}
