//! Error types for tour construction and search.
//!
//! Every strategy validates its input and configuration before doing any
//! work and reports structural problems through [`TspError`]. Nothing is
//! retried internally.

use thiserror::Error;

/// Result type alias for tour operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for all strategies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// The city set cannot be searched (empty, too small, non-finite).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// A configuration parameter is out of range.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// The run would evaluate more tours than the configured guard allows.
    #[error("{strategy}: estimated {estimated} evaluations exceeds limit {limit}")]
    ResourceExhaustion {
        /// Strategy that refused to start.
        strategy: &'static str,
        /// Estimated number of tour evaluations (saturating).
        estimated: u128,
        /// Configured `max_evaluations` guard.
        limit: u64,
    },
}

impl TspError {
    /// Create an invalid-input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns `Err(ResourceExhaustion)` when `estimated` exceeds `limit`.
    pub(crate) fn check_budget(
        strategy: &'static str,
        estimated: u128,
        limit: u64,
    ) -> TspResult<()> {
        if estimated > u128::from(limit) {
            return Err(Self::ResourceExhaustion {
                strategy,
                estimated,
                limit,
            });
        }
        Ok(())
    }
}
