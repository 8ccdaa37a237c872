//! Random sampling over permutations.
//!
//! Draws independent, uniformly shuffled tours (Fisher–Yates) and keeps the
//! shortest. By default it draws `n!` samples, the number of distinct
//! orderings, but since every draw is independent the same tour can come up
//! more than once and some tours may never be drawn. For an exhaustive pass
//! use [`crate::enumeration`].
//!
//! # Key Types
//!
//! - [`SamplingConfig`]: sample budget, evaluation guard, seed
//! - [`RandomSampling`]: the strategy

mod config;
mod runner;

pub(crate) const NAME: &str = "random-sampling";

pub use config::{SamplingConfig, DEFAULT_MAX_EVALUATIONS};
pub use runner::RandomSampling;
