//! Exhaustive enumeration of tours.
//!
//! Fixes city 0 in the first position and walks the remaining `n - 1`
//! positions through every permutation in lexicographic order, so each
//! distinct rotation class is evaluated exactly once: `(n-1)!` tours. The
//! result is the exact optimum, which makes this practical only for small
//! instances. The run is refused up front when `(n-1)!` exceeds the
//! evaluation guard.

mod config;
mod runner;

pub(crate) const NAME: &str = "exhaustive";

pub use config::EnumerationConfig;
pub use runner::{next_permutation, ExhaustiveSearch};
