//! Genetic search over tours.
//!
//! Starts from a population of random permutations. Each generation pairs
//! parents, produces one child per ordered pair by single-point crossover,
//! applies swap mutation with the configured probability and evaluates every
//! child as it is produced. There is no selection or culling: the children
//! simply become the next population.
//!
//! With [`Pairing::Full`] every ordered pair of the current population
//! (including a tour with itself) breeds, so the population squares each
//! generation. [`Pairing::Capped`] keeps the full product while it is small
//! and samples a fixed number of pairs after that.
//!
//! Single-point crossover does not preserve permutations: a child can repeat
//! some cities and miss others. Such children are still evaluated; their
//! length is just the closed walk over the indices they contain. Enable
//! [`GeneticConfig::repair`] to turn every child back into a permutation.
//!
//! # Submodules
//!
//! - [`operators`]: crossover, mutation and repair on index sequences

mod config;
pub mod operators;
mod runner;

pub(crate) const NAME: &str = "genetic";

pub use config::{GeneticConfig, Pairing, DEFAULT_PAIR_CAP};
pub use runner::GeneticSearch;
