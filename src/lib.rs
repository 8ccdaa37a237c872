//! Travelling salesman tour heuristics over points in the plane.
//!
//! Provides several ways of producing a short closed tour through a set of
//! cities:
//!
//! - **Random sampling**: independent uniformly shuffled tours, `n!` draws
//!   by default.
//! - **Nearest neighbour**: greedy construction from every start city.
//! - **MST approximation**: depth-first walk of a Kruskal minimum spanning
//!   tree, at most twice the optimum.
//! - **Genetic search**: single-point crossover and swap mutation over a
//!   population bred by full or capped pairing.
//! - **Exhaustive enumeration**: every tour with the first city fixed, for
//!   exact answers on small instances.
//!
//! # Architecture
//!
//! Every strategy implements [`TourStrategy`]. It decides which tours to
//! build and hands each one to an [`Evaluator`](search::Evaluator), which
//! measures it, offers it to the [`BestTourTracker`] and emits a
//! [`StepEvent`](report::StepEvent) to the caller's
//! [`Reporter`](report::Reporter). Strategies never keep their own best
//! record. [`solver`] dispatches on a serializable config.
//!
//! ```
//! use u_tsp::{City, TourStrategy};
//! use u_tsp::nearest::{NearestNeighbor, NearestNeighborConfig};
//!
//! let cities = [
//!     City::new(0.0, 0.0),
//!     City::new(1.0, 0.0),
//!     City::new(1.0, 1.0),
//!     City::new(0.0, 1.0),
//! ];
//! let result = NearestNeighbor::new(NearestNeighborConfig::default())
//!     .run(&cities)
//!     .unwrap();
//! assert!((result.length - 4.0).abs() < 1e-12);
//! ```
//!
//! # Features
//!
//! - `serde`: serialization for configs, tours and results.
//! - `parallel`: rayon-parallel nearest-neighbour construction.
//! - `wasm`: JavaScript bindings (`solveTour`, `tourLength`).

pub mod enumeration;
pub mod error;
pub mod genetic;
pub mod geometry;
pub mod mst;
pub mod nearest;
pub mod random;
pub mod report;
pub mod sampling;
pub mod search;
pub mod solver;
pub mod tour;
pub mod tracker;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{TspError, TspResult};
pub use geometry::City;
pub use search::{StopReason, TourResult, TourStrategy};
pub use tour::Tour;
pub use tracker::{BestTourTracker, SharedTracker};
