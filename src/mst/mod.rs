//! Minimum-spanning-tree tour approximation.
//!
//! Builds the MST of the complete distance graph with Kruskal's algorithm,
//! then walks it depth-first from city 0, listing each city on first visit.
//! The walk visits every city exactly once because the tree is connected
//! and acyclic.
//!
//! # Key Types
//!
//! - [`UnionFind`]: disjoint sets with path compression, used to reject cycles
//! - [`SpanningTree`]: selected edges plus adjacency lists
//! - [`MstApproximation`]: the strategy
//!
//! # References
//!
//! - Kruskal (1956), "On the Shortest Spanning Subtree of a Graph and the
//!   Traveling Salesman Problem"
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"

mod runner;
mod tree;
mod union_find;

pub(crate) const NAME: &str = "mst-approximation";

pub use runner::MstApproximation;
pub use tree::{sorted_edges, Edge, SpanningTree};
pub use union_find::UnionFind;
