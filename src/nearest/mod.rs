//! Nearest-neighbour tour construction.
//!
//! From a start city, repeatedly moves to the closest unvisited city. Ties go
//! to the lowest city index. The strategy builds one tour per start city
//! (or only from the configured start) and keeps the shortest. Each
//! construction is O(n²), so a full pass is O(n³).

mod config;
mod runner;

pub(crate) const NAME: &str = "nearest-neighbor";

pub use config::NearestNeighborConfig;
pub use runner::{nearest_neighbor_tour, NearestNeighbor};
