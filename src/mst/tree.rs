//! Kruskal spanning tree and its depth-first linearisation.

use super::union_find::UnionFind;
use crate::geometry::{distance, City};
use crate::tour::Tour;

/// A candidate connection between two cities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// One endpoint.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Euclidean distance between the two cities.
    pub distance: f64,
}

/// All `n(n-1)/2` unordered city pairs, sorted by ascending distance.
///
/// The sort is stable, so equal-length edges keep their `(u, v)`
/// enumeration order.
pub fn sorted_edges(cities: &[City]) -> Vec<Edge> {
    let n = cities.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for u in 0..n {
        for v in u + 1..n {
            edges.push(Edge {
                u,
                v,
                distance: distance(&cities[u], &cities[v]),
            });
        }
    }
    edges.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    edges
}

/// A minimum spanning tree over city indices.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::mst::SpanningTree;
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let tree = SpanningTree::kruskal(&square);
/// assert_eq!(tree.edges().len(), 3);
/// assert!((tree.total_weight() - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl SpanningTree {
    /// Builds the MST of the complete graph over `cities`.
    ///
    /// Scans edges by ascending distance and keeps each one whose endpoints
    /// are not yet connected. Stops once `n - 1` edges are selected.
    pub fn kruskal(cities: &[City]) -> Self {
        let n = cities.len();
        let mut sets = UnionFind::new(n);
        let mut selected = Vec::with_capacity(n.saturating_sub(1));

        for edge in sorted_edges(cities) {
            if selected.len() + 1 >= n {
                break;
            }
            if sets.union(edge.u, edge.v) {
                selected.push(edge);
            }
        }

        Self::from_edges(n, selected)
    }

    /// Builds adjacency lists for `n` nodes from `edges`, in edge order.
    pub fn from_edges(n: usize, edges: Vec<Edge>) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for edge in &edges {
            adjacency[edge.u].push(edge.v);
            adjacency[edge.v].push(edge.u);
        }
        Self { edges, adjacency }
    }

    /// The selected edges, in selection order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbours of `node`, in the order their edges were selected.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Sum of the selected edge lengths.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.distance).sum()
    }

    /// Depth-first preorder from `start`, following adjacency-list order.
    ///
    /// Matches a recursive walk that records a node on first visit and
    /// then descends into each unvisited neighbour in turn. Nodes not
    /// reachable from `start` are omitted.
    pub fn preorder(&self, start: usize) -> Tour {
        let n = self.adjacency.len();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            order.push(node);
            for &next in self.adjacency[node].iter().rev() {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }

        Tour::new(order)
    }
}
