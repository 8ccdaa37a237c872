//! MST approximation strategy.

use super::tree::SpanningTree;
use crate::error::TspResult;
use crate::geometry::City;
use crate::search::{Evaluator, TourStrategy};

/// Tour from a depth-first walk of the minimum spanning tree.
///
/// Evaluates exactly one tour. The walk starts at city 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MstApproximation;

impl MstApproximation {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl TourStrategy for MstApproximation {
    fn name(&self) -> &'static str {
        super::NAME
    }

    fn validate(&self, _cities: &[City]) -> TspResult<()> {
        Ok(())
    }

    fn search(&self, eval: &mut Evaluator<'_>) {
        if eval.should_stop() {
            return;
        }
        let tree = SpanningTree::kruskal(eval.cities());
        log::debug!(
            "{}: tree edges={} weight={:.4}",
            super::NAME,
            tree.edges().len(),
            tree.total_weight()
        );
        let tour = tree.preorder(0);
        eval.evaluate(&tour);
    }
}
