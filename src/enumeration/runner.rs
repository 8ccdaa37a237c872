//! Exhaustive enumeration loop.

use super::config::EnumerationConfig;
use crate::error::TspResult;
use crate::geometry::City;
use crate::search::{Evaluator, TourStrategy};
use crate::tour::Tour;

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false` and leaves `items` sorted ascending when it was already
/// the last permutation.
///
/// ```
/// use u_tsp::enumeration::next_permutation;
///
/// let mut items = [1, 2, 3];
/// assert!(next_permutation(&mut items));
/// assert_eq!(items, [1, 3, 2]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `pivot + 1`.
    let Some(pivot) = (0..n - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        items.reverse();
        return false;
    };
    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Evaluates every tour that starts at city 0.
///
/// # Usage
///
/// ```
/// use u_tsp::enumeration::{EnumerationConfig, ExhaustiveSearch};
/// use u_tsp::geometry::City;
/// use u_tsp::TourStrategy;
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
///     City::new(0.0, 1.0),
/// ];
/// let result = ExhaustiveSearch::new(EnumerationConfig::default())
///     .run(&square)
///     .unwrap();
/// assert_eq!(result.evaluated, 6);
/// assert!((result.length - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSearch {
    config: EnumerationConfig,
}

impl ExhaustiveSearch {
    /// Creates the strategy with `config`.
    pub fn new(config: EnumerationConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }
}

impl TourStrategy for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        super::NAME
    }

    fn time_limit_ms(&self) -> Option<u64> {
        self.config.time_limit_ms
    }

    fn validate(&self, cities: &[City]) -> TspResult<()> {
        self.config.validate()?;
        self.config.check_budget(cities.len())
    }

    fn search(&self, eval: &mut Evaluator<'_>) {
        let n = eval.city_count();
        log::debug!(
            "{}: enumerating tours={}",
            super::NAME,
            self.config.planned_tours(n)
        );

        let mut tour = Tour::identity(n);
        loop {
            if eval.should_stop() {
                break;
            }
            eval.evaluate(&tour);
            if !next_permutation(&mut tour[1..]) {
                break;
            }
        }
    }
}
