//! Closed tours over city indices and their length.

use std::ops::{Deref, DerefMut};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::geometry::{distance, City};

/// An ordered visiting sequence over city indices, implicitly closed.
///
/// A valid tour is a permutation of `0..n`. Genetic crossover can produce
/// sequences that are not; [`Tour::is_permutation`] tells the two apart.
/// Storing a tour as a best record always clones it, so later in-place
/// changes to a working tour never leak into the record.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::tour::Tour;
///
/// let cities = [
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let tour = Tour::identity(4);
/// assert!((tour.length(&cities) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps an index sequence without checking it.
    pub fn new(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n` (Fisher–Yates).
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut tour = Self::identity(n);
        tour.0.shuffle(rng);
        tour
    }

    /// Closed length of this tour over `cities`.
    pub fn length(&self, cities: &[City]) -> f64 {
        tour_length(&self.0, cities)
    }

    /// Returns `true` if this tour visits each of `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.0 {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// Consumes the tour, returning the index sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl DerefMut for Tour {
    fn deref_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }
}

impl From<Vec<usize>> for Tour {
    fn from(order: Vec<usize>) -> Self {
        Self(order)
    }
}

impl FromIterator<usize> for Tour {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Sum of consecutive distances in `order`, plus the edge from the last
/// city back to the first.
///
/// Indices are not checked for being a permutation; every index must be in
/// range for `cities`.
pub fn tour_length(order: &[usize], cities: &[City]) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };
    let open: f64 = order
        .windows(2)
        .map(|w| distance(&cities[w[0]], &cities[w[1]]))
        .sum();
    open + distance(&cities[last], &cities[first])
}
