//! Crossover, mutation and repair on tours.
//!
//! Position 0 is never chosen as a cut or swap point, so a child always
//! starts with its first parent's first city.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other (O(n)).
//!   Does not preserve permutations.
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two random positions in `[1, n-1]` (O(1))
//!
//! # Repair
//!
//! - [`repair`]: replace repeated cities with the missing ones (O(n))

use rand::Rng;

use crate::tour::Tour;

/// Single-point crossover.
///
/// Picks a cut uniformly in `[1, n-1]` and returns `parent1[..cut]` followed
/// by `parent2[cut..]`. Tours shorter than two cities are cloned from
/// `parent1`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n < 2 {
        return parent1.clone();
    }
    let cut = rng.random_range(1..n);
    crossover_at(parent1, parent2, cut)
}

/// Crossover with a fixed cut point.
pub fn crossover_at(parent1: &Tour, parent2: &Tour, cut: usize) -> Tour {
    parent1[..cut]
        .iter()
        .chain(&parent2[cut..])
        .copied()
        .collect()
}

/// Swap mutation: exchange two positions drawn uniformly from `[1, n-1]`.
///
/// The two draws are independent and may coincide.
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(1..n);
    let j = rng.random_range(1..n);
    tour.swap(i, j);
}

/// Turns a tour over `0..n` into a permutation.
///
/// Keeps the first occurrence of every city in place and overwrites later
/// repeats (and out-of-range indices) with the missing cities in ascending
/// order. A tour that is already a permutation is left untouched.
///
/// # Panics
/// Panics if `tour.len() != n`.
pub fn repair(tour: &mut Tour, n: usize) {
    assert_eq!(tour.len(), n, "tour must have one slot per city");
    let mut seen = vec![false; n];
    let mut duplicates = Vec::new();
    for (pos, &city) in tour.iter().enumerate() {
        if city < n && !seen[city] {
            seen[city] = true;
        } else {
            duplicates.push(pos);
        }
    }
    let missing = seen
        .iter()
        .enumerate()
        .filter(|(_, &present)| !present)
        .map(|(city, _)| city);
    for (pos, city) in duplicates.into_iter().zip(missing) {
        tour[pos] = city;
    }
}
