//! Best-tour record shared by every strategy.
//!
//! Strategies keep no history of their own. Every tour they evaluate goes
//! through [`BestTourTracker::consider`], which keeps a copy of the shortest
//! one seen since the last [`reset`](BestTourTracker::reset).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::tour::Tour;

/// The shortest tour seen so far and its length.
///
/// Starts empty with length `+∞`. `best_length` never increases between
/// resets.
///
/// # Examples
///
/// ```
/// use u_tsp::tour::Tour;
/// use u_tsp::tracker::BestTourTracker;
///
/// let mut tracker = BestTourTracker::new();
/// assert!(tracker.consider(&Tour::identity(3), 10.0));
/// assert!(!tracker.consider(&Tour::identity(3), 12.0));
/// assert_eq!(tracker.best_length(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct BestTourTracker {
    best_tour: Tour,
    best_length: f64,
}

impl Default for BestTourTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BestTourTracker {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            best_tour: Tour::default(),
            best_length: f64::INFINITY,
        }
    }

    /// Clears the record back to empty / `+∞`.
    pub fn reset(&mut self) {
        self.best_tour = Tour::default();
        self.best_length = f64::INFINITY;
    }

    /// Offers a tour. Stores a copy and returns `true` only when `length`
    /// is strictly shorter than the current best.
    pub fn consider(&mut self, tour: &Tour, length: f64) -> bool {
        if length < self.best_length {
            self.best_tour.clone_from(tour);
            self.best_length = length;
            true
        } else {
            false
        }
    }

    /// Length of the best tour, `+∞` while empty.
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    /// The best tour, empty while nothing has been considered.
    pub fn best_tour(&self) -> &Tour {
        &self.best_tour
    }

    /// Returns `true` if no tour has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.best_length == f64::INFINITY
    }
}

/// A [`BestTourTracker`] behind a mutex, for strategies running on
/// separate threads against one record.
///
/// The length/tour pair is always replaced under one lock, so readers never
/// observe a length belonging to a different tour.
#[derive(Debug, Clone, Default)]
pub struct SharedTracker {
    inner: Arc<Mutex<BestTourTracker>>,
}

impl SharedTracker {
    /// Creates an empty shared record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread-safe [`BestTourTracker::consider`].
    pub fn consider(&self, tour: &Tour, length: f64) -> bool {
        self.lock().consider(tour, length)
    }

    /// Copies out the current `(tour, length)` pair.
    pub fn snapshot(&self) -> (Tour, f64) {
        let guard = self.lock();
        (guard.best_tour().clone(), guard.best_length())
    }

    /// Clears the record.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Merges a finished local record into the shared one.
    pub fn merge(&self, local: &BestTourTracker) -> bool {
        if local.is_empty() {
            return false;
        }
        self.consider(local.best_tour(), local.best_length())
    }

    // A panic mid-update cannot leave the pair half-written: `consider`
    // assigns both fields after any fallible work.
    fn lock(&self) -> MutexGuard<'_, BestTourTracker> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
