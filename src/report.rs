//! Step events and the reporters that consume them.
//!
//! A strategy emits one [`StepEvent`] per evaluated tour. Reporters are pure
//! sinks: they can draw, print, record or pace the run, but nothing they do
//! feeds back into the search.

use std::time::Duration;

use crate::search::TourResult;
use crate::tour::Tour;

/// One evaluated tour, as seen by a reporter.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    /// The tour just evaluated.
    pub tour: &'a Tour,
    /// Its closed length.
    pub length: f64,
    /// Whether this tour became the new best.
    pub is_new_best: bool,
    /// Best length after this step.
    pub best_length: f64,
    /// Number of tours evaluated so far in this run, including this one.
    pub evaluated: u64,
    /// Time since the run started.
    pub elapsed: Duration,
}

/// Owned copy of a [`StepEvent`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// The tour evaluated at this step.
    pub tour: Tour,
    /// Its closed length.
    pub length: f64,
    /// Whether it became the new best.
    pub is_new_best: bool,
    /// Best length after this step.
    pub best_length: f64,
    /// Tours evaluated so far, including this one.
    pub evaluated: u64,
    /// Time since the run started.
    pub elapsed: Duration,
}

impl From<&StepEvent<'_>> for StepRecord {
    fn from(event: &StepEvent<'_>) -> Self {
        Self {
            tour: event.tour.clone(),
            length: event.length,
            is_new_best: event.is_new_best,
            best_length: event.best_length,
            evaluated: event.evaluated,
            elapsed: event.elapsed,
        }
    }
}

/// Receives the step stream of a run.
///
/// Closures taking `&StepEvent` implement this trait directly.
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::nearest::{NearestNeighbor, NearestNeighborConfig};
/// use u_tsp::report::StepEvent;
/// use u_tsp::TourStrategy;
///
/// let cities = [City::new(0.0, 0.0), City::new(1.0, 0.0), City::new(0.0, 1.0)];
/// let mut improvements = 0;
/// let mut on_step = |e: &StepEvent<'_>| {
///     if e.is_new_best {
///         improvements += 1;
///     }
/// };
/// NearestNeighbor::new(NearestNeighborConfig::default())
///     .run_with_reporter(&cities, &mut on_step)
///     .unwrap();
/// assert!(improvements >= 1);
/// ```
pub trait Reporter {
    /// Called after every tour evaluation.
    fn on_step(&mut self, event: &StepEvent<'_>);

    /// Called once when the run ends, with the final result.
    fn on_finish(&mut self, _result: &TourResult) {}
}

impl<F> Reporter for F
where
    F: FnMut(&StepEvent<'_>),
{
    fn on_step(&mut self, event: &StepEvent<'_>) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_step(&mut self, _event: &StepEvent<'_>) {}
}

/// Records every step, optionally only the improving ones.
#[derive(Debug, Clone, Default)]
pub struct StepLog {
    records: Vec<StepRecord>,
    improvements_only: bool,
    finished: bool,
}

impl StepLog {
    /// Records every step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records only steps that produced a new best.
    pub fn improvements_only() -> Self {
        Self {
            improvements_only: true,
            ..Self::default()
        }
    }

    /// The recorded steps, in evaluation order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Whether `on_finish` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes the log.
    pub fn into_records(self) -> Vec<StepRecord> {
        self.records
    }
}

impl Reporter for StepLog {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        if !self.improvements_only || event.is_new_best {
            self.records.push(StepRecord::from(event));
        }
    }

    fn on_finish(&mut self, _result: &TourResult) {
        self.finished = true;
    }
}

/// Sleeps a fixed delay after forwarding each step.
///
/// Pacing for animated front ends; it has no effect on the search itself.
#[derive(Debug, Clone)]
pub struct Paced<R> {
    inner: R,
    delay: Duration,
}

impl<R: Reporter> Paced<R> {
    /// Wraps `inner`, pausing `delay` after every step.
    pub fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Returns the wrapped reporter.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for Paced<R> {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        self.inner.on_step(event);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    fn on_finish(&mut self, result: &TourResult) {
        self.inner.on_finish(result);
    }
}
