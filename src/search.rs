//! The evaluation context shared by all strategies.
//!
//! [`TourStrategy`] is the seam between the generic run loop and the
//! individual strategies. A strategy only decides which tours to build; the
//! [`Evaluator`] measures each one, routes it through the
//! [`BestTourTracker`], emits the step event and answers whether the run
//! should stop (cancellation or time limit).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::TspResult;
use crate::geometry::{validate_cities, City};
use crate::report::{NoopReporter, Reporter, StepEvent};
use crate::tour::Tour;
use crate::tracker::BestTourTracker;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopReason {
    /// The strategy ran to its natural end.
    #[default]
    Completed,
    /// The cancellation flag was raised.
    Cancelled,
    /// The configured wall-clock limit elapsed.
    TimeLimit,
}

/// Result of a strategy run.
///
/// When a run is cancelled before its first evaluation, `tour` is empty and
/// `length` is `+∞`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourResult {
    /// Best tour found.
    pub tour: Tour,

    /// Closed length of `tour`.
    pub length: f64,

    /// Number of tours evaluated.
    pub evaluated: u64,

    /// Number of times the best tour was replaced.
    pub improvements: u64,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Why the run ended.
    pub stop: StopReason,

    /// Best length after each improvement, in order.
    pub length_history: Vec<f64>,
}

impl TourResult {
    /// Returns `true` if the run ended early.
    pub fn stopped_early(&self) -> bool {
        self.stop != StopReason::Completed
    }

    /// Returns `true` if `tour` visits every city exactly once.
    ///
    /// Genetic search without repair can end on a tour that repeats some
    /// cities and misses others; every other strategy always yields a
    /// permutation. An empty tour (no evaluation happened) is not valid.
    pub fn is_valid_tour(&self) -> bool {
        !self.tour.is_empty() && self.tour.is_permutation(self.tour.len())
    }
}

/// Per-run evaluation context handed to [`TourStrategy::search`].
pub struct Evaluator<'a> {
    cities: &'a [City],
    tracker: &'a mut BestTourTracker,
    reporter: &'a mut dyn Reporter,
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
    started: Instant,
    evaluated: u64,
    improvements: u64,
    length_history: Vec<f64>,
    stop: StopReason,
}

impl<'a> Evaluator<'a> {
    fn new(
        cities: &'a [City],
        tracker: &'a mut BestTourTracker,
        reporter: &'a mut dyn Reporter,
        cancel: Option<Arc<AtomicBool>>,
        time_limit_ms: Option<u64>,
    ) -> Self {
        let started = Instant::now();
        Self {
            cities,
            tracker,
            reporter,
            cancel,
            deadline: time_limit_ms.map(|ms| started + Duration::from_millis(ms)),
            started,
            evaluated: 0,
            improvements: 0,
            length_history: Vec::new(),
            stop: StopReason::Completed,
        }
    }

    /// The cities of this run.
    pub fn cities(&self) -> &'a [City] {
        self.cities
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Measures `tour`, offers it to the tracker and reports the step.
    ///
    /// Returns the tour's length.
    pub fn evaluate(&mut self, tour: &Tour) -> f64 {
        let length = tour.length(self.cities);
        let is_new_best = self.tracker.consider(tour, length);
        self.evaluated += 1;
        if is_new_best {
            self.improvements += 1;
            self.length_history.push(length);
            log::trace!("search: new best length={length:.4} evaluated={}", self.evaluated);
        }
        self.reporter.on_step(&StepEvent {
            tour,
            length,
            is_new_best,
            best_length: self.tracker.best_length(),
            evaluated: self.evaluated,
            elapsed: self.started.elapsed(),
        });
        length
    }

    /// Checks the cancellation flag and the deadline.
    ///
    /// Once this returns `true` it keeps returning `true`.
    pub fn should_stop(&mut self) -> bool {
        if self.stop != StopReason::Completed {
            return true;
        }
        if self.cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            self.stop = StopReason::Cancelled;
            return true;
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.stop = StopReason::TimeLimit;
            return true;
        }
        false
    }

    /// Tours evaluated so far.
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Current best length.
    pub fn best_length(&self) -> f64 {
        self.tracker.best_length()
    }

    /// Current best tour; empty before the first evaluation.
    pub fn best_tour(&self) -> &Tour {
        self.tracker.best_tour()
    }

    fn finish(self) -> (TourResult, &'a mut dyn Reporter) {
        let result = TourResult {
            tour: self.tracker.best_tour().clone(),
            length: self.tracker.best_length(),
            evaluated: self.evaluated,
            improvements: self.improvements,
            elapsed: self.started.elapsed(),
            stop: self.stop,
            length_history: self.length_history,
        };
        (result, self.reporter)
    }
}

/// A tour construction or search strategy.
///
/// Implementors provide validation and the search body; the provided `run*`
/// methods handle input checks, tracker reset, reporting and logging.
pub trait TourStrategy {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fewest cities this strategy accepts.
    fn min_cities(&self) -> usize {
        1
    }

    /// Wall-clock limit for the run, if any.
    fn time_limit_ms(&self) -> Option<u64> {
        None
    }

    /// Validates the configuration against a concrete city set.
    ///
    /// Called before any evaluation. Budget guards live here.
    fn validate(&self, cities: &[City]) -> TspResult<()>;

    /// Produces tours and feeds every one of them to `eval`.
    fn search(&self, eval: &mut Evaluator<'_>);

    /// Runs on `cities` with a fresh tracker and no reporter.
    fn run(&self, cities: &[City]) -> TspResult<TourResult> {
        let mut tracker = BestTourTracker::new();
        self.run_with_cancel(cities, &mut tracker, &mut NoopReporter, None)
    }

    /// Runs on `cities`, streaming step events to `reporter`.
    fn run_with_reporter(
        &self,
        cities: &[City],
        reporter: &mut dyn Reporter,
    ) -> TspResult<TourResult> {
        let mut tracker = BestTourTracker::new();
        self.run_with_cancel(cities, &mut tracker, reporter, None)
    }

    /// Runs against a caller-owned tracker with an optional cancellation
    /// token.
    ///
    /// The tracker is reset before the first evaluation. If `cancel` is set
    /// to `true`, the run stops at the next iteration boundary and returns
    /// the best tour found so far.
    fn run_with_cancel(
        &self,
        cities: &[City],
        tracker: &mut BestTourTracker,
        reporter: &mut dyn Reporter,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<TourResult> {
        validate_cities(cities, self.min_cities())?;
        self.validate(cities)?;

        tracker.reset();
        log::info!("{}: start cities={}", self.name(), cities.len());

        let mut eval = Evaluator::new(
            cities,
            tracker,
            reporter,
            cancel,
            self.time_limit_ms(),
        );
        self.search(&mut eval);
        let (result, reporter) = eval.finish();
        reporter.on_finish(&result);

        log::info!(
            "{}: finish best_length={:.4} evaluated={} improvements={} stop={:?} elapsed_ms={}",
            self.name(),
            result.length,
            result.evaluated,
            result.improvements,
            result.stop,
            result.elapsed.as_millis()
        );
        Ok(result)
    }
}
