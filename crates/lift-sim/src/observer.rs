//! Observer hooks for progress reporting and data collection.

use lift_car::Passenger;
use lift_core::Tick;

use crate::{Stats, StepResult};

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Narrator;
///
/// impl SimObserver for Narrator {
///     fn on_step(&mut self, step: &StepResult<'_>) {
///         for entry in step.new_logs() {
///             println!("{entry}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every step with that step's result.
    fn on_step(&mut self, _step: &StepResult<'_>) {}

    /// Called once, on the tick the last passenger is delivered.
    fn on_complete(&mut self, _time: Tick, _stats: &Stats) {}

    /// Called once when `run` returns, with every delivered passenger.
    fn on_run_end(&mut self, _time: Tick, _delivered: &[Passenger]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
