//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use lift_sim::{CarStatus, Passenger, SimObserver, StepResult, Tick};

use crate::row::{EventRow, TickSummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the event log, a per-tick summary, and the
/// final trip table to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step(&mut self, step: &StepResult<'_>) {
        let events: Vec<EventRow> = step.new_logs().iter().map(EventRow::from).collect();
        if !events.is_empty() {
            let result = self.writer.write_events(&events);
            self.store_err(result);
        }

        let moving = step
            .elevators
            .iter()
            .filter(|car| car.status() == CarStatus::Moving)
            .count();
        let row = TickSummaryRow::new(step.time, &step.stats, moving as u32);
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _time: Tick, delivered: &[Passenger]) {
        let trips: Vec<TripRow> = delivered.iter().map(TripRow::from).collect();
        let result = self.writer.write_trips(&trips);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
