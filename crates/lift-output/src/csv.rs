//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv`
//! - `tick_summaries.csv`
//! - `trips.csv`
//!
//! Empty cells stand for columns that do not apply to a row.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TickSummaryRow, TripRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    trips:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["tick", "kind", "passenger", "elevator", "floor", "to_floor", "value"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "generated", "waiting", "in_elevator", "done", "moving_cars"])?;

        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record([
            "passenger", "from_floor", "to_floor", "start_tick", "board_tick", "end_tick", "wait_ticks",
        ])?;

        Ok(Self {
            events,
            summaries,
            trips,
            finished: false,
        })
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.kind.to_owned(),
                cell(row.passenger),
                cell(row.elevator),
                cell(row.floor),
                cell(row.to_floor),
                cell(row.value),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.generated.to_string(),
            row.waiting.to_string(),
            row.in_elevator.to_string(),
            row.done.to_string(),
            row.moving_cars.to_string(),
        ])?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.passenger.to_string(),
                row.from_floor.to_string(),
                row.to_floor.to_string(),
                row.start_tick.to_string(),
                cell(row.board_tick),
                cell(row.end_tick),
                row.wait_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        self.trips.flush()?;
        Ok(())
    }
}
