//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `events`, `tick_summaries`, and `trips`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TickSummaryRow, TripRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 tick      INTEGER NOT NULL,
                 kind      TEXT    NOT NULL,
                 passenger INTEGER,
                 elevator  INTEGER,
                 floor     INTEGER,
                 to_floor  INTEGER,
                 value     INTEGER
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick        INTEGER PRIMARY KEY,
                 generated   INTEGER NOT NULL,
                 waiting     INTEGER NOT NULL,
                 in_elevator INTEGER NOT NULL,
                 done        INTEGER NOT NULL,
                 moving_cars INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS trips (
                 passenger  INTEGER PRIMARY KEY,
                 from_floor INTEGER NOT NULL,
                 to_floor   INTEGER NOT NULL,
                 start_tick INTEGER NOT NULL,
                 board_tick INTEGER,
                 end_tick   INTEGER,
                 wait_ticks INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events \
                 (tick, kind, passenger, elevator, floor, to_floor, value) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.kind,
                    row.passenger,
                    row.elevator,
                    row.floor,
                    row.to_floor,
                    row.value,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, generated, waiting, in_elevator, done, moving_cars) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick,
                row.generated,
                row.waiting,
                row.in_elevator,
                row.done,
                row.moving_cars,
            ],
        )?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trips \
                 (passenger, from_floor, to_floor, start_tick, board_tick, end_tick, wait_ticks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.passenger,
                    row.from_floor,
                    row.to_floor,
                    row.start_tick,
                    row.board_tick,
                    row.end_tick,
                    row.wait_ticks,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
