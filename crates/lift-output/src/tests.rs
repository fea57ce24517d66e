//! Integration tests for lift-output.

use lift_sim::{ElevatorId, Floor, LogEntry, LogEvent, PassengerId, Tick};

use crate::row::{EventRow, TickSummaryRow, TripRow};

fn arrived(tick: u64, id: u32, from: i32, to: i32) -> EventRow {
    EventRow::from(&LogEntry::new(Tick(tick), LogEvent::PassengerArrived {
        passenger: PassengerId(id),
        from:      Floor(from),
        to:        Floor(to),
    }))
}

fn summary_row(tick: u64) -> TickSummaryRow {
    TickSummaryRow { tick, generated: 4, waiting: 1, in_elevator: 2, done: 1, moving_cars: 1 }
}

fn trip_row(passenger: u32) -> TripRow {
    TripRow {
        passenger,
        from_floor: 1,
        to_floor:   6,
        start_tick: 2,
        board_tick: Some(4),
        end_tick:   Some(15),
        wait_ticks: 3,
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn arrival_row_fields() {
        let row = arrived(3, 7, 2, 9);
        assert_eq!(row.tick, 3);
        assert_eq!(row.kind, "passenger_arrived");
        assert_eq!(row.passenger, Some(7));
        assert_eq!(row.elevator, None);
        assert_eq!(row.floor, Some(2));
        assert_eq!(row.to_floor, Some(9));
        assert_eq!(row.value, None);
    }

    #[test]
    fn alighted_row_carries_wait() {
        let row = EventRow::from(&LogEntry::new(Tick(12), LogEvent::PassengerAlighted {
            passenger: PassengerId(4),
            elevator:  ElevatorId(2),
            floor:     Floor(8),
            wait_time: 5,
        }));
        assert_eq!(row.kind, "passenger_alighted");
        assert_eq!(row.elevator, Some(2));
        assert_eq!(row.value, Some(5));
        assert_eq!(row.to_floor, None);
    }

    #[test]
    fn completion_row_carries_total() {
        let row = EventRow::from(&LogEntry::new(Tick(90), LogEvent::SimulationComplete { total_ticks: 90 }));
        assert_eq!(row.kind, "simulation_complete");
        assert_eq!(row.value, Some(90));
        assert_eq!(row.floor, None);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("events.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("trips.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, "events.csv"),
            ["tick", "kind", "passenger", "elevator", "floor", "to_floor", "value"]
        );
        assert_eq!(
            headers(&dir, "tick_summaries.csv"),
            ["tick", "generated", "waiting", "in_elevator", "done", "moving_cars"]
        );
        assert_eq!(
            headers(&dir, "trips.csv"),
            ["passenger", "from_floor", "to_floor", "start_tick", "board_tick", "end_tick", "wait_ticks"]
        );
    }

    #[test]
    fn csv_missing_columns_are_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[arrived(1, 1, 3, 5), arrived(2, 2, 4, 1)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "events.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "passenger_arrived");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[0][3], ""); // elevator
        assert_eq!(&rows[1][5], "1"); // to_floor
        assert_eq!(&rows[1][6], ""); // value
    }

    #[test]
    fn csv_summary_and_trips() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.write_trips(&[trip_row(9)]).unwrap();
        w.finish().unwrap();

        let summaries = records(&dir, "tick_summaries.csv");
        assert_eq!(summaries.len(), 1);
        assert_eq!(&summaries[0][0], "3");
        assert_eq!(&summaries[0][3], "2"); // in_elevator

        let trips = records(&dir, "trips.csv");
        assert_eq!(&trips[0][0], "9");
        assert_eq!(&trips[0][4], "4"); // board_tick
        assert_eq!(&trips[0][5], "15"); // end_tick
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_unwritable_dir_errors() {
        let dir = tmp();
        let missing = dir.path().join("does-not-exist");
        assert!(CsvWriter::new(&missing).is_err());
    }

    #[test]
    fn integration_csv() {
        use lift_sim::{BuildingConfig, create_building_with};

        use crate::observer::SimOutputObserver;

        let config = BuildingConfig {
            floor_max:      Floor(5),
            elevator_count: 1,
            max_passengers: 4,
            ..BuildingConfig::default()
        };
        let mut building = create_building_with(config).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let outcome = building.run(2_000, &mut obs);
        assert!(outcome.completed);
        assert!(obs.take_error().is_none(), "no write errors expected");

        assert_eq!(records(&dir, "events.csv").len(), building.logs().len());
        assert_eq!(records(&dir, "tick_summaries.csv").len() as u64, outcome.time.0);

        let trips = records(&dir, "trips.csv");
        assert_eq!(trips.len(), 4);
        for trip in &trips {
            assert!(!trip[5].is_empty(), "delivered passenger without end tick");
        }

        let last = records(&dir, "events.csv").pop().unwrap();
        assert_eq!(&last[1], "simulation_complete");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn open(dir: &TempDir) -> rusqlite::Connection {
        rusqlite::Connection::open(dir.path().join("output.db")).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_event_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_events(&[arrived(1, 1, 2, 3), arrived(2, 2, 3, 2), arrived(3, 3, 1, 9)]).unwrap();
        w.finish().unwrap();

        let count: i64 = open(&dir)
            .query_row("SELECT COUNT(*) FROM events", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_missing_columns_are_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_events(&[arrived(1, 1, 2, 3)]).unwrap();
        w.finish().unwrap();

        let (elevator, to_floor): (Option<i64>, Option<i64>) = open(&dir)
            .query_row("SELECT elevator, to_floor FROM events", [], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap();
        assert_eq!(elevator, None);
        assert_eq!(to_floor, Some(3));
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(7)).unwrap();
        w.finish().unwrap();

        let (tick, waiting, moving): (i64, i64, i64) = open(&dir)
            .query_row(
                "SELECT tick, waiting, moving_cars FROM tick_summaries WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!((tick, waiting, moving), (7, 1, 1));
    }

    #[test]
    fn sqlite_trips() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trips(&[trip_row(1), trip_row(2)]).unwrap();
        w.finish().unwrap();

        let end: i64 = open(&dir)
            .query_row("SELECT end_tick FROM trips WHERE passenger = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(end, 15);
    }
}
