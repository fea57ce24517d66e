//! Plain data row types written by output backends.

use lift_sim::{LogEntry, LogEvent, Passenger, Stats, Tick};

/// One entry of the simulation event log, flattened.
///
/// Columns that do not apply to an event kind are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub tick:      u64,
    pub kind:      &'static str,
    pub passenger: Option<u32>,
    pub elevator:  Option<u16>,
    pub floor:     Option<i32>,
    /// Destination floor (`passenger_arrived` only).
    pub to_floor:  Option<i32>,
    /// Wait ticks, boarded count, or total ticks depending on `kind`.
    pub value:     Option<u64>,
}

impl From<&LogEntry> for EventRow {
    fn from(entry: &LogEntry) -> Self {
        let mut row = EventRow {
            tick:      entry.time.0,
            kind:      entry.event.kind(),
            passenger: None,
            elevator:  None,
            floor:     None,
            to_floor:  None,
            value:     None,
        };
        match entry.event {
            LogEvent::PassengerArrived { passenger, from, to } => {
                row.passenger = Some(passenger.0);
                row.floor = Some(from.0);
                row.to_floor = Some(to.0);
            }
            LogEvent::ElevatorArrived { elevator, floor } => {
                row.elevator = Some(elevator.0);
                row.floor = Some(floor.0);
            }
            LogEvent::PassengerAlighted { passenger, elevator, floor, wait_time } => {
                row.passenger = Some(passenger.0);
                row.elevator = Some(elevator.0);
                row.floor = Some(floor.0);
                row.value = Some(wait_time);
            }
            LogEvent::PassengersBoarded { elevator, floor, count } => {
                row.elevator = Some(elevator.0);
                row.floor = Some(floor.0);
                row.value = Some(count as u64);
            }
            LogEvent::SimulationComplete { total_ticks } => {
                row.value = Some(total_ticks);
            }
        }
        row
    }
}

/// Passenger counts at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub generated:   u32,
    pub waiting:     u32,
    pub in_elevator: u32,
    pub done:        u32,
    pub moving_cars: u32,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, stats: &Stats, moving_cars: u32) -> Self {
        Self {
            tick:        tick.0,
            generated:   stats.generated,
            waiting:     stats.waiting,
            in_elevator: stats.in_elevator,
            done:        stats.done,
            moving_cars,
        }
    }
}

/// One delivered passenger's journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub passenger:  u32,
    pub from_floor: i32,
    pub to_floor:   i32,
    pub start_tick: u64,
    pub board_tick: Option<u64>,
    pub end_tick:   Option<u64>,
    pub wait_ticks: u64,
}

impl From<&Passenger> for TripRow {
    fn from(p: &Passenger) -> Self {
        Self {
            passenger:  p.id.0,
            from_floor: p.from.0,
            to_floor:   p.to.0,
            start_tick: p.start_time().0,
            board_tick: p.board_time().map(|t| t.0),
            end_tick:   p.end_time().map(|t| t.0),
            wait_ticks: p.wait_time(),
        }
    }
}
