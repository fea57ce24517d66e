//! The append-only simulation event log.
//!
//! This is the user-facing narrative of a run (what the presentation layer
//! prints), distinct from the `tracing` diagnostics the crates emit.

use std::fmt;

use lift_core::{ElevatorId, Floor, PassengerId, Tick};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub time:  Tick,
    pub event: LogEvent,
}

impl LogEntry {
    pub fn new(time: Tick, event: LogEvent) -> Self {
        Self { time, event }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[tick {}] {}", self.time.0, self.event)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LogEvent {
    PassengerArrived {
        passenger: PassengerId,
        from:      Floor,
        to:        Floor,
    },
    ElevatorArrived {
        elevator: ElevatorId,
        floor:    Floor,
    },
    PassengerAlighted {
        passenger: PassengerId,
        elevator:  ElevatorId,
        floor:     Floor,
        wait_time: u64,
    },
    PassengersBoarded {
        elevator: ElevatorId,
        floor:    Floor,
        count:    usize,
    },
    SimulationComplete {
        total_ticks: u64,
    },
}

impl LogEvent {
    /// Stable snake_case name, used as the `kind` column by output writers.
    pub fn kind(&self) -> &'static str {
        match self {
            LogEvent::PassengerArrived { .. }   => "passenger_arrived",
            LogEvent::ElevatorArrived { .. }    => "elevator_arrived",
            LogEvent::PassengerAlighted { .. }  => "passenger_alighted",
            LogEvent::PassengersBoarded { .. }  => "passengers_boarded",
            LogEvent::SimulationComplete { .. } => "simulation_complete",
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEvent::PassengerArrived { passenger, from, to } => {
                write!(f, "passenger {passenger} waiting at {from} for {to}")
            }
            LogEvent::ElevatorArrived { elevator, floor } => {
                write!(f, "elevator {elevator} reached {floor}")
            }
            LogEvent::PassengerAlighted { passenger, floor, wait_time, .. } => {
                write!(f, "passenger {passenger} got off at {floor} (waited {wait_time} ticks)")
            }
            LogEvent::PassengersBoarded { elevator, floor, count } => {
                write!(f, "elevator {elevator} picked up {count} at {floor}")
            }
            LogEvent::SimulationComplete { total_ticks } => {
                write!(f, "all passengers delivered in {total_ticks} ticks")
            }
        }
    }
}
