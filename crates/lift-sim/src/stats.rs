//! Aggregate counts and wait-time summaries.

use lift_car::Passenger;

/// Passenger counts at the end of a tick.
///
/// `waiting + in_elevator + done == generated <= total` always holds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// The passenger cap for the run.
    pub total:       u32,
    pub generated:   u32,
    pub waiting:     u32,
    pub in_elevator: u32,
    pub done:        u32,
}

impl Stats {
    /// Every passenger has been generated and delivered.
    pub fn is_complete(&self) -> bool {
        self.generated == self.total
            && self.waiting == 0
            && self.in_elevator == 0
            && self.done == self.total
    }

    /// `waiting + in_elevator + done == generated`.
    pub fn is_conserved(&self) -> bool {
        self.waiting + self.in_elevator + self.done == self.generated && self.generated <= self.total
    }
}

/// Wait and trip times over delivered passengers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitSummary {
    pub delivered: usize,
    pub mean_wait: f64,
    pub max_wait:  u64,
    /// Mean ticks from appearing to arriving.
    pub mean_trip: f64,
}

impl WaitSummary {
    pub fn from_passengers(done: &[Passenger]) -> Self {
        if done.is_empty() {
            return Self::default();
        }
        let n = done.len() as f64;
        let total_wait: u64 = done.iter().map(Passenger::wait_time).sum();
        let total_trip: u64 = done.iter().filter_map(Passenger::trip_time).sum();
        Self {
            delivered: done.len(),
            mean_wait: total_wait as f64 / n,
            max_wait:  done.iter().map(Passenger::wait_time).max().unwrap_or(0),
            mean_trip: total_trip as f64 / n,
        }
    }
}
