//! A request to travel between two floors.

use lift_core::{Direction, Floor, PassengerId, Tick};

/// Lifecycle state of a passenger.  Transitions only move forward:
/// `Waiting → InElevator → Done`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassengerStatus {
    Waiting,
    InElevator,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:   PassengerId,
    pub from: Floor,
    pub to:   Floor,

    status:     PassengerStatus,
    /// Ticks spent `Waiting`.  Frozen once boarded.
    wait_time:  u64,
    start_time: Tick,
    board_time: Option<Tick>,
    end_time:   Option<Tick>,
}

impl Passenger {
    /// A new `Waiting` passenger created at `now`.
    ///
    /// # Panics
    /// Panics if `from == to`.
    pub fn new(id: PassengerId, from: Floor, to: Floor, now: Tick) -> Self {
        assert_ne!(from, to, "passenger {id} must travel between distinct floors");
        Self {
            id,
            from,
            to,
            status:     PassengerStatus::Waiting,
            wait_time:  0,
            start_time: now,
            board_time: None,
            end_time:   None,
        }
    }

    #[inline]
    pub fn status(&self) -> PassengerStatus {
        self.status
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == PassengerStatus::Waiting
    }

    #[inline]
    pub fn wait_time(&self) -> u64 {
        self.wait_time
    }

    /// Tick the passenger appeared.
    #[inline]
    pub fn start_time(&self) -> Tick {
        self.start_time
    }

    #[inline]
    pub fn board_time(&self) -> Option<Tick> {
        self.board_time
    }

    /// Tick the passenger reached their destination.
    #[inline]
    pub fn end_time(&self) -> Option<Tick> {
        self.end_time
    }

    /// Ticks from creation to arrival, once `Done`.
    pub fn trip_time(&self) -> Option<u64> {
        self.end_time.map(|end| end.since(self.start_time))
    }

    /// The way this passenger needs to travel from their origin.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.from.direction_to(self.to)
    }

    /// Count one more tick of waiting.  No-op once boarded.
    #[inline]
    pub fn age(&mut self) {
        if self.status == PassengerStatus::Waiting {
            self.wait_time += 1;
        }
    }

    pub(crate) fn board(&mut self, now: Tick) {
        assert_eq!(
            self.status,
            PassengerStatus::Waiting,
            "passenger {} boarded twice",
            self.id
        );
        self.status = PassengerStatus::InElevator;
        self.board_time = Some(now);
    }

    pub(crate) fn alight(&mut self, now: Tick) {
        assert_eq!(
            self.status,
            PassengerStatus::InElevator,
            "passenger {} alighted without boarding",
            self.id
        );
        self.status = PassengerStatus::Done;
        self.end_time = Some(now);
    }
}
