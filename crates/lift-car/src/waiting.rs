//! `WaitingQueues`: the per-floor queues of passengers waiting for a car.
//!
//! One `Vec` per served floor, indexed by `floor - floor_min`.  Each queue
//! is in arrival order; cars board from the front.  Only `Waiting`
//! passengers are ever stored here.

use std::ops::RangeInclusive;

use lift_core::Floor;

use crate::Passenger;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingQueues {
    floor_min: Floor,
    queues:    Vec<Vec<Passenger>>,
}

impl WaitingQueues {
    /// Empty queues for every floor in `floors`.
    pub fn new(floors: RangeInclusive<Floor>) -> Self {
        let (min, max) = floors.into_inner();
        assert!(min <= max, "empty floor range {min}..={max}");
        let count = max.distance(min) as usize + 1;
        Self {
            floor_min: min,
            queues:    vec![Vec::new(); count],
        }
    }

    fn slot(&self, floor: Floor) -> usize {
        let offset = floor.0 - self.floor_min.0;
        assert!(
            offset >= 0 && (offset as usize) < self.queues.len(),
            "floor {floor} outside the building"
        );
        offset as usize
    }

    /// Append `passenger` to the back of its origin floor's queue.
    pub fn push(&mut self, passenger: Passenger) {
        assert!(passenger.is_waiting(), "only waiting passengers can queue");
        let slot = self.slot(passenger.from);
        self.queues[slot].push(passenger);
    }

    /// The queue at `floor`, front first.
    pub fn at(&self, floor: Floor) -> &[Passenger] {
        &self.queues[self.slot(floor)]
    }

    /// Remove and return the whole queue at `floor`.
    pub fn take(&mut self, floor: Floor) -> Vec<Passenger> {
        let slot = self.slot(floor);
        std::mem::take(&mut self.queues[slot])
    }

    /// Reinstate the unboarded remainder of a queue taken with [`take`][Self::take].
    ///
    /// # Panics
    /// Panics if anyone queued at `floor` in between.
    pub fn put_back(&mut self, floor: Floor, remainder: Vec<Passenger>) {
        let slot = self.slot(floor);
        assert!(self.queues[slot].is_empty(), "queue at {floor} changed while taken");
        debug_assert!(remainder.iter().all(|p| p.is_waiting() && p.from == floor));
        self.queues[slot] = remainder;
    }

    /// `(floor, queue)` for every floor, lowest first.
    pub fn iter(&self) -> impl Iterator<Item = (Floor, &[Passenger])> + '_ {
        self.queues
            .iter()
            .enumerate()
            .map(|(i, q)| (Floor(self.floor_min.0 + i as i32), q.as_slice()))
    }

    /// Floors with at least one waiting passenger, lowest first.
    pub fn floors_with_waiting(&self) -> impl Iterator<Item = Floor> + '_ {
        self.iter().filter(|(_, q)| !q.is_empty()).map(|(f, _)| f)
    }

    /// `true` if anyone is waiting anywhere.
    pub fn has_waiting(&self) -> bool {
        self.queues.iter().any(|q| !q.is_empty())
    }

    /// Total number of waiting passengers.
    pub fn len(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_waiting()
    }

    /// Every waiting passenger, floor by floor.
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.queues.iter().flatten()
    }

    /// Add one tick of waiting time to everyone queued.
    pub fn age_all(&mut self) {
        for passenger in self.queues.iter_mut().flatten() {
            passenger.age();
        }
    }
}
