//! The elevator car state machine.
//!
//! # States
//!
//! ```text
//!            demand detected                    arrived at a stop floor
//!   Idle ────────────────────▶ Moving ─────────────────────────────────▶ Loading
//!    ▲                          ▲  │ no stop: keep going                   │
//!    │                          │  └──────────────┘                        │
//!    │                          └──── doors held stop_time ticks ──────────┤
//!    └──────────────────── no riders, nobody waiting ◀─────────────────────┘
//! ```
//!
//! `Direction` is kept separately from `CarStatus`: a loading car still
//! remembers which way it was heading, and an idle car has no direction.
//!
//! `status_timer` counts ticks spent in the current status.  It advances in
//! [`Elevator::advance`] while moving (one floor per `move_time` ticks) and
//! while loading (door dwell); it resets on every status change.

use std::collections::BTreeSet;

use lift_core::{CarSpec, Direction, ElevatorId, Floor, Tick};
use tracing::trace;

use crate::{Passenger, WaitingQueues};

/// Operating status of a car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CarStatus {
    Moving,
    Loading,
    #[default]
    Idle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    id:            ElevatorId,
    spec:          CarSpec,
    floor:         Floor,
    direction:     Direction,
    status:        CarStatus,
    status_timer:  u32,
    passengers:    Vec<Passenger>,
    /// Destinations of the boarded passengers.  Always equal to the set of
    /// `p.to` over `passengers`.
    target_floors: BTreeSet<Floor>,
}

impl Elevator {
    /// An idle, empty car parked at `floor`.
    ///
    /// # Panics
    /// Panics if `floor` is outside `spec`'s range or `spec.capacity == 0`.
    pub fn new(id: ElevatorId, spec: CarSpec, floor: Floor) -> Self {
        assert!(spec.serves(floor), "car {id} cannot start at {floor}");
        assert!(spec.capacity > 0, "car {id} has no capacity");
        Self {
            id,
            spec,
            floor,
            direction:     Direction::Idle,
            status:        CarStatus::Idle,
            status_timer:  0,
            passengers:    Vec::with_capacity(spec.capacity),
            target_floors: BTreeSet::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn spec(&self) -> &CarSpec {
        &self.spec
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn status(&self) -> CarStatus {
        self.status
    }

    #[inline]
    pub fn status_timer(&self) -> u32 {
        self.status_timer
    }

    /// Boarded passengers, in boarding order.
    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    #[inline]
    pub fn target_floors(&self) -> &BTreeSet<Floor> {
        &self.target_floors
    }

    /// Seats left.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.spec.capacity - self.passengers.len()
    }

    // ── Stop decisions ────────────────────────────────────────────────────

    /// Whether the dispatcher may unload and load this car now.
    pub fn can_stop(&self, waiting: &WaitingQueues) -> bool {
        match self.status {
            CarStatus::Idle    => true,
            CarStatus::Loading => self.status_timer >= self.spec.stop_time,
            CarStatus::Moving  => {
                self.status_timer >= self.spec.move_time && self.should_stop_at_floor(waiting)
            }
        }
    }

    /// Whether the current floor is worth stopping at.
    ///
    /// True when a rider gets off here, when someone here wants to go our
    /// way (any way, if idle) and there is a free seat, or when the car has
    /// reached the end of the shaft in its direction of travel.
    pub fn should_stop_at_floor(&self, waiting: &WaitingQueues) -> bool {
        if self.target_floors.contains(&self.floor) {
            return true;
        }
        let has_match = waiting
            .at(self.floor)
            .iter()
            .any(|p| self.direction == Direction::Idle || p.direction() == self.direction);
        if has_match && self.spare_capacity() > 0 {
            return true;
        }
        self.spec.is_terminal(self.floor, self.direction)
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Advance the car by one tick.
    ///
    /// A moving car changes floor once `status_timer` has reached
    /// `move_time`, and switches to `Loading` if the new floor is a stop.
    /// A loading car only counts door time.  Returns `true` if the floor
    /// changed.
    pub fn advance(&mut self, waiting: &WaitingQueues) -> bool {
        match self.status {
            CarStatus::Moving => {
                if self.status_timer < self.spec.move_time {
                    self.status_timer += 1;
                    return false;
                }
                debug_assert_ne!(self.direction, Direction::Idle, "car {} moving nowhere", self.id);
                let next = self.floor.step(self.direction);
                assert!(
                    self.spec.serves(next),
                    "car {} would leave the shaft at {next} heading {}",
                    self.id,
                    self.direction
                );
                self.floor = next;
                self.status_timer = 0;
                if self.should_stop_at_floor(waiting) {
                    self.set_status(CarStatus::Loading);
                }
                trace!(car = %self.id, floor = %self.floor, status = ?self.status, "moved");
                true
            }
            CarStatus::Loading => {
                self.status_timer = self.status_timer.saturating_add(1);
                false
            }
            CarStatus::Idle => false,
        }
    }

    /// Re-evaluate where the car should head next.
    ///
    /// - No riders and nobody waiting anywhere: go idle.
    /// - Heading up (down): keep going while a target or a waiting
    ///   passenger lies strictly above (below); otherwise reverse if there
    ///   is demand on the other side, stopping first if the current floor
    ///   is worth serving under the new heading.
    /// - Idle with demand: head for the nearest floor with waiting
    ///   passengers or riders' destinations, lowest floor on a tie.
    ///
    /// Demand that exists only at the current floor stops the car where it
    /// is with its direction cleared, so the next stop check can serve it.
    /// A loading car keeps its doors open until `stop_time` has elapsed.
    pub fn update_direction(&mut self, waiting: &WaitingQueues) {
        if self.passengers.is_empty() && !waiting.has_waiting() {
            self.direction = Direction::Idle;
            self.set_status(CarStatus::Idle);
            return;
        }

        match self.direction {
            heading @ (Direction::Up | Direction::Down) => {
                if self.has_demand_toward(heading, waiting) {
                    self.head(heading);
                } else if self.has_demand_toward(heading.reversed(), waiting) {
                    trace!(car = %self.id, floor = %self.floor, from = %heading, "reversing");
                    self.head(heading.reversed());
                    // Someone here wants the new heading: open the doors before
                    // the next advance can carry the car off the floor.
                    if self.should_stop_at_floor(waiting) {
                        self.set_status(CarStatus::Loading);
                    }
                } else {
                    self.hold();
                }
            }
            Direction::Idle => match self.nearest_demand(waiting) {
                Some(floor) => self.head(self.floor.direction_to(floor)),
                None        => self.hold(),
            },
        }
    }

    fn has_demand_toward(&self, heading: Direction, waiting: &WaitingQueues) -> bool {
        let beyond = |f: Floor| self.floor.direction_to(f) == heading;
        self.target_floors.iter().any(|&f| beyond(f))
            || waiting.floors_with_waiting().any(beyond)
    }

    fn nearest_demand(&self, waiting: &WaitingQueues) -> Option<Floor> {
        self.target_floors
            .iter()
            .copied()
            .chain(waiting.floors_with_waiting())
            .filter(|&f| f != self.floor)
            .min_by_key(|&f| (f.distance(self.floor), f))
    }

    fn head(&mut self, direction: Direction) {
        debug_assert_ne!(direction, Direction::Idle);
        self.direction = direction;
        let doors_open =
            self.status == CarStatus::Loading && self.status_timer < self.spec.stop_time;
        if !doors_open {
            self.set_status(CarStatus::Moving);
        }
    }

    fn hold(&mut self) {
        self.direction = Direction::Idle;
        if self.status == CarStatus::Moving {
            self.set_status(CarStatus::Loading);
        }
    }

    fn set_status(&mut self, status: CarStatus) {
        if self.status != status {
            self.status = status;
            self.status_timer = 0;
        }
    }

    /// Open the doors: status becomes `Loading` with a fresh timer, even if
    /// the car was already loading.
    pub fn begin_loading(&mut self) {
        self.status = CarStatus::Loading;
        self.status_timer = 0;
    }

    // ── Passenger exchange ────────────────────────────────────────────────

    /// Board passengers from the front of `queue` until the car is full.
    ///
    /// Boarding ignores direction: the car may have stopped for someone
    /// going its way and still take the passenger at the front of the queue
    /// who is going the other way.  A stop clears the heading, so the car
    /// then follows its new riders.
    ///
    /// `queue` is the waiting list taken from the current floor; `waiting`
    /// is the rest of the building, used to re-evaluate direction once the
    /// riders are aboard.  Returns the unboarded remainder in its original
    /// order.
    pub fn load(
        &mut self,
        mut queue: Vec<Passenger>,
        waiting:   &WaitingQueues,
        now:       Tick,
    ) -> Vec<Passenger> {
        let boarding = self.spare_capacity().min(queue.len());
        for mut passenger in queue.drain(..boarding) {
            assert_eq!(passenger.from, self.floor, "passenger {} boarded at the wrong floor", passenger.id);
            passenger.board(now);
            self.target_floors.insert(passenger.to);
            self.passengers.push(passenger);
        }
        assert!(self.passengers.len() <= self.spec.capacity, "car {} over capacity", self.id);

        self.update_direction(waiting);
        queue
    }

    /// Let off everyone whose destination is the current floor.
    pub fn unload(&mut self, now: Tick) -> Vec<Passenger> {
        let floor = self.floor;
        let (mut leaving, staying): (Vec<_>, Vec<_>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.to == floor);
        self.passengers = staying;

        if !self.passengers.iter().any(|p| p.to == floor) {
            self.target_floors.remove(&floor);
        }
        for passenger in &mut leaving {
            passenger.alight(now);
        }
        leaving
    }

    /// Check the capacity, range, and target-floor invariants.
    ///
    /// # Panics
    /// Panics describing the first violated invariant.
    pub fn assert_consistent(&self) {
        assert!(self.passengers.len() <= self.spec.capacity, "car {} over capacity", self.id);
        assert!(self.spec.serves(self.floor), "car {} outside the shaft at {}", self.id, self.floor);
        let destinations: BTreeSet<Floor> = self.passengers.iter().map(|p| p.to).collect();
        assert_eq!(
            destinations, self.target_floors,
            "car {} target floors out of sync with riders",
            self.id
        );
        if self.status == CarStatus::Moving {
            assert_ne!(self.direction, Direction::Idle, "car {} moving without direction", self.id);
        }
    }
}
