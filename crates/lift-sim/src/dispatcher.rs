//! The `Dispatcher` and its step loop.

use lift_car::{Elevator, Passenger, WaitingQueues};
use lift_core::{BuildingConfig, ElevatorId, Floor, PassengerId, Tick};
use tracing::{debug, info, trace};

use crate::{
    ArrivalModel, DispatcherBuilder, LogEntry, LogEvent, SimObserver, SimResult, Stats,
    UniformArrivals, WaitSummary,
};

// ── Entry points ──────────────────────────────────────────────────────────────

/// A fresh reference building: floors 1–10, two cars parked at floor 1,
/// uniform random arrivals seeded from [`BuildingConfig::default`].
pub fn create_building() -> Dispatcher {
    let config = BuildingConfig::default();
    let arrivals = UniformArrivals::new(config.seed);
    let start = vec![config.floor_min; config.elevator_count];
    Dispatcher::assemble(config, arrivals, start)
}

/// A fresh building for `config`, validated first.
pub fn create_building_with(config: BuildingConfig) -> SimResult<Dispatcher> {
    DispatcherBuilder::new(config).build()
}

// ── StepResult ────────────────────────────────────────────────────────────────

/// Read-only view of the building after a step.
///
/// Borrows the dispatcher, so it must be dropped before the next `step()`.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StepResult<'a> {
    /// Every log entry since the start of the run.
    pub logs:        &'a [LogEntry],
    pub elevators:   &'a [Elevator],
    pub waiting:     &'a WaitingQueues,
    pub stats:       Stats,
    pub is_complete: bool,
    pub time:        Tick,
    #[cfg_attr(feature = "serde", serde(skip))]
    new_from:        usize,
}

impl<'a> StepResult<'a> {
    /// The log entries appended by this step.
    pub fn new_logs(&self) -> &'a [LogEntry] {
        &self.logs[self.new_from..]
    }
}

/// How a [`Dispatcher::run`] call ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    pub completed: bool,
    pub time:      Tick,
    pub stats:     Stats,
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// Owns all building state and advances it one tick at a time.
///
/// The dispatcher is the only writer of the waiting queues and the car
/// collection.  `step()` runs to completion before returning, and the
/// `&mut self` receiver rules out overlapping steps.
///
/// Create via [`create_building`] or [`DispatcherBuilder`].
pub struct Dispatcher<A: ArrivalModel = UniformArrivals> {
    config:       BuildingConfig,
    arrivals:     A,
    elevators:    Vec<Elevator>,
    waiting:      WaitingQueues,
    /// Delivered passengers in delivery order, kept for stats.
    delivered:    Vec<Passenger>,
    logs:         Vec<LogEntry>,
    time:         Tick,
    generated:    u32,
    next_id:      PassengerId,
    completed_at: Option<Tick>,
}

impl<A: ArrivalModel> Dispatcher<A> {
    /// Build from an already validated config.
    pub(crate) fn assemble(config: BuildingConfig, arrivals: A, start_floors: Vec<Floor>) -> Self {
        debug_assert!(config.validate().is_ok());
        debug_assert_eq!(start_floors.len(), config.elevator_count);

        let spec = config.car_spec();
        let mut id = ElevatorId::FIRST;
        let elevators = start_floors
            .into_iter()
            .map(|floor| {
                let car = Elevator::new(id, spec, floor);
                id = id.next();
                car
            })
            .collect();

        Self {
            waiting: WaitingQueues::new(config.floors()),
            config,
            arrivals,
            elevators,
            delivered: Vec::new(),
            logs: Vec::new(),
            time: Tick::ZERO,
            generated: 0,
            next_id: PassengerId::FIRST,
            completed_at: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// The last completed tick (`Tick::ZERO` before the first step).
    pub fn time(&self) -> Tick {
        self.time
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn waiting(&self) -> &WaitingQueues {
        &self.waiting
    }

    pub fn delivered(&self) -> &[Passenger] {
        &self.delivered
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn arrivals(&self) -> &A {
        &self.arrivals
    }

    pub fn generated(&self) -> u32 {
        self.generated
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Tick on which the last passenger was delivered.
    pub fn completed_at(&self) -> Option<Tick> {
        self.completed_at
    }

    pub fn stats(&self) -> Stats {
        let in_elevator: usize = self.elevators.iter().map(|car| car.passengers().len()).sum();
        Stats {
            total:       self.config.max_passengers,
            generated:   self.generated,
            waiting:     self.waiting.len() as u32,
            in_elevator: in_elevator as u32,
            done:        self.delivered.len() as u32,
        }
    }

    pub fn wait_summary(&self) -> WaitSummary {
        WaitSummary::from_passengers(&self.delivered)
    }

    /// The current state as a [`StepResult`] with no new log entries.
    pub fn snapshot(&self) -> StepResult<'_> {
        self.result(self.logs.len())
    }

    fn result(&self, new_from: usize) -> StepResult<'_> {
        let stats = self.stats();
        StepResult {
            logs:        &self.logs,
            elevators:   &self.elevators,
            waiting:     &self.waiting,
            stats,
            is_complete: self.is_complete(),
            time:        self.time,
            new_from,
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the building by one tick.
    pub fn step(&mut self) -> StepResult<'_> {
        self.time = self.time + 1;
        let now = self.time;
        let log_start = self.logs.len();

        // ── Phase 1: arrival ──────────────────────────────────────────────
        if self.generated < self.config.max_passengers {
            if let Some((from, to)) = self.arrivals.next_arrival(now, self.config.floors()) {
                self.spawn(from, to, now);
            }
        }

        // ── Phase 2: age the queues ───────────────────────────────────────
        self.waiting.age_all();

        // ── Phase 3: cars, in id order ────────────────────────────────────
        for car in &mut self.elevators {
            if car.advance(&self.waiting) {
                self.logs.push(LogEntry::new(now, LogEvent::ElevatorArrived {
                    elevator: car.id(),
                    floor:    car.floor(),
                }));
            }

            if car.can_stop(&self.waiting) {
                let floor = car.floor();
                let queue = self.waiting.take(floor);

                let leaving = car.unload(now);
                if !leaving.is_empty() {
                    for p in &leaving {
                        self.logs.push(LogEntry::new(now, LogEvent::PassengerAlighted {
                            passenger: p.id,
                            elevator:  car.id(),
                            floor,
                            wait_time: p.wait_time(),
                        }));
                    }
                    car.begin_loading();
                    self.delivered.extend(leaving);
                }

                if !queue.is_empty() {
                    let queued = queue.len();
                    let remainder = car.load(queue, &self.waiting, now);
                    let boarded = queued - remainder.len();
                    if boarded > 0 {
                        car.begin_loading();
                        debug!(car = %car.id(), %floor, boarded, left = remainder.len(), "boarding");
                        self.logs.push(LogEntry::new(now, LogEvent::PassengersBoarded {
                            elevator: car.id(),
                            floor,
                            count:    boarded,
                        }));
                    }
                    self.waiting.put_back(floor, remainder);
                }
            }

            car.update_direction(&self.waiting);
            trace!(
                car = %car.id(),
                floor = %car.floor(),
                direction = %car.direction(),
                status = ?car.status(),
                riders = car.passengers().len(),
                "car updated"
            );
            if cfg!(debug_assertions) {
                car.assert_consistent();
            }
        }

        // ── Phase 4–5: stats and completion ───────────────────────────────
        let stats = self.stats();
        debug_assert!(stats.is_conserved(), "passenger count not conserved: {stats:?}");
        debug!(
            tick = now.0,
            generated = stats.generated,
            waiting = stats.waiting,
            in_elevator = stats.in_elevator,
            done = stats.done,
            "step"
        );

        if self.completed_at.is_none() && stats.is_complete() {
            self.completed_at = Some(now);
            self.logs.push(LogEntry::new(now, LogEvent::SimulationComplete { total_ticks: now.0 }));
            info!(ticks = now.0, passengers = stats.done, "all passengers delivered");
        }

        self.result(log_start)
    }

    /// Step until every passenger is delivered or `max_ticks` steps have run.
    ///
    /// Returns immediately (after `on_run_end`) if the run is already
    /// complete.
    pub fn run<O: SimObserver>(&mut self, max_ticks: u64, observer: &mut O) -> RunOutcome {
        for _ in 0..max_ticks {
            if self.is_complete() {
                break;
            }
            let step = self.step();
            observer.on_step(&step);
            if step.is_complete {
                observer.on_complete(step.time, &step.stats);
            }
        }
        observer.on_run_end(self.time, &self.delivered);
        RunOutcome {
            completed: self.is_complete(),
            time:      self.time,
            stats:     self.stats(),
        }
    }

    fn spawn(&mut self, from: Floor, to: Floor, now: Tick) {
        let floors = self.config.floors();
        assert!(
            floors.contains(&from) && floors.contains(&to),
            "arrival {from} -> {to} outside the building"
        );
        assert_ne!(from, to, "arrival model produced a same-floor trip at {from}");

        let id = self.next_id;
        self.next_id = id.next();
        self.generated += 1;
        self.waiting.push(Passenger::new(id, from, to, now));
        self.logs.push(LogEntry::new(now, LogEvent::PassengerArrived { passenger: id, from, to }));
    }
}
