//! `lift-sim`: the building dispatcher for the lift simulator.
//!
//! # One tick
//!
//! ```text
//! Dispatcher::step():
//!   1. Arrival    below the passenger cap, ask the ArrivalModel for one
//!                 (from, to) pair and queue a new passenger at `from`.
//!   2. Age        every waiting passenger's wait_time += 1.
//!   3. Cars       for each car, in id order:
//!                   advance()            (log a floor change)
//!                   can_stop()?  → unload(), load() from this floor's queue
//!                   update_direction()
//!   4. Stats      generated, waiting, in elevator, done.
//!   5. Complete?  everyone generated and delivered (logged once).
//! ```
//!
//! Cars are processed strictly in order, so car `#1` claims a floor's queue
//! before car `#2`.  With a fixed seed every run is identical.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_batch`] seeds on Rayon's thread pool.       |
//! | `serde`    | `Serialize` for step results, logs, and stats.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::{create_building, NoopObserver};
//!
//! let mut building = create_building();
//! let outcome = building.run(10_000, &mut NoopObserver);
//! assert!(outcome.completed);
//! ```

pub mod arrivals;
pub mod batch;
pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod log;
pub mod observer;
pub mod stats;


pub use arrivals::{ArrivalModel, ScriptedArrivals, UniformArrivals};
pub use batch::{BatchOutcome, run_batch};
pub use builder::DispatcherBuilder;
pub use dispatcher::{Dispatcher, RunOutcome, StepResult, create_building, create_building_with};
pub use error::{SimError, SimResult};
pub use log::{LogEntry, LogEvent};
pub use observer::{NoopObserver, SimObserver};
pub use stats::{Stats, WaitSummary};

pub use lift_car::{CarStatus, Elevator, Passenger, PassengerStatus, WaitingQueues};
pub use lift_core::{BuildingConfig, Direction, ElevatorId, Floor, PassengerId, Tick};
