//! `lift-car`: the per-car state machine and the entities it moves.
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`passenger`]   | `Passenger`, `PassengerStatus`                        |
//! | [`waiting`]     | `WaitingQueues`: per-floor FIFO of waiting riders     |
//! | [`elevator`]    | `Elevator`, `CarStatus`                               |
//!
//! # Ownership
//!
//! A [`Passenger`] value lives in exactly one place at a time: the waiting
//! queue of its origin floor while `Waiting`, the `passengers` list of one
//! [`Elevator`] while `InElevator`, and whatever the caller does with the
//! value returned by [`Elevator::unload`] once `Done`.  Transfers are moves,
//! so a passenger can never be shared between two owners.
//!
//! Cars never hold a handle to the queues.  Every decision that depends on
//! waiting demand takes `&WaitingQueues` as a parameter, which leaves the
//! dispatcher as the single writer.

pub mod elevator;
pub mod passenger;
pub mod waiting;


pub use elevator::{CarStatus, Elevator};
pub use passenger::{Passenger, PassengerStatus};
pub use waiting::WaitingQueues;
