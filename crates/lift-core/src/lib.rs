//! `lift-core`: foundational types for the `lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ElevatorId`                           |
//! | [`floor`]       | `Floor`, `Direction`                                  |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                       |
//! | [`config`]      | `BuildingConfig`, `CarSpec`                           |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, CarSpec};
pub use error::{ConfigError, ConfigResult};
pub use floor::{Direction, Floor};
pub use ids::{ElevatorId, PassengerId};
pub use rng::SimRng;
pub use time::Tick;
