//! Configuration errors.
//!
//! These are the only recoverable errors in the simulator.  Everything that
//! can go wrong once a building is running is a broken invariant and panics.

use thiserror::Error;

use crate::Floor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("floor range {min}..={max} must span at least two floors")]
    FloorRange { min: Floor, max: Floor },

    #[error("elevator capacity must be at least 1")]
    ZeroCapacity,

    #[error("building needs at least one elevator")]
    NoElevators,
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
