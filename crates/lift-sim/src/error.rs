use lift_core::{ConfigError, ElevatorId, Floor};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid building configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{got} start floors given for {expected} elevators")]
    ElevatorCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("elevator {elevator} cannot start at {floor}")]
    StartFloorOutOfRange {
        elevator: ElevatorId,
        floor:    Floor,
    },
}

pub type SimResult<T> = Result<T, SimError>;
