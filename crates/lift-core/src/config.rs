//! Building configuration.
//!
//! `BuildingConfig` is the whole configuration surface of a run.  The
//! [`Default`] impl is the reference building: floors 1–10, two cars of five
//! seats, forty passengers, one-tick moves and door cycles.

use std::ops::RangeInclusive;

use crate::{ConfigError, ConfigResult, Floor};

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from JSON by the application crate and
/// passed to `lift_sim::DispatcherBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Lowest served floor (inclusive).
    pub floor_min: Floor,

    /// Highest served floor (inclusive).
    pub floor_max: Floor,

    /// Number of cars.  They get ids `#1..=#n` and are processed in that
    /// order every tick.
    pub elevator_count: usize,

    /// Maximum boarded passengers per car.
    pub elevator_capacity: usize,

    /// Arrival cap.  No passengers are generated once this many exist.
    pub max_passengers: u32,

    /// Ticks a moving car spends between floors.
    pub move_time: u32,

    /// Ticks the doors stay open at a stop.
    pub stop_time: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floor_min:         Floor(1),
            floor_max:         Floor(10),
            elevator_count:    2,
            elevator_capacity: 5,
            max_passengers:    40,
            move_time:         1,
            stop_time:         1,
            seed:              42,
        }
    }
}

impl BuildingConfig {
    /// Reject configurations the state machine cannot run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.floor_min >= self.floor_max {
            return Err(ConfigError::FloorRange { min: self.floor_min, max: self.floor_max });
        }
        if self.elevator_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.elevator_count == 0 {
            return Err(ConfigError::NoElevators);
        }
        Ok(())
    }

    /// All served floors, lowest first.
    #[inline]
    pub fn floors(&self) -> RangeInclusive<Floor> {
        self.floor_min..=self.floor_max
    }

    /// Number of served floors.
    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floor_max.distance(self.floor_min) as usize + 1
    }

    /// The per-car parameters each elevator carries.
    pub fn car_spec(&self) -> CarSpec {
        CarSpec {
            floor_min: self.floor_min,
            floor_max: self.floor_max,
            capacity:  self.elevator_capacity,
            move_time: self.move_time,
            stop_time: self.stop_time,
        }
    }
}

/// The subset of [`BuildingConfig`] an individual car needs.
///
/// Cheap to copy; every `Elevator` holds its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSpec {
    pub floor_min: Floor,
    pub floor_max: Floor,
    pub capacity:  usize,
    pub move_time: u32,
    pub stop_time: u32,
}

impl CarSpec {
    /// `true` if `floor` lies within the served range.
    #[inline]
    pub fn serves(&self, floor: Floor) -> bool {
        (self.floor_min..=self.floor_max).contains(&floor)
    }

    /// `true` if `floor` is the last one reachable travelling `direction`.
    #[inline]
    pub fn is_terminal(&self, floor: Floor, direction: crate::Direction) -> bool {
        match direction {
            crate::Direction::Up   => floor == self.floor_max,
            crate::Direction::Down => floor == self.floor_min,
            crate::Direction::Idle => false,
        }
    }
}
