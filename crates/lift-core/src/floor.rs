//! Floors and travel direction.

use std::fmt;

/// A floor number.
///
/// Signed so that buildings with basements (`floor_min < 0`) need no special
/// casing.  Range checks against the configured bounds happen at the call
/// sites that move cars or create passengers.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    /// Absolute number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The adjacent floor in `direction` (`self` for [`Direction::Idle`]).
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        Floor(self.0 + direction.delta())
    }

    /// Direction of travel needed to get from `self` to `to`.
    #[inline]
    pub fn direction_to(self, to: Floor) -> Direction {
        match to.cmp(&self) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}F", self.0)
    }
}

/// Travel direction of a car, orthogonal to its operating status.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Floor delta applied per move: +1, -1 or 0.
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
            Direction::Idle => 0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        };
        f.write_str(s)
    }
}
