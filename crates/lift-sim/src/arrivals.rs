//! Where new passengers come from.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use lift_core::{Floor, SimRng, Tick};

/// Pluggable passenger arrival process.
///
/// The dispatcher calls [`next_arrival`][Self::next_arrival] at most once per
/// tick, and only while fewer than `max_passengers` have been generated.
/// Returning `None` means nobody shows up this tick.
///
/// Implementations must return floors inside `floors` with `from != to`;
/// the dispatcher asserts both.
pub trait ArrivalModel: Send + 'static {
    fn next_arrival(&mut self, now: Tick, floors: RangeInclusive<Floor>) -> Option<(Floor, Floor)>;
}

// ── UniformArrivals ───────────────────────────────────────────────────────────

/// One passenger per tick with uniformly random origin and destination.
///
/// The destination is redrawn until it differs from the origin, so every
/// ordered pair of distinct floors is equally likely.
pub struct UniformArrivals {
    rng: SimRng,
}

impl UniformArrivals {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }
}

impl ArrivalModel for UniformArrivals {
    fn next_arrival(&mut self, _now: Tick, floors: RangeInclusive<Floor>) -> Option<(Floor, Floor)> {
        let (min, max) = floors.into_inner();
        if min >= max {
            return None;
        }
        let from = Floor(self.rng.gen_range(min.0..=max.0));
        let mut to = from;
        while to == from {
            to = Floor(self.rng.gen_range(min.0..=max.0));
        }
        Some((from, to))
    }
}

// ── ScriptedArrivals ──────────────────────────────────────────────────────────

/// A fixed list of `(tick, from, to)` requests.
///
/// Each request is released on the first tick at or after its scheduled
/// tick; since only one passenger arrives per tick, requests sharing a tick
/// spill over to the following ticks in list order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedArrivals {
    pending: VecDeque<(Tick, Floor, Floor)>,
}

impl ScriptedArrivals {
    pub fn new(requests: impl IntoIterator<Item = (Tick, Floor, Floor)>) -> Self {
        let mut pending: Vec<_> = requests.into_iter().collect();
        pending.sort_by_key(|&(tick, _, _)| tick);
        Self { pending: pending.into() }
    }

    /// Requests not yet released.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl ArrivalModel for ScriptedArrivals {
    fn next_arrival(&mut self, now: Tick, _floors: RangeInclusive<Floor>) -> Option<(Floor, Floor)> {
        match self.pending.front() {
            Some(&(tick, from, to)) if tick <= now => {
                self.pending.pop_front();
                Some((from, to))
            }
            _ => None,
        }
    }
}
