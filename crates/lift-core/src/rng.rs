//! Deterministic simulation RNG.
//!
//! Every random draw in a run goes through one `SimRng` seeded from
//! `BuildingConfig::seed`, so a seed fully determines the arrival sequence
//! and therefore the whole run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only from the single-threaded step loop.  Batch runs give each
/// simulation its own `SimRng` rather than sharing one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
