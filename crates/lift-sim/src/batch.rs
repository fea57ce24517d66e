//! Independent runs over many seeds.

use lift_core::{BuildingConfig, Tick};

use crate::{Dispatcher, NoopObserver, SimResult, Stats, UniformArrivals, WaitSummary};

/// Result of one seeded run in a batch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchOutcome {
    pub seed:      u64,
    pub completed: bool,
    /// Tick the run stopped at (completion tick if `completed`).
    pub ticks:     Tick,
    pub stats:     Stats,
    pub waits:     WaitSummary,
}

/// Run `config` once per seed, each for at most `max_ticks` ticks.
///
/// Outcomes are returned in `seeds` order.  With the `parallel` feature the
/// runs execute on Rayon's pool; results are identical either way.
pub fn run_batch(config: &BuildingConfig, seeds: &[u64], max_ticks: u64) -> SimResult<Vec<BatchOutcome>> {
    config.validate()?;

    #[cfg(not(feature = "parallel"))]
    {
        Ok(seeds.iter().map(|&seed| run_seed(config, seed, max_ticks)).collect())
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(seeds.par_iter().map(|&seed| run_seed(config, seed, max_ticks)).collect())
    }
}

fn run_seed(config: &BuildingConfig, seed: u64, max_ticks: u64) -> BatchOutcome {
    let config = BuildingConfig { seed, ..config.clone() };
    let start = vec![config.floor_min; config.elevator_count];
    let mut building = Dispatcher::assemble(config, UniformArrivals::new(seed), start);
    let outcome = building.run(max_ticks, &mut NoopObserver);
    BatchOutcome {
        seed,
        completed: outcome.completed,
        ticks:     outcome.time,
        stats:     outcome.stats,
        waits:     building.wait_summary(),
    }
}
