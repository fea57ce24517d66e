//! tower: console front end for the lift simulator.
//!
//! ```text
//! tower [config.json]
//! ```
//!
//! Without an argument the reference building is used (10 floors, 2 cars,
//! 40 passengers).  `TOWER_TICK_MS` paces the run: when set above zero the
//! floor chart is redrawn every tick and the loop sleeps between ticks.
//! `RUST_LOG` controls diagnostic output (e.g. `RUST_LOG=lift_sim=debug`).

mod render;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_sim::{
    BuildingConfig, Passenger, SimObserver, Stats, StepResult, Tick, create_building_with,
    run_batch,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_TICKS:   u64   = 10_000;
const OUTPUT_DIR:  &str  = "output/tower";
const SWEEP_SEEDS: usize = 8;

// ── Observer wrapper that narrates the run ────────────────────────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
    pace:  Option<Duration>,
}

impl<W: OutputWriter> SimObserver for ConsoleObserver<W> {
    fn on_step(&mut self, step: &StepResult<'_>) {
        for entry in step.new_logs() {
            println!("{entry}");
        }
        if let Some(pace) = self.pace {
            println!("{}", render::chart(step));
            std::thread::sleep(pace);
        }
        self.inner.on_step(step);
    }

    fn on_complete(&mut self, time: Tick, stats: &Stats) {
        info!(ticks = time.0, done = stats.done, "building emptied");
        self.inner.on_complete(time, stats);
    }

    fn on_run_end(&mut self, time: Tick, delivered: &[Passenger]) {
        self.inner.on_run_end(time, delivered);
    }
}

fn load_config(path: Option<&str>) -> Result<BuildingConfig> {
    let Some(path) = path else {
        return Ok(BuildingConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn tick_pace() -> Result<Option<Duration>> {
    match std::env::var("TOWER_TICK_MS") {
        Ok(ms) => {
            let ms: u64 = ms.trim().parse().context("TOWER_TICK_MS must be a whole number")?;
            Ok((ms > 0).then(|| Duration::from_millis(ms)))
        }
        Err(_) => Ok(None),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;
    let pace = tick_pace()?;

    println!("=== tower: lift dispatch simulator ===");
    println!(
        "Floors: {}..={}  |  Cars: {} x {} seats  |  Passengers: {}  |  Seed: {}",
        config.floor_min,
        config.floor_max,
        config.elevator_count,
        config.elevator_capacity,
        config.max_passengers,
        config.seed
    );
    println!();

    // 1. Build the building.
    let mut building = create_building_with(config.clone())?;

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ConsoleObserver { inner: SimOutputObserver::new(writer), pace };

    // 3. Run.
    let t0 = Instant::now();
    let outcome = building.run(MAX_TICKS, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    if !outcome.completed {
        warn!(max_ticks = MAX_TICKS, stats = ?outcome.stats, "tick budget exhausted");
    }

    // 4. Summary.
    println!();
    println!("{}", render::chart(&building.snapshot()));
    let waits = building.wait_summary();
    println!(
        "{} in {} ticks ({:.3} s)",
        if outcome.completed { "Completed" } else { "Stopped" },
        outcome.time.0,
        elapsed.as_secs_f64()
    );
    println!(
        "  delivered {}  |  mean wait {:.2}  |  max wait {}  |  mean trip {:.2}",
        waits.delivered, waits.mean_wait, waits.max_wait, waits.mean_trip
    );
    println!("  output written to {OUTPUT_DIR}/");
    println!();

    // 5. Same building over a handful of seeds.
    let seeds: Vec<u64> = (0..SWEEP_SEEDS as u64).map(|i| config.seed + i).collect();
    let sweep = run_batch(&config, &seeds, MAX_TICKS)?;
    println!("{:<8} {:<8} {:<10} {:<10}", "Seed", "Ticks", "Mean wait", "Max wait");
    println!("{}", "-".repeat(38));
    for run in &sweep {
        println!(
            "{:<8} {:<8} {:<10.2} {:<10}",
            run.seed, run.ticks.0, run.waits.mean_wait, run.waits.max_wait
        );
    }

    Ok(())
}
