/*
 * Boid Flocking Simulation
 *
 * This application simulates the flocking behavior of birds (boids) based on three main rules:
 * 1. Cohesion: Steer towards the average position of neighbors
 * 2. Separation: Steer away from neighbors in visual range
 * 3. Alignment: Steer towards the average velocity of neighbors
 *
 * A soft boundary rule keeps the flock on screen and a speed limit caps velocity.
 * With the `gui` feature the simulation opens a window with live sliders;
 * `--headless` runs a fixed number of frames and logs flock statistics.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use flocking::{DebugInfo, Simulation, SimulationConfig, UpdateMode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; defaults are used when it does not exist
    #[arg(short, long, default_value = "flocking.toml")]
    config: PathBuf,

    /// Number of boids
    #[arg(short = 'n', long)]
    boids: Option<usize>,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// How each step reads the population while updating it
    #[arg(short, long, value_enum)]
    mode: Option<UpdateMode>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Log flock statistics every N frames in headless mode
    #[arg(long, default_value_t = 60)]
    log_every: u64,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = SimulationConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(boids) = args.boids {
        config.population = boids;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    config.validate().context("validating configuration")?;

    if args.headless || !cfg!(feature = "gui") {
        return run_headless(config, args.frames, args.log_every);
    }

    #[cfg(feature = "gui")]
    flocking::app::run(config);

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn run_headless(config: SimulationConfig, frames: u64, log_every: u64) -> Result<()> {
    let mut simulation = Simulation::new(config).context("starting simulation")?;
    let mut debug_info = DebugInfo::default();

    info!(frames, "Running headless");
    for _ in 0..frames {
        simulation.step();
        if log_every > 0 && simulation.frame() % log_every == 0 {
            debug_info.observe(simulation.flock(), simulation.frame(), simulation.last_step_time());
            info!(
                frame = debug_info.frame,
                mean_speed = debug_info.mean_speed,
                max_speed = debug_info.max_speed,
                centroid_x = debug_info.centroid.x,
                centroid_y = debug_info.centroid.y,
                polarization = debug_info.polarization,
                step_us = debug_info.step_time.as_micros() as u64,
                "Flock state"
            );
        }
    }
    info!(frames = simulation.frame(), "Headless run finished");
    Ok(())
}
