/*
 * Simulation Module
 *
 * Owns the flock, the current parameters and the RNG used to seed it. This
 * is the single writer of the population: hosts call `step` once per frame
 * and read the flock through shared borrows in between.
 */

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::flock::{BoidView, Flock};
use crate::params::{FlockParams, Kinematics, UpdateMode};
use crate::physics;

pub struct Simulation {
    flock: Flock,
    params: FlockParams,
    kinematics: Kinematics,
    mode: UpdateMode,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    frame: u64,
    last_step_time: Duration,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = seed_rng(config.seed);
        let flock = Flock::spawn(&mut rng, config.field, config.population, config.history_len);

        info!(
            boids = flock.len(),
            width = config.field.width,
            height = config.field.height,
            seed = ?config.seed,
            mode = config.mode.label(),
            "Spawned flock"
        );

        Ok(Self {
            flock,
            params: config.params,
            kinematics: config.kinematics,
            mode: config.mode,
            config,
            rng,
            frame: 0,
            last_step_time: Duration::ZERO,
        })
    }

    // Wrap an existing flock, e.g. a hand-built scenario. `reset` still
    // respawns `config.population` random boids.
    pub fn from_flock(flock: Flock, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = seed_rng(config.seed);
        Ok(Self {
            flock,
            params: config.params,
            kinematics: config.kinematics,
            mode: config.mode,
            config,
            rng,
            frame: 0,
            last_step_time: Duration::ZERO,
        })
    }

    // Advance one frame with the current parameters
    pub fn step(&mut self) {
        let started = Instant::now();
        physics::step(&mut self.flock, &self.params, &self.kinematics, self.mode);
        self.frame += 1;
        self.last_step_time = started.elapsed();

        debug!(frame = self.frame, step_us = self.last_step_time.as_micros() as u64, "Stepped flock");
    }

    // Accept new tunables for the next frame; agent state is untouched
    pub fn set_params(&mut self, params: FlockParams) {
        let (clean, changed) = params.sanitized();
        if changed {
            warn!(?params, ?clean, "Flock parameters out of range, clamped");
        }
        self.params = clean;
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        if mode != self.mode {
            info!(mode = mode.label(), "Switched update mode");
        }
        self.mode = mode;
    }

    // Respawn the flock, continuing the same RNG stream
    pub fn reset(&mut self) {
        self.flock = Flock::spawn(
            &mut self.rng,
            self.config.field,
            self.config.population,
            self.config.history_len,
        );
        self.frame = 0;
        info!(boids = self.flock.len(), "Reset flock");
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn snapshot(&self) -> impl ExactSizeIterator<Item = BoidView<'_>> {
        self.flock.snapshot()
    }

    pub fn params(&self) -> FlockParams {
        self.params
    }

    pub fn kinematics(&self) -> Kinematics {
        self.kinematics
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn last_step_time(&self) -> Duration {
        self.last_step_time
    }
}

fn seed_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
