/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The core (vector math, boids, flock, rules, physics, simulation) has no
 * graphics dependency; the window, sliders and renderer are compiled only
 * with the `gui` feature.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use config::SimulationConfig;
pub use debug::DebugInfo;
pub use error::ConfigError;
pub use flock::{BoidView, Field, Flock};
pub use params::{FlockParams, Kinematics, UpdateMode};
pub use simulation::Simulation;

// Define modules
pub mod boid;
pub mod config;
pub mod debug;
pub mod error;
pub mod flock;
pub mod params;
pub mod physics;
pub mod rules;
pub mod simulation;
pub mod vector;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod renderer;
#[cfg(feature = "gui")]
pub mod ui;

// Constants
pub const HISTORY_LEN: usize = 50;
pub const INITIAL_SPEED_RANGE: f32 = 5.0;
pub const BOID_SIZE: f32 = 15.0;
