/*
 * Flock Module
 *
 * The population store: a fixed-size, ordered set of boids and the field
 * they fly in. Index order is the traversal order of every step, so it is
 * part of the observable behavior and never changes during a run.
 */

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::boid::Boid;
use crate::error::ConfigError;

// Simulated area, origin top-left with y growing downwards
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(1400.0, 850.0)
    }
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ConfigError::invalid("field.width", self.width, "must be finite and > 0"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ConfigError::invalid("field.height", self.height, "must be finite and > 0"));
        }
        Ok(())
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

// Read-only view of one boid handed to the renderer
#[derive(Clone, Copy)]
pub struct BoidView<'a> {
    pub position: Vec2,
    pub heading: f32,
    boid: &'a Boid,
}

impl<'a> BoidView<'a> {
    // Trail positions, oldest first
    pub fn trail(&self) -> impl ExactSizeIterator<Item = Vec2> + 'a {
        let boid: &'a Boid = self.boid;
        boid.history()
    }
}

#[derive(Clone, Debug)]
pub struct Flock {
    pub(crate) boids: Vec<Boid>,
    field: Field,
}

impl Flock {
    // Spawn `count` boids uniformly over the field
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, field: Field, count: usize, history_cap: usize) -> Self {
        let boids = (0..count)
            .map(|_| Boid::random(rng, field.width, field.height, history_cap))
            .collect();
        Self { boids, field }
    }

    // Build a flock from explicit boids, keeping their order
    pub fn from_boids(field: Field, boids: Vec<Boid>) -> Self {
        Self { boids, field }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn snapshot(&self) -> impl ExactSizeIterator<Item = BoidView<'_>> {
        self.boids.iter().map(|boid| BoidView {
            position: boid.position,
            heading: boid.heading(),
            boid,
        })
    }
}
