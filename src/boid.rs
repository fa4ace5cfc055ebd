/*
 * Boid Module
 *
 * This module defines the Boid struct: a position, a velocity and a short
 * trail of recent positions. The steering rules in `rules.rs` compute
 * velocity changes; this type only knows how to move itself and remember
 * where it has been.
 */

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use crate::vector;
use crate::{HISTORY_LEN, INITIAL_SPEED_RANGE};

#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    history: VecDeque<Vec2>,
    history_cap: usize,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self::with_history_capacity(position, velocity, HISTORY_LEN)
    }

    pub fn with_history_capacity(position: Vec2, velocity: Vec2, history_cap: usize) -> Self {
        Self {
            position,
            velocity,
            history: VecDeque::with_capacity(history_cap),
            history_cap,
        }
    }

    // Random position anywhere in the field, random velocity in [-5, 5) per axis
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, history_cap: usize) -> Self {
        let position = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        let velocity = Vec2::new(
            rng.gen_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE),
            rng.gen_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE),
        );
        Self::with_history_capacity(position, velocity, history_cap)
    }

    // Move by one frame's worth of velocity and record the new position
    pub fn integrate(&mut self) {
        self.position += self.velocity;
        self.record_position();
    }

    // Append the current position to the trail, dropping the oldest entries
    pub fn record_position(&mut self) {
        if self.history_cap == 0 {
            return;
        }
        while self.history.len() >= self.history_cap {
            self.history.pop_front();
        }
        self.history.push_back(self.position);
    }

    // Oldest first, most recent last
    pub fn history(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.history.iter().copied()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_capacity(&self) -> usize {
        self.history_cap
    }

    pub fn speed(&self) -> f32 {
        vector::magnitude(self.velocity)
    }

    pub fn heading(&self) -> f32 {
        vector::heading(self.velocity)
    }
}
