/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct: per-frame metrics shown in the
 * UI panel and logged by the headless runner.
 *
 * Includes metrics for:
 * - FPS and frame time (filled in by the host)
 * - Step time and frame counter
 * - Mean and max speed, flock centroid
 * - Polarization (1.0 when every boid flies the same way)
 */

use std::time::Duration;

use glam::Vec2;

use crate::flock::Flock;
use crate::vector;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub step_time: Duration,
    pub frame: u64,
    pub mean_speed: f32,
    pub max_speed: f32,
    pub centroid: Vec2,
    pub polarization: f32,
}

impl DebugInfo {
    // Refresh the flock-derived metrics
    pub fn observe(&mut self, flock: &Flock, frame: u64, step_time: Duration) {
        self.frame = frame;
        self.step_time = step_time;

        if flock.is_empty() {
            self.mean_speed = 0.0;
            self.max_speed = 0.0;
            self.centroid = Vec2::ZERO;
            self.polarization = 0.0;
            return;
        }

        let n = flock.len() as f32;
        let mut speed_sum = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut position_sum = Vec2::ZERO;
        let mut heading_sum = Vec2::ZERO;

        for boid in flock.boids() {
            let speed = boid.speed();
            speed_sum += speed;
            max_speed = max_speed.max(speed);
            position_sum += boid.position;
            heading_sum += vector::normalize_or_zero(boid.velocity);
        }

        self.mean_speed = speed_sum / n;
        self.max_speed = max_speed;
        self.centroid = position_sum / n;
        self.polarization = vector::magnitude(heading_sum) / n;
    }
}
