/*
 * Simulation Parameters Module
 *
 * This module defines the tunable coefficients of the flocking rules. The
 * four `FlockParams` values are meant to be adjusted every frame from the UI;
 * `Kinematics` holds the boundary and speed constants that stay fixed for a
 * run. Slider ranges live here so the UI and validation agree on them.
 */

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Coefficients read by the steering rules, refreshed every frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    pub coherence_factor: f32,
    pub separation_factor: f32,
    pub alignment_factor: f32,
    pub visual_range: f32,
    // Whether a boid counts itself when averaging positions and velocities
    pub include_self: bool,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            coherence_factor: 0.005,
            separation_factor: 0.05,
            alignment_factor: 0.05,
            visual_range: 75.0,
            include_self: true,
        }
    }
}

impl FlockParams {
    pub fn factor_range() -> RangeInclusive<f32> {
        0.0..=0.1
    }

    pub fn visual_range_range() -> RangeInclusive<f32> {
        20.0..=150.0
    }

    // Factors must sit in the slider range; visual range only has to be non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("coherence_factor", self.coherence_factor),
            ("separation_factor", self.separation_factor),
            ("alignment_factor", self.alignment_factor),
        ];
        for (name, value) in factors {
            check_in_range(name, value, &Self::factor_range())?;
        }
        if !self.visual_range.is_finite() || self.visual_range < 0.0 {
            return Err(ConfigError::invalid("visual_range", self.visual_range, "must be finite and >= 0"));
        }
        Ok(())
    }

    // Clamp into the slider ranges and replace non-finite values with defaults.
    // Returns the cleaned copy and whether anything had to change.
    pub fn sanitized(&self) -> (Self, bool) {
        let defaults = Self::default();
        let clean = Self {
            coherence_factor: clamp_or(self.coherence_factor, Self::factor_range(), defaults.coherence_factor),
            separation_factor: clamp_or(self.separation_factor, Self::factor_range(), defaults.separation_factor),
            alignment_factor: clamp_or(self.alignment_factor, Self::factor_range(), defaults.alignment_factor),
            visual_range: clamp_or(self.visual_range, 0.0..=f32::MAX, defaults.visual_range),
            include_self: self.include_self,
        };
        let changed = clean != *self;
        (clean, changed)
    }
}

// Constants for the bounds rule and the speed limiter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kinematics {
    pub margin: f32,
    pub turn_factor: f32,
    pub speed_limit: f32,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            margin: 200.0,
            turn_factor: 1.0,
            speed_limit: 15.0,
        }
    }
}

impl Kinematics {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::invalid("margin", self.margin, "must be finite and >= 0"));
        }
        if !self.turn_factor.is_finite() || self.turn_factor < 0.0 {
            return Err(ConfigError::invalid("turn_factor", self.turn_factor, "must be finite and >= 0"));
        }
        if !self.speed_limit.is_finite() || self.speed_limit <= 0.0 {
            return Err(ConfigError::invalid("speed_limit", self.speed_limit, "must be finite and > 0"));
        }
        Ok(())
    }
}

// How a step reads the population while it is being updated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateMode {
    // Boids later in the pass see the already-moved earlier ones
    #[default]
    SameFrame,
    // Every boid reads the population as it was at the start of the step
    DoubleBuffered,
}

impl UpdateMode {
    pub fn label(self) -> &'static str {
        match self {
            UpdateMode::SameFrame => "Same frame",
            UpdateMode::DoubleBuffered => "Double buffered",
        }
    }
}

fn check_in_range(name: &'static str, value: f32, range: &RangeInclusive<f32>) -> Result<(), ConfigError> {
    if value.is_finite() && range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            name,
            value,
            format!("must lie in [{}, {}]", range.start(), range.end()),
        ))
    }
}

fn clamp_or(value: f32, range: RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
