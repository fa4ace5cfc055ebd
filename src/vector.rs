/*
 * Vector Math Module
 *
 * Small 2D helpers shared by the steering rules, the speed limiter and the
 * renderer. Everything here is a total function over finite inputs; the
 * normalizing helpers guard the zero-length case explicitly.
 */

use glam::Vec2;

// Euclidean distance between two positions
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

// Euclidean norm of a velocity
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

// Unit vector in the direction of `v`, or zero when `v` has no length
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let length = magnitude(v);
    if length > 0.0 {
        v / length
    } else {
        Vec2::ZERO
    }
}

// Rescale `v` to `max` if it is longer, keeping its direction
#[inline]
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let length = magnitude(v);
    if length > max && length > 0.0 {
        v * (max / length)
    } else {
        v
    }
}

// Angle of travel in radians, as drawn by the presentation layer
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}
