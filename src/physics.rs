/*
 * Physics Module
 *
 * This module advances the flock by one frame. For every boid, in index
 * order, it applies cohesion, separation, alignment and the bounds rule,
 * clamps the speed, integrates the position and records it in the trail.
 *
 * Two update modes are supported:
 * - Same frame: rules read the live population, so a boid sees neighbors
 *   earlier in the pass at their already-moved state.
 * - Double buffered: every boid reads a copy of the population frozen at the
 *   start of the step. The per-boid work is independent and runs on rayon.
 */

use rayon::prelude::*;

use crate::boid::Boid;
use crate::flock::{Field, Flock};
use crate::params::{FlockParams, Kinematics, UpdateMode};
use crate::rules;
use crate::vector;

// Clamp the velocity magnitude to the speed limit, preserving direction
pub fn limit_speed(boid: &mut Boid, speed_limit: f32) {
    let speed = boid.speed();
    if speed > speed_limit {
        boid.velocity = vector::clamp_magnitude(boid.velocity, speed_limit);
    }
}

// Advance the whole flock by one frame
pub fn step(flock: &mut Flock, params: &FlockParams, kinematics: &Kinematics, mode: UpdateMode) {
    let field = flock.field();
    match mode {
        UpdateMode::SameFrame => step_same_frame(&mut flock.boids, params, &field, kinematics),
        UpdateMode::DoubleBuffered => step_double_buffered(&mut flock.boids, params, &field, kinematics),
    }
}

fn step_same_frame(boids: &mut [Boid], params: &FlockParams, field: &Field, kinematics: &Kinematics) {
    for i in 0..boids.len() {
        // Each delta lands before the next rule reads the boid
        let delta = rules::cohesion(&boids[i], i, boids, params);
        boids[i].velocity += delta;
        let delta = rules::separation(&boids[i], i, boids, params);
        boids[i].velocity += delta;
        let delta = rules::alignment(&boids[i], i, boids, params);
        boids[i].velocity += delta;
        let delta = rules::keep_within_bounds(&boids[i], field, kinematics);
        boids[i].velocity += delta;

        let boid = &mut boids[i];
        limit_speed(boid, kinematics.speed_limit);
        boid.integrate();
    }
}

fn step_double_buffered(boids: &mut [Boid], params: &FlockParams, field: &Field, kinematics: &Kinematics) {
    let frozen: Vec<Boid> = boids.to_vec();

    boids.par_iter_mut().enumerate().for_each(|(i, boid)| {
        steer(boid, i, &frozen, params, field, kinematics);
        limit_speed(boid, kinematics.speed_limit);
        boid.integrate();
    });
}

// Apply the four rules to a working copy, reading neighbors from `population`
fn steer(agent: &mut Boid, index: usize, population: &[Boid], params: &FlockParams, field: &Field, kinematics: &Kinematics) {
    let delta = rules::cohesion(agent, index, population, params);
    agent.velocity += delta;
    let delta = rules::separation(agent, index, population, params);
    agent.velocity += delta;
    let delta = rules::alignment(agent, index, population, params);
    agent.velocity += delta;
    let delta = rules::keep_within_bounds(agent, field, kinematics);
    agent.velocity += delta;
}
