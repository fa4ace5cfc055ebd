/*
 * Steering Rules Module
 *
 * The four flocking rules, each a pure function returning the change to one
 * boid's velocity. A rule sees the boid being steered (`agent`, which may be
 * a working copy), its slot in the population (`index`), and the population
 * it should read neighbors from. Nothing here mutates state; the step in
 * `physics.rs` decides when each delta is applied.
 *
 * Neighbor search is a plain scan over the whole population.
 */

use glam::Vec2;

use crate::boid::Boid;
use crate::flock::Field;
use crate::params::{FlockParams, Kinematics};
use crate::vector;

// Neighbors of `agent` within visual range. `skip_self` removes the agent's
// own slot; otherwise its slot qualifies whenever its stored position is in
// range (always, at distance 0, for a positive range).
fn neighbors<'a>(
    agent: &'a Boid,
    index: usize,
    population: &'a [Boid],
    visual_range: f32,
    skip_self: bool,
) -> impl Iterator<Item = &'a Boid> + 'a {
    population
        .iter()
        .enumerate()
        .filter(move |&(i, _)| !(skip_self && i == index))
        .filter(move |&(_, other)| vector::distance(agent.position, other.position) < visual_range)
        .map(|(_, other)| other)
}

// Steer towards the average position of neighbors
pub fn cohesion(agent: &Boid, index: usize, population: &[Boid], params: &FlockParams) -> Vec2 {
    let mut center = Vec2::ZERO;
    let mut count = 0u32;

    for other in neighbors(agent, index, population, params.visual_range, !params.include_self) {
        center += other.position;
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    center /= count as f32;
    (center - agent.position) * params.coherence_factor
}

// Steer away from every other boid in range. The sum is deliberately not
// divided by the neighbor count, so crowded boids push apart harder.
pub fn separation(agent: &Boid, index: usize, population: &[Boid], params: &FlockParams) -> Vec2 {
    let mut push = Vec2::ZERO;

    for other in neighbors(agent, index, population, params.visual_range, true) {
        push += agent.position - other.position;
    }

    push * params.separation_factor
}

// Steer towards the average velocity of neighbors
pub fn alignment(agent: &Boid, index: usize, population: &[Boid], params: &FlockParams) -> Vec2 {
    let mut average = Vec2::ZERO;
    let mut count = 0u32;

    for other in neighbors(agent, index, population, params.visual_range, !params.include_self) {
        average += other.velocity;
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    average /= count as f32;
    (average - agent.velocity) * params.alignment_factor
}

// Soft nudge back towards the field when inside the margin. Each axis is
// independent, so near a corner both components fire.
pub fn keep_within_bounds(agent: &Boid, field: &Field, kinematics: &Kinematics) -> Vec2 {
    let mut nudge = Vec2::ZERO;
    let Kinematics { margin, turn_factor, .. } = *kinematics;

    if agent.position.x < margin {
        nudge.x += turn_factor;
    }
    if agent.position.x > field.width - margin {
        nudge.x -= turn_factor;
    }
    if agent.position.y < margin {
        nudge.y += turn_factor;
    }
    if agent.position.y > field.height - margin {
        nudge.y -= turn_factor;
    }

    nudge
}
