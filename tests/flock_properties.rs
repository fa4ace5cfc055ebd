use flocking::physics::{self, limit_speed};
use flocking::rules;
use flocking::{Boid, Field, Flock, FlockParams, Kinematics, Simulation, SimulationConfig, UpdateMode};
use glam::Vec2;
use proptest::prelude::*;

fn config(seed: u64, population: usize, mode: UpdateMode) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        population,
        mode,
        ..SimulationConfig::default()
    }
}

prop_compose! {
    fn arb_params()(
        coherence_factor in 0.0f32..=0.1,
        separation_factor in 0.0f32..=0.1,
        alignment_factor in 0.0f32..=0.1,
        visual_range in 20.0f32..=150.0,
        include_self in any::<bool>()
    ) -> FlockParams {
        FlockParams { coherence_factor, separation_factor, alignment_factor, visual_range, include_self }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_speed_never_exceeds_limit(seed in any::<u64>(), params in arb_params(), steps in 1usize..40) {
        let mut sim = Simulation::new(config(seed, 40, UpdateMode::SameFrame)).unwrap();
        sim.set_params(params);
        let limit = sim.kinematics().speed_limit;
        for _ in 0..steps {
            sim.step();
            for boid in sim.flock().boids() {
                prop_assert!(boid.speed() <= limit + 1e-3, "speed {} above limit", boid.speed());
                prop_assert!(boid.position.is_finite());
            }
        }
    }

    #[test]
    fn test_double_buffered_speed_bound(seed in any::<u64>(), params in arb_params()) {
        let mut sim = Simulation::new(config(seed, 40, UpdateMode::DoubleBuffered)).unwrap();
        sim.set_params(params);
        for _ in 0..20 {
            sim.step();
        }
        for boid in sim.flock().boids() {
            prop_assert!(boid.speed() <= sim.kinematics().speed_limit + 1e-3);
        }
    }

    #[test]
    fn test_limit_speed_any_velocity(dx in -1000.0f32..1000.0, dy in -1000.0f32..1000.0) {
        let mut boid = Boid::new(Vec2::ZERO, Vec2::new(dx, dy));
        let before = boid.velocity;
        limit_speed(&mut boid, 15.0);
        prop_assert!(boid.speed() <= 15.0 + 1e-3);
        if before.length() <= 15.0 {
            prop_assert_eq!(boid.velocity, before);
        }
    }
}

#[test]
fn history_is_bounded_suffix_of_trace() {
    let mut sim = Simulation::new(config(11, 25, UpdateMode::SameFrame)).unwrap();
    let mut traces: Vec<Vec<Vec2>> = vec![Vec::new(); sim.flock().len()];

    for _ in 0..120 {
        sim.step();
        for (trace, boid) in traces.iter_mut().zip(sim.flock().boids()) {
            trace.push(boid.position);
            assert!(boid.history_len() <= 50);
        }
    }

    for (trace, boid) in traces.iter().zip(sim.flock().boids()) {
        let history: Vec<Vec2> = boid.history().collect();
        assert_eq!(history.len(), 50);
        assert_eq!(&history[..], &trace[trace.len() - 50..]);
        assert_eq!(history.last().copied(), Some(boid.position));
    }
}

#[test]
fn seeded_runs_are_bit_identical() {
    for mode in [UpdateMode::SameFrame, UpdateMode::DoubleBuffered] {
        let mut a = Simulation::new(config(2024, 100, mode)).unwrap();
        let mut b = Simulation::new(config(2024, 100, mode)).unwrap();
        for _ in 0..200 {
            a.step();
            b.step();
        }
        assert_eq!(a.flock().boids(), b.flock().boids(), "mode {mode:?} diverged");
    }
}

#[test]
fn zero_visual_range_leaves_only_bounds_and_limit() {
    let boids = vec![
        Boid::new(Vec2::new(700.0, 400.0), Vec2::new(1.0, 1.0)),
        Boid::new(Vec2::new(700.0, 400.0), Vec2::new(-2.0, 0.5)),
        Boid::new(Vec2::new(705.0, 400.0), Vec2::new(0.0, -3.0)),
    ];
    let mut flock = Flock::from_boids(Field::default(), boids.clone());
    let params = FlockParams { visual_range: 0.0, ..FlockParams::default() };

    physics::step(&mut flock, &params, &Kinematics::default(), UpdateMode::SameFrame);

    // Middle of the field: no rule fires, so boids just drift
    for (before, after) in boids.iter().zip(flock.boids()) {
        assert_eq!(after.velocity, before.velocity);
        assert_eq!(after.position, before.position + before.velocity);
    }
}

#[test]
fn separation_scales_with_neighbor_count() {
    let params = FlockParams::default();
    let center = Boid::new(Vec2::new(500.0, 400.0), Vec2::ZERO);
    let neighbor = |dx: f32| Boid::new(Vec2::new(500.0 + dx, 400.0), Vec2::ZERO);

    let sparse = vec![center.clone(), neighbor(10.0), neighbor(-20.0)];
    let mut dense = sparse.clone();
    dense.push(neighbor(10.0));
    dense.push(neighbor(-20.0));

    let one = rules::separation(&center, 0, &sparse, &params);
    let two = rules::separation(&center, 0, &dense, &params);
    assert!(one.length() > 0.0);
    assert!((two.length() - 2.0 * one.length()).abs() < 1e-4);
}

#[test]
fn single_boid_only_feels_bounds_every_frame() {
    let boid = Boid::new(Vec2::new(700.0, 425.0), Vec2::new(4.0, -3.0));
    let flock = Flock::from_boids(Field::default(), vec![boid]);
    let mut sim = Simulation::from_flock(flock, config(1, 1, UpdateMode::SameFrame)).unwrap();
    let kinematics = sim.kinematics();
    let field = sim.flock().field();

    for _ in 0..300 {
        let before = sim.flock().boids()[0].clone();
        sim.step();
        let after = &sim.flock().boids()[0];

        let mut expected = before.velocity + rules::keep_within_bounds(&before, &field, &kinematics);
        expected = flocking::vector::clamp_magnitude(expected, kinematics.speed_limit);
        assert!((after.velocity - expected).length() < 1e-5);
        assert_eq!(after.position, before.position + after.velocity);
    }
}

#[test]
fn coincident_boids_stay_finite_and_cohere() {
    let boids = vec![
        Boid::new(Vec2::new(600.0, 400.0), Vec2::new(2.0, 0.0)),
        Boid::new(Vec2::new(600.0, 400.0), Vec2::new(0.0, 2.0)),
    ];
    let population = boids.clone();
    let params = FlockParams::default();

    assert_eq!(rules::separation(&population[0], 0, &population, &params), Vec2::ZERO);
    assert_eq!(rules::cohesion(&population[0], 0, &population, &params), Vec2::ZERO);
    let align = rules::alignment(&population[0], 0, &population, &params);
    // mean velocity (1, 1) pulls the first boid's (2, 0) towards it
    assert!((align - Vec2::new(-0.05, 0.05)).length() < 1e-6);

    let mut flock = Flock::from_boids(Field::default(), boids);
    physics::step(&mut flock, &params, &Kinematics::default(), UpdateMode::SameFrame);
    assert!(flock.boids().iter().all(|b| b.position.is_finite() && b.velocity.is_finite()));
}

#[test]
fn bounds_rule_pushes_right_near_left_edge() {
    let boid = Boid::new(Vec2::new(50.0, 400.0), Vec2::new(0.0, 0.0));
    let nudge = rules::keep_within_bounds(&boid, &Field::new(1400.0, 850.0), &Kinematics::default());
    assert_eq!(nudge.x, 1.0);
}

#[test]
fn params_update_does_not_reset_state() {
    let mut sim = Simulation::new(config(77, 50, UpdateMode::SameFrame)).unwrap();
    for _ in 0..10 {
        sim.step();
    }
    let before = sim.flock().boids().to_vec();
    sim.set_params(FlockParams { coherence_factor: 0.1, visual_range: 150.0, ..FlockParams::default() });
    sim.set_mode(UpdateMode::DoubleBuffered);
    assert_eq!(sim.flock().boids(), &before[..]);
    assert_eq!(sim.frame(), 10);
}
