//! Integration tests for the effect's observable behavior.
//!
//! These drive `Effect` headlessly, the way the window driver does from its
//! redraw callback, and check the properties a viewer would notice: pool
//! size, mode precedence, convergence under attraction, and replayability.

use driftglow::{Effect, EffectConfig, InteractionState, Vec2};

const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

fn seeded_effect(seed: u64) -> Effect {
    let mut effect = Effect::with_seed(EffectConfig::default(), BOUNDS, seed);
    effect.seed_particles();
    effect
}

// ============================================================================
// Pool seeding
// ============================================================================

#[test]
fn test_pool_seeds_exact_count() {
    let effect = seeded_effect(1);
    assert_eq!(effect.particles().len(), 150);
}

#[test]
fn test_reseed_discards_previous_pool() {
    let mut effect = seeded_effect(2);
    let before: Vec<Vec2> = effect.particles().iter().map(|p| p.position).collect();

    effect.seed_particles();
    assert_eq!(effect.particles().len(), 150);

    let after: Vec<Vec2> = effect.particles().iter().map(|p| p.position).collect();
    assert_ne!(before, after);
}

#[test]
fn test_seeded_particles_start_inside_bounds_at_base_speed() {
    let effect = seeded_effect(3);
    let cfg = effect.config();
    for p in effect.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < BOUNDS.x);
        assert!(p.position.y >= 0.0 && p.position.y < BOUNDS.y);
        assert!((p.velocity.length() - cfg.base_speed).abs() < 1e-4);
    }
}

// ============================================================================
// Mode precedence
// ============================================================================

#[test]
fn test_dispersal_assigns_targets() {
    let mut effect = seeded_effect(4);
    let mut state = InteractionState::new();
    state.begin_disperse();

    effect.step(&state);
    assert!(effect.particles().iter().all(|p| p.target().is_some()));
}

#[test]
fn test_pointer_preempts_dispersal() {
    let mut effect = seeded_effect(5);
    let mut state = InteractionState::new();
    state.set_enabled(true);
    state.begin_disperse();
    effect.step(&state);
    assert!(effect.particles().iter().all(|p| p.target().is_some()));

    // Activating the pointer cancels the dispersal and the next tick clears
    // every particle's leftover target.
    state.pointer_moved(Vec2::new(400.0, 300.0));
    assert!(!state.dispersing());
    effect.step(&state);
    assert!(effect.particles().iter().all(|p| p.target().is_none()));
}

#[test]
fn test_toggle_off_stops_attraction_immediately() {
    let mut state = InteractionState::new();
    state.set_enabled(true);
    state.pointer_moved(Vec2::new(100.0, 100.0));
    assert!(state.pointer_active());

    state.set_enabled(false);
    assert!(!state.pointer_active());
}

// ============================================================================
// Motion
// ============================================================================

#[test]
fn test_attraction_gathers_particles_around_pointer() {
    let mut effect = seeded_effect(6);
    let mut state = InteractionState::new();
    state.set_enabled(true);
    let pointer = Vec2::new(400.0, 300.0);
    state.pointer_moved(pointer);

    let mean_distance = |effect: &Effect| {
        effect
            .particles()
            .iter()
            .map(|p| (p.position - pointer).length())
            .sum::<f32>()
            / effect.particles().len() as f32
    };

    let before = mean_distance(&effect);
    for _ in 0..600 {
        effect.step(&state);
    }
    let after = mean_distance(&effect);

    assert!(
        after < before * 0.5,
        "expected particles to gather: {} -> {}",
        before,
        after
    );
}

#[test]
fn test_zero_speed_multiplier_freezes_positions() {
    let mut effect = seeded_effect(7);
    let mut state = InteractionState::new();
    state.set_speed_multiplier(0.0);

    let positions: Vec<Vec2> = effect.particles().iter().map(|p| p.position).collect();
    let velocities: Vec<Vec2> = effect.particles().iter().map(|p| p.velocity).collect();

    for _ in 0..5 {
        effect.step(&state);
    }

    let after: Vec<Vec2> = effect.particles().iter().map(|p| p.position).collect();
    assert_eq!(positions, after);

    // Velocity keeps evolving through jitter and damping even though the
    // integration term is zero.
    let velocities_after: Vec<Vec2> = effect.particles().iter().map(|p| p.velocity).collect();
    assert_ne!(velocities, velocities_after);
}

#[test]
fn test_minimized_window_bounds_keep_effect_alive() {
    // A minimized window delivers a 0x0 resize; reseeding and dispersing
    // afterwards must still work.
    let mut effect = seeded_effect(9);
    effect.set_bounds(Vec2::ZERO);

    effect.seed_particles();
    assert_eq!(effect.particles().len(), 150);

    let mut state = InteractionState::new();
    state.begin_disperse();
    for _ in 0..10 {
        effect.step(&state);
    }
    assert!(effect.particles().iter().all(|p| p.position.is_finite()));

    // Restoring the window puts the simulation back on normal bounds.
    effect.set_bounds(BOUNDS);
    assert_eq!(effect.bounds(), BOUNDS);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_replays_identically() {
    let mut a = seeded_effect(8);
    let mut b = seeded_effect(8);

    let mut state = InteractionState::new();
    state.set_enabled(true);
    for tick in 0..50 {
        if tick == 20 {
            state.pointer_moved(Vec2::new(200.0, 200.0));
        }
        if tick == 40 {
            state.pointer_left();
            state.begin_disperse();
        }
        a.step(&state);
        b.step(&state);
    }

    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.velocity, pb.velocity);
        assert_eq!(pa.target(), pb.target());
    }
}
