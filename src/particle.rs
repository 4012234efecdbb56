//! The per-particle motion model.
//!
//! Each tick a particle picks one steering mode (pointer attraction,
//! dispersal, or idle wander), damps its velocity, integrates its position,
//! and wraps around the bounds. All randomness comes through the caller's
//! RNG so runs can be replayed exactly from a seed.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::EffectConfig;
use crate::interaction::InteractionState;

/// One drifting glow particle.
///
/// Positions and velocities are in logical units; the radius is fixed at
/// spawn time. `target` is only set while the particle is dispersing.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Position in logical units.
    pub position: Vec2,
    /// Velocity in logical units per tick.
    pub velocity: Vec2,
    /// Draw radius, fixed at spawn.
    pub radius: f32,
    target: Option<Vec2>,
}

impl Particle {
    /// Spawn a particle: uniformly random position within `bounds`, a random
    /// heading at the configured base speed, and a random radius.
    pub fn spawn<R: Rng>(rng: &mut R, bounds: Vec2, cfg: &EffectConfig) -> Self {
        let heading = rng.gen_range(0.0..TAU);
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..bounds.x),
                rng.gen_range(0.0..bounds.y),
            ),
            velocity: Vec2::new(heading.cos(), heading.sin()) * cfg.base_speed,
            radius: rng.gen_range(cfg.radius_min..=cfg.radius_max),
            target: None,
        }
    }

    /// Current disperse target, if any.
    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Advance one tick.
    ///
    /// Mode priority: pointer attraction, then dispersal, then idle wander.
    /// Damping and integration run every tick regardless of mode, and the
    /// position wraps once it drifts `wrap_margin` past the bounds.
    pub fn update<R: Rng>(
        &mut self,
        state: &InteractionState,
        cfg: &EffectConfig,
        bounds: Vec2,
        rng: &mut R,
    ) {
        if state.pointer_active() {
            let offset = state.pointer() - self.position;
            let dist = offset.length() + cfg.distance_epsilon;
            let strength = cfg.attraction * state.speed_multiplier();
            self.velocity += offset / dist * strength;
            self.target = None;
        } else if state.dispersing() {
            let target = match self.target {
                Some(t) => t,
                None => {
                    let t = random_point(rng, bounds);
                    self.target = Some(t);
                    t
                }
            };
            let offset = target - self.position;
            let dist = offset.length() + cfg.distance_epsilon;
            let pull = cfg.disperse_pull * state.speed_multiplier();
            self.velocity += offset / dist * pull;
            if dist < cfg.arrive_distance {
                // Reached: a fresh target is picked next tick.
                self.target = None;
            }
        } else {
            self.velocity.x += (rng.gen::<f32>() - 0.5) * cfg.wander;
            self.velocity.y += (rng.gen::<f32>() - 0.5) * cfg.wander;
        }

        // Gentle damping prevents runaway velocities.
        self.velocity *= cfg.damping;

        self.position += self.velocity * state.speed_multiplier();

        self.wrap(bounds, cfg.wrap_margin);
    }

    /// Teleport to the opposite margin once a coordinate exits the bounds by
    /// more than `margin`. Velocity is untouched.
    fn wrap(&mut self, bounds: Vec2, margin: f32) {
        if self.position.x < -margin {
            self.position.x = bounds.x + margin;
        } else if self.position.x > bounds.x + margin {
            self.position.x = -margin;
        }
        if self.position.y < -margin {
            self.position.y = bounds.y + margin;
        } else if self.position.y > bounds.y + margin {
            self.position.y = -margin;
        }
    }
}

/// Uniformly random point within `bounds`.
fn random_point<R: Rng>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_spawn_within_bounds_at_base_speed() {
        let cfg = EffectConfig::default();
        let mut rng = rng();
        for _ in 0..100 {
            let p = Particle::spawn(&mut rng, BOUNDS, &cfg);
            assert!(p.position.x >= 0.0 && p.position.x < BOUNDS.x);
            assert!(p.position.y >= 0.0 && p.position.y < BOUNDS.y);
            assert!((p.velocity.length() - cfg.base_speed).abs() < 1e-4);
            assert!(p.radius >= cfg.radius_min && p.radius <= cfg.radius_max);
            assert!(p.target().is_none());
        }
    }

    #[test]
    fn test_idle_damping_reduces_speed() {
        // Zero wander isolates the damping term.
        let cfg = EffectConfig {
            wander: 0.0,
            ..EffectConfig::default()
        };
        let state = InteractionState::new();
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        p.velocity = Vec2::new(3.0, -4.0);

        let before = p.velocity.length();
        p.update(&state, &cfg, BOUNDS, &mut rng);
        let after = p.velocity.length();

        assert!(after < before);
        assert!((after - before * cfg.damping).abs() < 1e-4);
    }

    #[test]
    fn test_edge_wrap() {
        let cfg = EffectConfig::default();
        let mut state = InteractionState::new();
        // Zero multiplier keeps integration from moving the particle, so the
        // wrap is the only thing that can change its position.
        state.set_speed_multiplier(0.0);
        let mut rng = rng();

        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        p.position = Vec2::new(BOUNDS.x + cfg.wrap_margin + 1.0, 100.0);
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert_eq!(p.position.x, -cfg.wrap_margin);
        assert_eq!(p.position.y, 100.0);

        p.position = Vec2::new(-(cfg.wrap_margin + 1.0), 100.0);
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert_eq!(p.position.x, BOUNDS.x + cfg.wrap_margin);

        p.position = Vec2::new(100.0, BOUNDS.y + cfg.wrap_margin + 1.0);
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert_eq!(p.position.y, -cfg.wrap_margin);

        p.position = Vec2::new(100.0, -(cfg.wrap_margin + 1.0));
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert_eq!(p.position.y, BOUNDS.y + cfg.wrap_margin);
    }

    #[test]
    fn test_wrap_leaves_velocity_untouched() {
        // Zero wander so damping is the only velocity change this tick; the
        // wrap itself must be a pure teleport.
        let cfg = EffectConfig {
            wander: 0.0,
            ..EffectConfig::default()
        };
        let mut state = InteractionState::new();
        state.set_speed_multiplier(0.0);
        let mut rng = rng();

        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        p.position.x = BOUNDS.x + cfg.wrap_margin + 1.0;
        let expected = p.velocity * cfg.damping;
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert_eq!(p.position.x, -cfg.wrap_margin);
        assert!((p.velocity - expected).length() < 1e-6);
    }

    #[test]
    fn test_pointer_attraction_clears_target() {
        let cfg = EffectConfig::default();
        let mut state = InteractionState::new();
        state.set_enabled(true);
        state.begin_disperse();
        let mut rng = rng();

        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert!(p.target().is_some());

        state.pointer_moved(Vec2::new(400.0, 300.0));
        assert!(!state.dispersing());
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert!(p.target().is_none());
    }

    #[test]
    fn test_pointer_pull_points_at_pointer() {
        let cfg = EffectConfig::default();
        let mut state = InteractionState::new();
        state.set_enabled(true);
        state.pointer_moved(Vec2::new(500.0, 300.0));
        let mut rng = rng();

        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        p.position = Vec2::new(100.0, 300.0);
        p.velocity = Vec2::ZERO;
        p.update(&state, &cfg, BOUNDS, &mut rng);

        // Pointer is due east of the particle.
        assert!(p.velocity.x > 0.0);
        assert!(p.velocity.y.abs() < 1e-5);
    }

    #[test]
    fn test_attraction_at_pointer_position_is_finite() {
        // The epsilon keeps a particle sitting exactly on the pointer from
        // dividing by zero.
        let cfg = EffectConfig::default();
        let mut state = InteractionState::new();
        state.set_enabled(true);
        state.pointer_moved(Vec2::new(250.0, 250.0));
        let mut rng = rng();

        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        p.position = Vec2::new(250.0, 250.0);
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert!(p.velocity.is_finite());
        assert!(p.position.is_finite());
    }

    #[test]
    fn test_disperse_arrival_resets_target() {
        let cfg = EffectConfig::default();
        let mut state = InteractionState::new();
        state.begin_disperse();
        let mut rng = rng();

        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        p.update(&state, &cfg, BOUNDS, &mut rng);
        let first = p.target().expect("dispersing assigns a target");

        // Walk the particle right next to its target.
        p.position = first - Vec2::new(1.0, 0.0);
        p.velocity = Vec2::ZERO;
        p.update(&state, &cfg, BOUNDS, &mut rng);
        assert!(p.target().is_none());

        // The next dispersing tick picks a fresh one.
        p.update(&state, &cfg, BOUNDS, &mut rng);
        let second = p.target().expect("a new target is assigned");
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_multiplier_freezes_position_not_velocity() {
        let cfg = EffectConfig::default();
        let mut state = InteractionState::new();
        state.set_speed_multiplier(0.0);
        let mut rng = rng();

        let mut p = Particle::spawn(&mut rng, BOUNDS, &cfg);
        let position = p.position;
        let velocity = p.velocity;
        for _ in 0..10 {
            p.update(&state, &cfg, BOUNDS, &mut rng);
        }
        assert_eq!(p.position, position);
        assert_ne!(p.velocity, velocity);
    }
}
