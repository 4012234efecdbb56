//! The particle pool and its tick driver.
//!
//! `Effect` owns everything the simulation needs (the configuration, the
//! bounds, the RNG, and the particles themselves) and exposes a single
//! `step()` that any frame scheduler can drive. The windowed app calls it
//! from `RedrawRequested`; tests call it directly.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::EffectConfig;
use crate::interaction::InteractionState;
use crate::particle::Particle;

/// Smallest extent the simulation will run over. A minimized window reports
/// a zero inner size; sampling positions and targets needs a non-empty range.
const MIN_BOUNDS: Vec2 = Vec2::ONE;

/// A fixed population of drifting particles over a rectangular region.
pub struct Effect {
    config: EffectConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    rng: SmallRng,
}

impl Effect {
    /// Create an effect over `bounds` (logical units) with a clock-derived
    /// RNG seed. The pool starts empty; call [`seed_particles`](Self::seed_particles).
    pub fn new(config: EffectConfig, bounds: Vec2) -> Self {
        // Different each program execution, reproducible within a run.
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::with_seed(config, bounds, seed)
    }

    /// Create an effect with a fixed RNG seed. Two effects built from the
    /// same seed and stepped with the same interaction state produce
    /// identical trajectories.
    pub fn with_seed(config: EffectConfig, bounds: Vec2, seed: u64) -> Self {
        Self {
            config,
            bounds: bounds.max(MIN_BOUNDS),
            particles: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Discard the pool and rebuild exactly `config.count` fresh particles.
    ///
    /// Idempotent: repeated calls always leave the pool at `count`.
    pub fn seed_particles(&mut self) {
        self.particles.clear();
        self.particles.reserve(self.config.count);
        for _ in 0..self.config.count {
            self.particles
                .push(Particle::spawn(&mut self.rng, self.bounds, &self.config));
        }
    }

    /// Advance every particle one tick against the shared interaction state.
    pub fn step(&mut self, state: &InteractionState) {
        for particle in &mut self.particles {
            particle.update(state, &self.config, self.bounds, &mut self.rng);
        }
    }

    /// Update the simulation bounds, e.g. after a window resize.
    ///
    /// Existing particles are not re-placed; anything left outside the new
    /// bounds wraps back in on its own. Degenerate sizes (a minimized window
    /// resizes to zero) are floored so spawning and dispersing stay valid.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds.max(MIN_BOUNDS);
    }

    /// Current simulation bounds in logical units.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// The particle pool.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The effect configuration.
    #[inline]
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }
}
