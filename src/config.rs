//! Effect configuration.
//!
//! All motion constants are fixed at startup. Only the speed multiplier and
//! the interaction toggle change at runtime, and those live in
//! [`InteractionState`](crate::InteractionState), not here.

/// Tuning constants for the particle effect.
///
/// The defaults reproduce the reference look: 150 slow particles with a
/// gentle wander and a soft pull toward the pointer.
///
/// # Example
///
/// ```ignore
/// let cfg = EffectConfig {
///     count: 400,
///     wander: 0.2,
///     ..EffectConfig::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct EffectConfig {
    /// Number of particles in the pool.
    pub count: usize,
    /// Initial speed of every particle, in logical units per tick.
    pub base_speed: f32,
    /// Steering strength toward the pointer while attraction is active.
    pub attraction: f32,
    /// Magnitude of the per-tick random jitter in idle mode.
    pub wander: f32,
    /// Steering strength toward a disperse target.
    pub disperse_pull: f32,
    /// Per-axis velocity decay applied every tick, in every mode.
    pub damping: f32,
    /// How far past the visible bounds a particle may drift before it
    /// teleports to the opposite side.
    pub wrap_margin: f32,
    /// Distance at which a disperse target counts as reached.
    pub arrive_distance: f32,
    /// Smallest particle radius, in logical units.
    pub radius_min: f32,
    /// Largest particle radius, in logical units.
    pub radius_max: f32,
    /// Added to distance denominators so a particle sitting exactly on its
    /// steering target never divides by zero.
    pub distance_epsilon: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            count: 150,
            base_speed: 0.5,
            attraction: 0.035,
            wander: 0.5,
            disperse_pull: 0.03,
            damping: 0.985,
            wrap_margin: 40.0,
            arrive_distance: 6.0,
            radius_min: 5.0,
            radius_max: 9.5,
            distance_epsilon: 0.001,
        }
    }
}
