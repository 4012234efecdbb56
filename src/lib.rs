//! # driftglow
//!
//! A decorative field of glowing particles that drift with random wander,
//! gather around the pointer when attraction is enabled, and scatter to
//! random targets when dispersed.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftglow::EffectConfig;
//!
//! fn main() -> Result<(), driftglow::RunError> {
//!     env_logger::init();
//!     driftglow::run(EffectConfig::default())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The effect
//!
//! [`Effect`] owns the particle pool, the configuration, the bounds, and the
//! RNG. It is host-agnostic: anything that can call [`Effect::step`] once per
//! frame can drive it. The bundled window driver ([`run`]) does so from
//! winit's redraw callback; tests drive it headlessly.
//!
//! ### Interaction state
//!
//! A single [`InteractionState`] carries the pointer position, the
//! attraction toggle, the dispersing flag, and the speed multiplier. Input
//! handlers mutate it synchronously; every particle reads it each tick.
//! Pointer attraction always pre-empts dispersal, and disabling the toggle
//! deactivates the pointer immediately.
//!
//! ### Units
//!
//! The simulation runs entirely in logical (scale-independent) units. The
//! device pixel ratio is applied only when sizing the render surface, so the
//! wrap margin and pointer coordinates agree on every display density; see
//! [`Viewport`].
//!
//! ### Determinism
//!
//! All randomness (placement, headings, radii, jitter, disperse targets)
//! flows through one seedable RNG: [`Effect::with_seed`] replays a run
//! exactly.

mod app;
mod config;
mod effect;
pub mod error;
mod interaction;
mod particle;
mod render;
mod shader;
mod surface;
pub mod time;

pub use app::run;
pub use config::EffectConfig;
pub use effect::Effect;
pub use error::{GpuError, RunError};
pub use glam::Vec2;
pub use interaction::InteractionState;
pub use particle::Particle;
pub use surface::Viewport;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::EffectConfig;
    pub use crate::effect::Effect;
    pub use crate::interaction::InteractionState;
    pub use crate::particle::Particle;
    pub use crate::surface::Viewport;
    pub use crate::time::Time;
    pub use crate::Vec2;
}
