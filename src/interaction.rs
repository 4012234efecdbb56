//! Shared interaction state.
//!
//! A single `InteractionState` is owned by the event loop driver and passed
//! by reference into both the input handlers and the per-frame update, so
//! every field has exactly one writer and mutations made by an input handler
//! are visible to the very next tick.

use glam::Vec2;

/// Pointer, toggle, and speed state read by every particle each tick.
///
/// Input handlers mutate this synchronously; [`Effect::step`](crate::Effect::step)
/// only reads it. The invariants (attraction pre-empts dispersal, disabling
/// the toggle deactivates the pointer) are enforced here rather than in the
/// event wiring so no caller can get them wrong.
#[derive(Clone, Debug)]
pub struct InteractionState {
    pointer: Vec2,
    pointer_active: bool,
    enabled: bool,
    dispersing: bool,
    speed_multiplier: f32,
}

impl InteractionState {
    /// Create the initial state: attraction disabled, pointer inactive,
    /// normal speed.
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            pointer_active: false,
            enabled: false,
            dispersing: false,
            speed_multiplier: 1.0,
        }
    }

    /// Last known pointer position, in logical units.
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Whether the pointer is currently steering the particles.
    #[inline]
    pub fn pointer_active(&self) -> bool {
        self.pointer_active
    }

    /// Whether the user has enabled pointer attraction.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether particles are currently dispersing to random targets.
    #[inline]
    pub fn dispersing(&self) -> bool {
        self.dispersing
    }

    /// Current speed multiplier.
    #[inline]
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Enable or disable pointer attraction.
    ///
    /// Disabling also deactivates the pointer immediately, so attraction
    /// stops even if the cursor is still over the surface.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pointer_active = false;
        }
    }

    /// Record a pointer move or enter at `position` (logical units).
    ///
    /// Ignored while attraction is disabled. Activating the pointer cancels
    /// any dispersal in progress.
    pub fn pointer_moved(&mut self, position: Vec2) {
        if !self.enabled {
            return;
        }
        self.pointer = position;
        self.pointer_active = true;
        self.dispersing = false;
    }

    /// Record the pointer leaving the surface.
    pub fn pointer_left(&mut self) {
        self.pointer_active = false;
    }

    /// Start dispersing: each particle steers toward its own random target
    /// until the pointer becomes active again.
    pub fn begin_disperse(&mut self) {
        self.dispersing = true;
    }

    /// Set the speed multiplier directly. Floored at zero.
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier.max(0.0);
    }

    /// Parse a textual speed-control value.
    ///
    /// Invalid or non-finite input leaves the multiplier unchanged, so a
    /// malformed control value can never leak NaN into the integration step.
    pub fn apply_speed_input(&mut self, value: &str) {
        match value.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => self.set_speed_multiplier(v),
            _ => log::debug!("ignoring malformed speed input {:?}", value),
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}
