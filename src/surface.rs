//! Surface sizing.
//!
//! The simulation runs entirely in logical units: placement, steering,
//! wrapping, and pointer coordinates all share one unit system. The device
//! pixel ratio only matters when configuring the wgpu surface and the
//! projection, which is what `Viewport` computes.

use glam::Vec2;
use winit::dpi::PhysicalSize;

/// Logical window size plus the scale factor mapping it to physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    logical: Vec2,
    scale_factor: f64,
}

impl Viewport {
    /// Create a viewport from a logical size and a scale factor.
    pub fn new(logical: Vec2, scale_factor: f64) -> Self {
        Self {
            logical,
            scale_factor: scale_factor.max(f64::MIN_POSITIVE),
        }
    }

    /// Create a viewport from a physical window size and its scale factor.
    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let scale_factor = scale_factor.max(f64::MIN_POSITIVE);
        Self {
            logical: Vec2::new(
                (size.width as f64 / scale_factor) as f32,
                (size.height as f64 / scale_factor) as f32,
            ),
            scale_factor,
        }
    }

    /// Logical size, the unit system the simulation lives in.
    #[inline]
    pub fn logical(&self) -> Vec2 {
        self.logical
    }

    /// Physical pixel size for the render surface.
    pub fn physical(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(
            (self.logical.x as f64 * self.scale_factor).round() as u32,
            (self.logical.y as f64 * self.scale_factor).round() as u32,
        )
    }

    /// Scale factor between logical units and physical pixels.
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Record a new scale factor, keeping the logical size.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor.max(f64::MIN_POSITIVE);
    }

    /// Convert a physical cursor position into logical units.
    pub fn to_logical(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            (x / self.scale_factor) as f32,
            (y / self.scale_factor) as f32,
        )
    }
}
