//! Windowed driver for the effect.
//!
//! `App` owns every single-threaded piece: the interaction state (mutated
//! synchronously by window events), the effect (stepped once per redraw),
//! and the renderer. `RedrawRequested` plus
//! `window.request_redraw()` is the explicit next-frame registration, so an
//! input mutation is always visible to the very next tick.
//!
//! Bindings: `Space` toggles pointer attraction, `Up`/`Down` nudge the speed
//! multiplier, `D` starts a dispersal, `R` reseeds the pool.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::EffectConfig;
use crate::effect::Effect;
use crate::error::RunError;
use crate::interaction::InteractionState;
use crate::render::{GpuRenderer, ParticleInstance};
use crate::surface::Viewport;
use crate::time::Time;

const DEFAULT_LOGICAL_SIZE: (f64, f64) = (1280.0, 720.0);
const SPEED_STEP: f32 = 0.1;

/// Open a window and run the effect until it is closed.
pub fn run(config: EffectConfig) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    viewport: Viewport,
    effect: Effect,
    interaction: InteractionState,
    time: Time,
    instances: Vec<ParticleInstance>,
    // Startup failure inside `resumed`, reported once the loop exits.
    init_error: Option<RunError>,
}

impl App {
    fn new(config: EffectConfig) -> Self {
        let viewport = Viewport::new(
            glam::Vec2::new(DEFAULT_LOGICAL_SIZE.0 as f32, DEFAULT_LOGICAL_SIZE.1 as f32),
            1.0,
        );
        let effect = Effect::new(config, viewport.logical());

        Self {
            window: None,
            renderer: None,
            viewport,
            effect,
            interaction: InteractionState::new(),
            time: Time::new(),
            instances: Vec::new(),
            init_error: None,
        }
    }

    fn handle_key(&mut self, code: KeyCode, repeat: bool) {
        match code {
            KeyCode::Space if !repeat => {
                let enabled = !self.interaction.enabled();
                self.interaction.set_enabled(enabled);
                log::info!(
                    "pointer attraction {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            KeyCode::KeyD if !repeat => {
                self.interaction.begin_disperse();
                log::info!("dispersing");
            }
            KeyCode::KeyR if !repeat => {
                self.effect.seed_particles();
                log::info!("reseeded {} particles", self.effect.particles().len());
            }
            KeyCode::ArrowUp => {
                self.interaction
                    .set_speed_multiplier(self.interaction.speed_multiplier() + SPEED_STEP);
                log::debug!("speed multiplier {:.1}", self.interaction.speed_multiplier());
            }
            KeyCode::ArrowDown => {
                self.interaction
                    .set_speed_multiplier(self.interaction.speed_multiplier() - SPEED_STEP);
                log::debug!("speed multiplier {:.1}", self.interaction.speed_multiplier());
            }
            _ => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.time.update();
        self.effect.step(&self.interaction);

        self.instances.clear();
        self.instances
            .extend(self.effect.particles().iter().map(ParticleInstance::from));

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&self.instances) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => renderer.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if self.time.frame() % 300 == 0 {
            log::debug!("{:.1} fps", self.time.fps());
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("driftglow")
            .with_inner_size(winit::dpi::LogicalSize::new(
                DEFAULT_LOGICAL_SIZE.0,
                DEFAULT_LOGICAL_SIZE.1,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        self.viewport = Viewport::from_physical(window.inner_size(), window.scale_factor());
        self.effect.set_bounds(self.viewport.logical());
        self.effect.seed_particles();
        log::info!(
            "seeded {} particles over {}x{}",
            self.effect.particles().len(),
            self.viewport.logical().x,
            self.viewport.logical().y,
        );

        let capacity = self.effect.config().count;
        match pollster::block_on(GpuRenderer::new(window.clone(), &self.viewport, capacity)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.viewport =
                    Viewport::from_physical(physical_size, self.viewport.scale_factor());
                self.effect.set_bounds(self.viewport.logical());
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(&self.viewport);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                // The matching Resized event carries the new physical size.
                self.viewport.set_scale_factor(scale_factor);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = self.viewport.to_logical(position.x, position.y);
                self.interaction.pointer_moved(logical);
            }
            WindowEvent::CursorLeft { .. } => {
                self.interaction.pointer_left();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(code, event.repeat);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
