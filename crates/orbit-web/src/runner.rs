use orbit_engine::{ImageSource, InputEvent, Sandbox, SandboxConfig, SpriteId, Surface};

use crate::clock::FrameClock;
use crate::error::BridgeError;
use crate::surface::{CanvasImage, CanvasSurface};

/// Owns the sandbox and the canvas it draws into.
///
/// Lives in a `thread_local!` in `lib.rs`, because wasm-bindgen cannot
/// export a struct holding JS handles across the callbacks that need it.
pub struct SandboxRunner {
    sandbox: Sandbox<CanvasImage>,
    surface: CanvasSurface,
    clock: FrameClock,
}

impl SandboxRunner {
    /// Build a runner. The surface dictates width and height, overriding the config.
    pub fn new(surface: CanvasSurface, config: SandboxConfig) -> Result<Self, BridgeError> {
        let (width, height) = surface.size();
        let config = config.with_size(width, height);
        config.validate()?;
        Ok(Self {
            sandbox: Sandbox::new(config),
            surface,
            clock: FrameClock::new(),
        })
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.sandbox.push_input(event);
    }

    /// Apply an event now, behind anything already queued.
    pub fn apply(&mut self, event: InputEvent) {
        self.sandbox.apply(event);
    }

    /// Run one frame with an explicit delta in seconds.
    pub fn tick(&mut self, dt: f32) {
        self.sandbox.frame(dt, &mut self.surface);
    }

    /// Run one frame from a `requestAnimationFrame` timestamp.
    pub fn on_animation_frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.advance(timestamp_ms);
        self.tick(dt);
    }

    pub fn set_background(&mut self, image: CanvasImage) {
        let (w, h) = image.dimensions();
        log::info!("background loaded ({}x{})", w, h);
        self.sandbox.set_background(image);
    }

    pub fn clear_background(&mut self) {
        self.sandbox.clear_background();
    }

    pub fn sprite_count(&self) -> u32 {
        self.sandbox.sprites().len() as u32
    }

    pub fn selected(&self) -> Option<SpriteId> {
        self.sandbox.interaction().selected()
    }

    pub fn pending_removals(&self) -> u32 {
        self.sandbox.removals().len() as u32
    }
}
