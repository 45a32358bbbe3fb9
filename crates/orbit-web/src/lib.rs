//! Browser bridge for the orbit sandbox.
//!
//! The host page looks up its buttons and file input itself and forwards
//! them here: `sandbox_spawn` for the create button, `sandbox_destroy` for
//! the destroy button, `sandbox_load_background` with the chosen file's
//! bytes, and the canvas pointer events in canvas-local coordinates.
//!
//! Pointer events are queued and applied at the start of the next frame.
//! Button presses apply immediately, after whatever pointer events are
//! still queued.

pub mod animation;
pub mod clock;
pub mod error;
pub mod image;
pub mod runner;
pub mod surface;

use std::cell::RefCell;

use orbit_engine::{InputEvent, SandboxConfig};
use wasm_bindgen::prelude::*;

pub use error::BridgeError;
pub use runner::SandboxRunner;
pub use surface::{CanvasImage, CanvasSurface};

thread_local! {
    static RUNNER: RefCell<Option<SandboxRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner.
pub(crate) fn with_runner<R>(f: impl FnOnce(&mut SandboxRunner) -> R) -> Result<R, BridgeError> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().ok_or(BridgeError::NotInitialized)?;
        Ok(f(runner))
    })
}

/// Like [`with_runner`] for fire-and-forget exports: failures are logged.
fn with_runner_logged(what: &str, f: impl FnOnce(&mut SandboxRunner)) {
    if let Err(e) = with_runner(f) {
        log::error!("{}: {}", what, e);
    }
}

fn build_runner(canvas_id: &str, config_json: Option<&str>) -> Result<SandboxRunner, BridgeError> {
    let config = match config_json {
        Some(json) => SandboxConfig::from_json(json)?,
        // No explicit config: vary the layout between page loads.
        None => SandboxConfig::default().with_seed(js_sys::Date::now() as u64),
    };
    let surface = CanvasSurface::from_canvas_id(canvas_id)?;
    SandboxRunner::new(surface, config)
}

#[wasm_bindgen]
pub fn sandbox_init(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = build_runner(canvas_id, config_json.as_deref()).map_err(|e| {
        log::error!("sandbox_init failed: {}", e);
        JsValue::from(e)
    })?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("orbit sandbox: initialized on #{}", canvas_id);
    Ok(())
}

/// Start the self-rescheduling render loop.
#[wasm_bindgen]
pub fn sandbox_start() -> Result<(), JsValue> {
    animation::start_loop().map_err(JsValue::from)
}

/// Drive one frame manually, for hosts that run their own loop.
#[wasm_bindgen]
pub fn sandbox_tick(dt: f32) {
    with_runner_logged("sandbox_tick", |r| r.tick(dt));
}

#[wasm_bindgen]
pub fn sandbox_pointer_down(x: f32, y: f32) {
    with_runner_logged("sandbox_pointer_down", |r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn sandbox_pointer_move(x: f32, y: f32) {
    with_runner_logged("sandbox_pointer_move", |r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn sandbox_pointer_up() {
    with_runner_logged("sandbox_pointer_up", |r| r.push_input(InputEvent::PointerUp));
}

/// Spawn right away, so `sandbox_sprite_count` reflects it before the next frame.
#[wasm_bindgen]
pub fn sandbox_spawn() {
    with_runner_logged("sandbox_spawn", |r| r.apply(InputEvent::Spawn));
}

/// Clear the selection right away and schedule its removal.
#[wasm_bindgen]
pub fn sandbox_destroy() {
    with_runner_logged("sandbox_destroy", |r| r.apply(InputEvent::Destroy));
}

/// Decode `bytes` and use the result as the background once it is ready.
/// A file that fails to decode leaves the current background in place.
#[wasm_bindgen]
pub fn sandbox_load_background(bytes: &[u8]) -> Result<(), JsValue> {
    image::decode_image(bytes, |result| match result {
        Ok(img) => with_runner_logged("background", |r| r.set_background(img)),
        Err(e) => log::warn!("background not loaded: {}", e),
    })
    .map_err(|e| {
        log::warn!("background not loaded: {}", e);
        JsValue::from(e)
    })
}

#[wasm_bindgen]
pub fn sandbox_clear_background() {
    with_runner_logged("sandbox_clear_background", |r| r.clear_background());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn sandbox_sprite_count() -> u32 {
    with_runner(|r| r.sprite_count()).unwrap_or(0)
}

/// Selected sprite id, or -1 when nothing is selected.
#[wasm_bindgen]
pub fn sandbox_selected() -> i32 {
    with_runner(|r| r.selected().map(|id| id.0 as i32).unwrap_or(-1)).unwrap_or(-1)
}

#[wasm_bindgen]
pub fn sandbox_pending_removals() -> u32 {
    with_runner(|r| r.pending_removals()).unwrap_or(0)
}
