//! Self-rescheduling `requestAnimationFrame` loop.

use std::cell::RefCell;

use gloo_render::{request_animation_frame, AnimationFrame};

use crate::error::BridgeError;
use crate::with_runner;

thread_local! {
    /// Handle for the next scheduled frame. Dropping it cancels that frame.
    static FRAME: RefCell<Option<AnimationFrame>> = const { RefCell::new(None) };
}

/// Start the render loop. It never stops; calling this again is a no-op.
pub fn start_loop() -> Result<(), BridgeError> {
    if FRAME.with(|frame| frame.borrow().is_some()) {
        log::debug!("render loop already running");
        return Ok(());
    }
    web_sys::window().ok_or(BridgeError::NoWindow)?;
    schedule();
    Ok(())
}

fn schedule() {
    let handle = request_animation_frame(on_frame);
    FRAME.with(|frame| *frame.borrow_mut() = Some(handle));
}

fn on_frame(timestamp: f64) {
    FRAME.with(|frame| frame.borrow_mut().take());
    if let Err(e) = with_runner(|r| r.on_animation_frame(timestamp)) {
        log::error!("frame skipped: {}", e);
    }
    schedule();
}
