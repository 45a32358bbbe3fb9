//! Background image decoding.
//!
//! Raw file bytes go into a Blob, the Blob gets an object URL, and an
//! `<img>` element decodes it. The result arrives later on the image's
//! load or error callback, on the same thread as everything else.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlImageElement, Url};

use crate::error::BridgeError;
use crate::surface::CanvasImage;

type Pending = Rc<RefCell<Option<Box<dyn FnOnce(Result<CanvasImage, BridgeError>)>>>>;

/// Start decoding `bytes`. `on_ready` runs exactly once, with either the
/// decoded image or the reason it failed.
///
/// Errors returned directly mean decoding never started.
pub fn decode_image(
    bytes: &[u8],
    on_ready: impl FnOnce(Result<CanvasImage, BridgeError>) + 'static,
) -> Result<(), BridgeError> {
    if bytes.is_empty() {
        return Err(BridgeError::EmptyImage);
    }

    let array = js_sys::Uint8Array::from(bytes);
    let blob = Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&array))?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let img = HtmlImageElement::new()?;

    let pending: Pending = Rc::new(RefCell::new(Some(Box::new(on_ready))));

    // On load - hand over the decoded element
    let img_clone = img.clone();
    let url_clone = url.clone();
    let pending_clone = pending.clone();
    let on_load = Closure::once(move || {
        finish(&img_clone, &url_clone);
        if let Some(callback) = pending_clone.borrow_mut().take() {
            callback(Ok(CanvasImage(img_clone.clone())));
        }
    });
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    // On error - malformed or unsupported file
    let img_clone = img.clone();
    let url_clone = url.clone();
    let on_error = Closure::once(move || {
        finish(&img_clone, &url_clone);
        if let Some(callback) = pending.borrow_mut().take() {
            callback(Err(BridgeError::ImageDecode));
        }
    });
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    img.set_src(&url);
    Ok(())
}

/// Detach handlers and release the object URL once decoding settled.
fn finish(img: &HtmlImageElement, url: &str) {
    img.set_onload(None);
    img.set_onerror(None);
    if let Err(e) = Url::revoke_object_url(url) {
        log::debug!("revoke_object_url failed: {}", BridgeError::from(e));
    }
}
