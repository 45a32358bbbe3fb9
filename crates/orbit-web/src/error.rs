use orbit_engine::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the browser boundary.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("canvas element '{0}' not found")]
    CanvasNotFound(String),
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("sandbox not initialized, call sandbox_init() first")]
    NotInitialized,
    #[error("image bytes are empty")]
    EmptyImage,
    #[error("image could not be decoded")]
    ImageDecode,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BridgeError {
    fn from(value: JsValue) -> Self {
        BridgeError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
