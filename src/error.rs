use thiserror::Error;
use wasm_bindgen::JsValue;

/// Component initialisation failures. Each one is fatal only to the
/// component that hit it; the gallery mounts whatever else it can.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("no window or document")]
    NoDocument,
    #[error("missing #{0} element")]
    MissingElement(String),
    #[error("#{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("2d canvas context unavailable")]
    NoCanvasContext,
    #[error("WebGPU: {0}")]
    Gpu(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for GalleryError {
    fn from(value: JsValue) -> Self {
        GalleryError::Js(format!("{:?}", value))
    }
}

impl From<GalleryError> for JsValue {
    fn from(err: GalleryError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
