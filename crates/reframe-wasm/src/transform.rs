//! WASM bindings for the transform pipeline.
//!
//! Options arrive as a plain JS object using the same camelCase field names
//! as `reframe_core::Options`; missing fields take their defaults and
//! `undefined`/`null` means "no options".

use reframe_core::{Options, TransformError};
use wasm_bindgen::prelude::*;

/// Transform an encoded GIF, JPEG or PNG image.
///
/// # Arguments
///
/// * `bytes` - The encoded image as a `Uint8Array`
/// * `options` - `{ width, height, fit, scaleUp, flipVertical, flipHorizontal, rotate, quality }`
///
/// # Returns
///
/// The re-encoded image in the input's format, or an error string prefixed
/// with the failing stage.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Upright 400px-wide preview, honoring the camera's EXIF orientation
/// const preview = transform(bytes, { width: 400, fit: true, rotate: 360 });
/// ```
#[wasm_bindgen]
pub fn transform(bytes: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options = options_from_js(options)?;
    transform_bytes(bytes, &options).map_err(|e| JsValue::from_str(&e))
}

/// Compute the resize plan for an image of the given size.
///
/// Returns `{ width, height, resize }`, where a 0 dimension is derived from
/// the other one to keep the aspect ratio.
#[wasm_bindgen]
pub fn resize_params(width: u32, height: u32, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let params = reframe_core::resize_params(width, height, &options);
    serde_wasm_bindgen::to_value(&params).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn options_from_js(value: JsValue) -> Result<Options, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Options::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the core pipeline and flatten its error into a message.
pub(crate) fn transform_bytes(bytes: &[u8], options: &Options) -> Result<Vec<u8>, String> {
    reframe_core::transform(bytes, options).map_err(|e| error_message(&e))
}

fn error_message(error: &TransformError) -> String {
    format!("{:?} error: {}", error.stage(), error)
}
