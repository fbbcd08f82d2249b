//! Conversions between JavaScript inputs and core types.

use hueprint_core::{FilterType, SampleConfig, SampleError};
use wasm_bindgen::prelude::*;

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (only colors present in the source)
/// - 1 = Bilinear (default)
/// - 2 = Lanczos3
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear, // Default
    }
}

/// Read a `SampleConfig` from a JS value.
///
/// `undefined` and `null` give the default config; an object may set any
/// subset of `grid`, `filter` and `maxColors`.
pub(crate) fn config_from_js(value: JsValue) -> Result<SampleConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(SampleConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid sample config: {}", e)))
}

/// Error text handed to JavaScript.
pub(crate) fn sample_error_to_js(err: SampleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
