//! Hueprint WASM - WebAssembly bindings for Hueprint
//!
//! This crate exposes the hueprint-core color profile pipeline to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `profile` - Full pipeline: frequencies and histograms for one image
//! - `histogram` - Channel histogram wrapper and standalone computation
//! - `sample` - Sample grid extraction on its own
//! - `types` - Conversions of JS inputs (filters, config, errors)
//! - `logger` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { analyze_colors } from '@hueprint/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const { data, width, height } = ctx.getImageData(0, 0, w, h);
//! const profile = analyze_colors(data, width, height, undefined);
//! console.log(`${profile.color_count} colors in ${profile.sample_count} samples`);
//! ```
//!
//! Processing is synchronous. Run it inside a Web Worker to keep the UI
//! responsive and post the results back when the call returns.

use wasm_bindgen::prelude::*;

mod histogram;
mod logger;
mod profile;
mod sample;
mod types;

// Re-export public types
pub use histogram::{compute_channel_histograms, JsChannelHistogram};
pub use profile::{analyze_colors, JsColorProfile};
pub use sample::resample_image;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init(log::LevelFilter::Info);
}

/// Change console log verbosity (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"` or `"trace"`).
///
/// # Errors
/// Returns an error for an unknown level name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logger::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    logger::init(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
