//! Color profile WASM bindings.
//!
//! Runs the whole resample, count and bin pipeline in one call and hands the
//! chart data back to JavaScript.
//!
//! # Example
//!
//! ```typescript
//! import { analyze_colors } from '@hueprint/wasm';
//!
//! const { data, width, height } = ctx.getImageData(0, 0, w, h);
//! const profile = analyze_colors(data, width, height, { filter: 'nearest' });
//!
//! const slices = profile.frequencies();  // [{ label, count, proportion, color, hex }]
//! const hist = profile.histogram();      // JsChannelHistogram
//! profile.free();
//! ```

use hueprint_core::{
    extract_color_profile, ColorFrequencyEntry, ColorProfile, Pixel, SampleConfig, SampleError,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::histogram::JsChannelHistogram;
use crate::types::{config_from_js, sample_error_to_js};

/// One pie-chart slice as seen by JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct FrequencyEntryJs {
    label: String,
    count: u32,
    proportion: f64,
    color: Pixel,
    hex: String,
}

impl From<&ColorFrequencyEntry> for FrequencyEntryJs {
    fn from(entry: &ColorFrequencyEntry) -> Self {
        Self {
            label: entry.label(),
            count: entry.count,
            proportion: entry.proportion,
            color: entry.color,
            hex: entry.color.to_hex(),
        }
    }
}

/// Color statistics for one image, accessible from JavaScript.
#[wasm_bindgen]
pub struct JsColorProfile {
    inner: ColorProfile,
}

#[wasm_bindgen]
impl JsColorProfile {
    /// Number of samples the statistics were computed from.
    #[wasm_bindgen(getter)]
    pub fn sample_count(&self) -> usize {
        self.inner.sample_count
    }

    /// Number of distinct colors in the frequency list.
    #[wasm_bindgen(getter)]
    pub fn color_count(&self) -> usize {
        self.inner.frequencies.len()
    }

    /// Frequency list, most frequent first.
    ///
    /// Returns an array of `{ label, count, proportion, color: { red, green,
    /// blue }, hex }` objects.
    pub fn frequencies(&self) -> Result<JsValue, JsValue> {
        let entries: Vec<FrequencyEntryJs> = self.entries();
        serde_wasm_bindgen::to_value(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize frequencies: {}", e)))
    }

    /// Pie-chart slice boundaries in degrees, as `{ start_degrees, end_degrees }`.
    pub fn sectors(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.sectors())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize sectors: {}", e)))
    }

    /// Channel histograms for the bar-chart view.
    pub fn histogram(&self) -> JsChannelHistogram {
        JsChannelHistogram::from(&self.inner.histogram)
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsColorProfile {
    fn entries(&self) -> Vec<FrequencyEntryJs> {
        self.inner
            .frequencies
            .iter()
            .map(FrequencyEntryJs::from)
            .collect()
    }
}

/// Analyze the colors of an image.
///
/// # Arguments
/// * `pixels` - RGBA pixel data as Uint8Array (4 bytes per pixel, alpha ignored)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `config` - Optional `{ grid: { width, height }, filter, maxColors }`;
///   `undefined` uses an 8x8 grid with bilinear filtering
///
/// # Errors
/// Returns an error string if the config cannot be read, the grid has a zero
/// dimension or too many cells, or the pixel buffer does not match
/// `width * height * 4`.
#[wasm_bindgen]
pub fn analyze_colors(
    pixels: &[u8],
    width: u32,
    height: u32,
    config: JsValue,
) -> Result<JsColorProfile, JsValue> {
    let config = config_from_js(config)?;
    analyze(pixels, width, height, &config).map_err(sample_error_to_js)
}

fn analyze(
    pixels: &[u8],
    width: u32,
    height: u32,
    config: &SampleConfig,
) -> Result<JsColorProfile, SampleError> {
    extract_color_profile(pixels, width, height, config).map(|inner| JsColorProfile { inner })
}
