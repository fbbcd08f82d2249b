//! Channel histogram WASM bindings.
//!
//! This module provides JavaScript bindings for the per-channel intensity
//! histograms that drive the bar-chart view.

use hueprint_core::histogram::{histograms_from_rgb, ChannelHistogram};
use wasm_bindgen::prelude::*;

/// Histogram result accessible from JavaScript.
///
/// Contains 256-bin histograms for the red, green and blue channels plus the
/// combined maximum used to scale bar heights.
#[wasm_bindgen]
pub struct JsChannelHistogram {
    red: Vec<u32>,
    green: Vec<u32>,
    blue: Vec<u32>,
    combined: Vec<u32>,
    max_value: u32,
}

#[wasm_bindgen]
impl JsChannelHistogram {
    /// Get red channel histogram (256 bins).
    pub fn red(&self) -> Vec<u32> {
        self.red.clone()
    }

    /// Get green channel histogram (256 bins).
    pub fn green(&self) -> Vec<u32> {
        self.green.clone()
    }

    /// Get blue channel histogram (256 bins).
    pub fn blue(&self) -> Vec<u32> {
        self.blue.clone()
    }

    /// Per-bin sum of all three channels.
    pub fn combined(&self) -> Vec<u32> {
        self.combined.clone()
    }

    /// Get maximum bin value across all RGB channels.
    ///
    /// Zero when there were no samples; skip normalization in that case.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }
}

impl From<&ChannelHistogram> for JsChannelHistogram {
    fn from(hist: &ChannelHistogram) -> Self {
        Self {
            red: hist.red.to_vec(),
            green: hist.green.to_vec(),
            blue: hist.blue.to_vec(),
            combined: hist.combined().to_vec(),
            max_value: hist.max_value(),
        }
    }
}

/// Compute channel histograms from samples JS already holds.
///
/// # Arguments
/// * `samples` - RGB sample data as Uint8Array (3 bytes per sample)
///
/// A trailing partial triple is ignored.
///
/// # Example (TypeScript)
/// ```typescript
/// const samples = resample_image(rgba, width, height, 8, 8, 1);
/// const hist = compute_channel_histograms(samples);
/// const redBins = hist.red();   // Uint32Array[256]
/// const max = hist.max_value;   // For normalization
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_channel_histograms(samples: &[u8]) -> JsChannelHistogram {
    JsChannelHistogram::from(&histograms_from_rgb(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_histogram_creation() {
        let samples = vec![255, 0, 0, 0, 255, 0, 0, 0, 255];
        let hist = compute_channel_histograms(&samples);

        assert_eq!(hist.red().len(), 256);
        assert_eq!(hist.green().len(), 256);
        assert_eq!(hist.blue().len(), 256);
        assert_eq!(hist.combined().len(), 256);
        assert_eq!(hist.red()[255], 1);
        assert_eq!(hist.red()[0], 2);
    }

    #[test]
    fn test_js_histogram_max_value() {
        let samples = vec![128, 128, 128, 128, 128, 128, 128, 128, 128, 200, 200, 200];
        let hist = compute_channel_histograms(&samples);

        assert_eq!(hist.max_value, 3); // 3 samples at value 128
        assert_eq!(hist.red()[128], 3);
        assert_eq!(hist.red()[200], 1);
    }

    #[test]
    fn test_js_histogram_empty() {
        let hist = compute_channel_histograms(&[]);

        assert_eq!(hist.max_value, 0);
        assert!(hist.red().iter().all(|&c| c == 0));
        assert!(hist.combined().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_js_histogram_combined() {
        let samples = vec![0, 0, 255, 0, 255, 255];
        let hist = compute_channel_histograms(&samples);

        assert_eq!(hist.combined()[0], 3);
        assert_eq!(hist.combined()[255], 3);
    }

    #[test]
    fn test_js_histogram_partial_triple_ignored() {
        let hist = compute_channel_histograms(&[10, 20, 30, 40]);
        assert_eq!(hist.red()[10], 1);
        assert_eq!(hist.red()[40], 0);
    }
}
