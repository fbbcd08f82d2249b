//! Sample grid WASM bindings.
//!
//! Exposes the resampler alone, for callers that want to show the sample grid
//! or keep the samples around.

use hueprint_core::{resample, SampleError, SampleGrid};
use wasm_bindgen::prelude::*;

use crate::types::{filter_from_u8, sample_error_to_js};

/// Reduce an image to a `grid_width x grid_height` sample grid.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data as Uint8Array (4 bytes per pixel, alpha ignored)
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `grid_width` - Sample grid width
/// * `grid_height` - Sample grid height
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
///
/// # Returns
///
/// RGB sample bytes (3 per sample, row-major).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const samples = resample_image(data, width, height, 8, 8, 0);
/// // samples.length === 8 * 8 * 3
/// ```
#[wasm_bindgen]
pub fn resample_image(
    pixels: &[u8],
    width: u32,
    height: u32,
    grid_width: u32,
    grid_height: u32,
    filter: u8,
) -> Result<Vec<u8>, JsValue> {
    resample_rgb(pixels, width, height, grid_width, grid_height, filter).map_err(sample_error_to_js)
}

fn resample_rgb(
    pixels: &[u8],
    width: u32,
    height: u32,
    grid_width: u32,
    grid_height: u32,
    filter: u8,
) -> Result<Vec<u8>, SampleError> {
    let grid = SampleGrid::new(grid_width, grid_height);
    let samples = resample(pixels, width, height, grid, filter_from_u8(filter))?;
    Ok(samples.to_rgb_bytes())
}
