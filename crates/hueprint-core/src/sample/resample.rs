//! Reduction of a source pixel buffer to a fixed sample grid.
//!
//! The source is 4 bytes per pixel (RGBA or RGBX). The fourth byte is dropped
//! before resizing so it has no influence on the sampled colors.

use log::{debug, warn};

use super::{FilterType, SampleError, SampleGrid, SampleSet, BYTES_PER_PIXEL};
use crate::Pixel;

/// Resample a source image to exactly `grid.width * grid.height` pixels.
///
/// # Arguments
///
/// * `pixels` - Source pixel data (4 bytes per pixel, row-major order)
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `grid` - Target sample grid
/// * `filter` - Interpolation filter to use
///
/// # Returns
///
/// A `SampleSet` in row-major order. Identical inputs always produce
/// identical samples.
///
/// # Errors
///
/// Returns `SampleError::InvalidImageData` if a source dimension is zero or
/// the buffer length is not exactly `width * height * 4`, and
/// `SampleError::InvalidSampleGrid` if the grid has a zero dimension or more
/// than `MAX_GRID_CELLS` cells.
pub fn resample(
    pixels: &[u8],
    width: u32,
    height: u32,
    grid: SampleGrid,
    filter: FilterType,
) -> Result<SampleSet, SampleError> {
    grid.validate().inspect_err(|e| warn!("rejected sample grid: {e}"))?;
    validate_source(pixels, width, height).inspect_err(|e| warn!("rejected source: {e}"))?;

    // Fast path: source already has the grid dimensions
    if width == grid.width && height == grid.height {
        debug!("source is {width}x{height}, already at sample grid size");
        let samples = pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter_map(Pixel::from_rgba)
            .collect();
        return SampleSet::from_pixels(width, height, samples);
    }

    let rgb_image =
        image::RgbImage::from_raw(width, height, strip_alpha(pixels)).ok_or_else(|| {
            SampleError::InvalidImageData("Failed to create RgbImage".to_string())
        })?;

    let resized = image::imageops::resize(
        &rgb_image,
        grid.width,
        grid.height,
        filter.to_image_filter(),
    );

    debug!(
        "resampled {}x{} to {}x{} with {:?}",
        width, height, grid.width, grid.height, filter
    );

    let samples = resized.pixels().map(|p| Pixel::from(p.0)).collect();
    SampleSet::from_pixels(grid.width, grid.height, samples)
}

/// Check that `pixels` holds exactly `width * height` 4-byte pixels.
fn validate_source(pixels: &[u8], width: u32, height: u32) -> Result<(), SampleError> {
    if width == 0 || height == 0 {
        return Err(SampleError::InvalidImageData(format!(
            "source dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    if pixels.len() % BYTES_PER_PIXEL != 0 {
        return Err(SampleError::InvalidImageData(format!(
            "buffer length {} is not a multiple of {}",
            pixels.len(),
            BYTES_PER_PIXEL
        )));
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| {
            SampleError::InvalidImageData(format!(
                "source dimensions {}x{} overflow",
                width, height
            ))
        })?;

    if pixels.len() != expected {
        return Err(SampleError::InvalidImageData(format!(
            "expected {} bytes for {}x{}, got {}",
            expected,
            width,
            height,
            pixels.len()
        )));
    }

    Ok(())
}

fn strip_alpha(pixels: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixels.len() / BYTES_PER_PIXEL * 3);
    for quad in pixels.chunks_exact(BYTES_PER_PIXEL) {
        rgb.extend_from_slice(&quad[..3]);
    }
    rgb
}
