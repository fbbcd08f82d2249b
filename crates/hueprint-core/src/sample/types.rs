//! Core types for sampling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Pixel;

/// Bytes per source pixel (RGBA or RGBX).
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest accepted sample grid, in cells (1024x1024).
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Error types for sampling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The source buffer or its declared dimensions are unusable.
    #[error("Invalid image data: {0}")]
    InvalidImageData(String),

    /// The requested sample grid has a zero dimension or too many cells.
    #[error("Invalid sample grid: {width}x{height}")]
    InvalidSampleGrid { width: u32, height: u32 },
}

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterType {
    /// Nearest neighbor. Every sample is a color present in the source.
    Nearest,
    /// Bilinear interpolation.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation.
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Dimensions of the reduced grid colors are counted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleGrid {
    pub width: u32,
    pub height: u32,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
        }
    }
}

impl SampleGrid {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of samples a grid of this size produces, or `None` on overflow.
    pub fn cell_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Reject grids with a zero dimension or more than `MAX_GRID_CELLS` cells.
    pub fn validate(&self) -> Result<(), SampleError> {
        match self.cell_count() {
            Some(cells) if self.width > 0 && self.height > 0 && cells <= MAX_GRID_CELLS => Ok(()),
            _ => Err(SampleError::InvalidSampleGrid {
                width: self.width,
                height: self.height,
            }),
        }
    }
}

/// The pixels of one source image reduced to a sample grid.
///
/// Pixels are stored row-major: row 0 left to right, then row 1, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl SampleSet {
    /// Wrap samples that were produced elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::InvalidImageData` if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, SampleError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                SampleError::InvalidImageData(format!("grid {}x{} overflows", width, height))
            })?;
        if pixels.len() != expected {
            return Err(SampleError::InvalidImageData(format!(
                "expected {} samples for a {}x{} grid, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All samples in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Sample at grid cell (x, y), or `None` if outside the grid.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Flatten back to RGB bytes (3 per sample).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue])
            .collect()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}
