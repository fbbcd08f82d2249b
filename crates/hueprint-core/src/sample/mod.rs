//! Sampling of a decoded pixel buffer onto a small fixed grid.
//!
//! Color statistics are computed on a reduced grid (8x8 by default) rather
//! than on the full image, which bounds the cost of everything downstream.
//!
//! # Examples
//!
//! ```ignore
//! use hueprint_core::sample::{resample, FilterType, SampleGrid};
//!
//! let samples = resample(&rgba, width, height, SampleGrid::default(), FilterType::Nearest)?;
//! assert_eq!(samples.len(), 64);
//! ```

mod resample;
mod types;

pub use resample::resample;
pub use types::{FilterType, SampleError, SampleGrid, SampleSet, BYTES_PER_PIXEL, MAX_GRID_CELLS};
