//! The full pipeline: resample, count colors, bin channels.
//!
//! Each call owns its samples and returns a fresh `ColorProfile`; nothing is
//! cached between calls. The work is synchronous and runs to completion, so a
//! host that must stay responsive runs the whole call on a worker and takes
//! the result when it is done.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SampleConfig;
use crate::frequency::{aggregate_frequencies, sector_angles, ColorFrequencyEntry, Sector};
use crate::histogram::{build_channel_histograms, ChannelHistogram};
use crate::sample::{resample, SampleError, SampleSet};

/// Aggregated color statistics for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorProfile {
    /// Number of samples the statistics were computed from
    pub sample_count: usize,
    /// Distinct colors, most frequent first
    pub frequencies: Vec<ColorFrequencyEntry>,
    /// Red, green and blue intensity histograms
    pub histogram: ChannelHistogram,
}

impl ColorProfile {
    /// Compute statistics for samples that were already taken.
    ///
    /// `max_colors` truncates the frequency list after sorting. Proportions
    /// stay relative to the full sample count, so a truncated list sums to
    /// less than 1.
    pub fn from_samples(samples: &SampleSet, max_colors: Option<usize>) -> Self {
        let mut frequencies = aggregate_frequencies(samples.pixels());
        if let Some(limit) = max_colors {
            frequencies.truncate(limit);
        }
        let histogram = build_channel_histograms(samples.pixels());

        Self {
            sample_count: samples.len(),
            frequencies,
            histogram,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Most frequent color, if any.
    pub fn dominant(&self) -> Option<&ColorFrequencyEntry> {
        self.frequencies.first()
    }

    /// Pie-chart slices for the frequency list.
    pub fn sectors(&self) -> Vec<Sector> {
        sector_angles(&self.frequencies)
    }
}

/// Extract a color profile from a 4-byte-per-pixel source buffer.
///
/// # Arguments
/// * `pixels` - RGBA/RGBX pixel data (row-major order)
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `config` - Sample grid, filter and output options
///
/// # Errors
/// Any `SampleError` from validating the config or resampling the source.
/// No partial profile is returned on failure.
pub fn extract_color_profile(
    pixels: &[u8],
    width: u32,
    height: u32,
    config: &SampleConfig,
) -> Result<ColorProfile, SampleError> {
    config.validate()?;
    let samples = resample(pixels, width, height, config.grid, config.filter)?;
    let profile = ColorProfile::from_samples(&samples, config.max_colors);

    debug!(
        "profile: {} samples, {} colors, histogram max {}",
        profile.sample_count,
        profile.frequencies.len(),
        profile.histogram.max_value()
    );

    Ok(profile)
}
