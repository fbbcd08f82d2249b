//! Hueprint Core - Color profile extraction
//!
//! This crate reduces a decoded image to a small sample grid and derives the
//! statistics a color chart needs: exact color frequencies (for a
//! proportional chart) and per-channel intensity histograms (for a bar
//! chart).
//!
//! Decoding and rendering are left to the caller. Input is an RGBA/RGBX
//! buffer plus its dimensions; output is plain data.

pub mod config;
pub mod frequency;
pub mod histogram;
pub mod pixel;
pub mod profile;
pub mod sample;

pub use config::SampleConfig;
pub use frequency::{aggregate_frequencies, sector_angles, top_colors, ColorFrequencyEntry, Sector};
pub use histogram::{build_channel_histograms, Channel, ChannelHistogram};
pub use pixel::Pixel;
pub use profile::{extract_color_profile, ColorProfile};
pub use sample::{resample, FilterType, SampleError, SampleGrid, SampleSet};
