//! Options controlling one color profile extraction.

use serde::{Deserialize, Serialize};

use crate::sample::{FilterType, SampleError, SampleGrid};

/// Sampling and output options.
///
/// Every field has a default, so a partial object (`{"filter": "nearest"}`)
/// deserializes into a complete config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SampleConfig {
    /// Grid the source is reduced to before counting (8x8 by default)
    pub grid: SampleGrid,
    /// Resampling filter
    pub filter: FilterType,
    /// Keep only this many of the most frequent colors
    pub max_colors: Option<usize>,
}

impl SampleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(mut self, width: u32, height: u32) -> Self {
        self.grid = SampleGrid::new(width, height);
        self
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = Some(max_colors);
        self
    }

    pub fn validate(&self) -> Result<(), SampleError> {
        self.grid.validate()
    }
}
