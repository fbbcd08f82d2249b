//! Per-channel intensity histograms over the sample grid.
//!
//! This module bins each sample's red, green and blue values into three
//! 256-bucket histograms for the bar-chart display.

use serde::{Deserialize, Serialize};

use crate::Pixel;

/// Number of intensity buckets per channel.
pub const BUCKETS: usize = 256;

/// Color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// Red, green and blue histograms (256 bins each).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHistogram {
    #[serde(with = "buckets")]
    pub red: [u32; BUCKETS],
    #[serde(with = "buckets")]
    pub green: [u32; BUCKETS],
    #[serde(with = "buckets")]
    pub blue: [u32; BUCKETS],
}

impl Default for ChannelHistogram {
    fn default() -> Self {
        Self {
            red: [0; BUCKETS],
            green: [0; BUCKETS],
            blue: [0; BUCKETS],
        }
    }
}

impl ChannelHistogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self, channel: Channel) -> &[u32; BUCKETS] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Find the maximum value across all channels for normalization
    pub fn max_value(&self) -> u32 {
        let max_r = *self.red.iter().max().unwrap_or(&0);
        let max_g = *self.green.iter().max().unwrap_or(&0);
        let max_b = *self.blue.iter().max().unwrap_or(&0);
        max_r.max(max_g).max(max_b)
    }

    /// Sum of one channel's buckets. Equals the sample count.
    pub fn total(&self, channel: Channel) -> u64 {
        self.channel(channel).iter().map(|&c| c as u64).sum()
    }

    /// Per-bucket sum of all three channels, saturating at `u32::MAX`.
    pub fn combined(&self) -> [u32; BUCKETS] {
        let mut out = [0u32; BUCKETS];
        for (i, bucket) in out.iter_mut().enumerate() {
            *bucket = self.red[i]
                .saturating_add(self.green[i])
                .saturating_add(self.blue[i]);
        }
        out
    }

    /// Bar heights for `channel`, scaled so the tallest bucket across all
    /// channels reaches `full_height`.
    ///
    /// An empty histogram gives all zeros.
    pub fn normalized_heights(&self, channel: Channel, full_height: f32) -> Vec<f32> {
        let max = self.max_value();
        if max == 0 {
            return vec![0.0; BUCKETS];
        }
        self.channel(channel)
            .iter()
            .map(|&count| full_height * count as f32 / max as f32)
            .collect()
    }
}

/// Bin every sample's channels into a fresh `ChannelHistogram`.
///
/// # Example
/// ```
/// use hueprint_core::{build_channel_histograms, Pixel};
///
/// let hist = build_channel_histograms(&[Pixel::new(255, 0, 0), Pixel::new(0, 255, 0)]);
/// assert_eq!(hist.red[255], 1);
/// assert_eq!(hist.green[255], 1);
/// ```
///
/// # Performance
/// Single pass, O(n) in the number of samples; 3KB of bins.
pub fn build_channel_histograms(samples: &[Pixel]) -> ChannelHistogram {
    let mut hist = ChannelHistogram::new();

    for pixel in samples {
        hist.red[pixel.red as usize] += 1;
        hist.green[pixel.green as usize] += 1;
        hist.blue[pixel.blue as usize] += 1;
    }

    hist
}

/// Build histograms from a flat RGB byte stream (3 bytes per sample).
///
/// A trailing partial triple is ignored.
pub fn histograms_from_rgb(bytes: &[u8]) -> ChannelHistogram {
    let samples: Vec<Pixel> = bytes.chunks_exact(3).filter_map(Pixel::from_rgba).collect();
    build_channel_histograms(&samples)
}

/// serde has no impl for arrays longer than 32, so buckets go through a
/// sequence.
mod buckets {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::BUCKETS;

    pub fn serialize<S: Serializer>(bins: &[u32; BUCKETS], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(bins.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u32; BUCKETS], D::Error> {
        let bins = Vec::<u32>::deserialize(deserializer)?;
        let len = bins.len();
        bins.try_into()
            .map_err(|_| D::Error::invalid_length(len, &"256 histogram buckets"))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn samples_strategy() -> impl Strategy<Value = Vec<Pixel>> {
        prop::collection::vec(any::<(u8, u8, u8)>().prop_map(Pixel::from), 0..300)
    }

    proptest! {
        /// Property: every channel's buckets sum to the sample count.
        #[test]
        fn prop_channel_sums(samples in samples_strategy()) {
            let hist = build_channel_histograms(&samples);
            for channel in Channel::ALL {
                prop_assert_eq!(hist.total(channel), samples.len() as u64);
            }
        }

        /// Property: max_value is attained by some bucket and bounds all others.
        #[test]
        fn prop_max_value(samples in samples_strategy()) {
            let hist = build_channel_histograms(&samples);
            let max = hist.max_value();
            let all = hist.red.iter().chain(hist.green.iter()).chain(hist.blue.iter());
            prop_assert!(all.clone().all(|&c| c <= max));
            prop_assert!(samples.is_empty() || all.clone().any(|&c| c == max));
            prop_assert!(max as usize <= samples.len());
        }

        /// Property: normalized heights never exceed the full height.
        #[test]
        fn prop_heights_bounded(samples in samples_strategy()) {
            let hist = build_channel_histograms(&samples);
            for channel in Channel::ALL {
                let heights = hist.normalized_heights(channel, 50.0);
                prop_assert!(heights.iter().all(|&h| (0.0..=50.0).contains(&h)));
            }
        }

        /// Property: building twice yields identical histograms.
        #[test]
        fn prop_idempotent(samples in samples_strategy()) {
            prop_assert_eq!(build_channel_histograms(&samples), build_channel_histograms(&samples));
        }
    }
}
