//! Exact color frequencies for the proportional chart.
//!
//! Colors are grouped by exact RGB equality. No similarity grouping happens
//! here: (10, 10, 10) and (10, 10, 11) are two different entries.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Pixel;

/// One distinct color and how often it occurs among the samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFrequencyEntry {
    pub color: Pixel,
    pub count: u32,
    /// `count / total samples`, in 0.0..=1.0
    pub proportion: f64,
}

impl ColorFrequencyEntry {
    /// Legend label for this entry's color.
    pub fn label(&self) -> String {
        self.color.label()
    }
}

/// Count each distinct color in `samples`.
///
/// Entries are sorted by descending count. Equal counts are ordered by
/// ascending (red, green, blue). An empty input gives an empty result.
///
/// # Example
/// ```
/// use hueprint_core::{aggregate_frequencies, Pixel};
///
/// let samples = [Pixel::new(0, 0, 255), Pixel::new(255, 0, 0), Pixel::new(0, 0, 255)];
/// let entries = aggregate_frequencies(&samples);
/// assert_eq!(entries[0].color, Pixel::new(0, 0, 255));
/// assert_eq!(entries[0].count, 2);
/// ```
pub fn aggregate_frequencies(samples: &[Pixel]) -> Vec<ColorFrequencyEntry> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<Pixel, u32> = HashMap::new();
    for pixel in samples {
        *counts.entry(*pixel).or_insert(0) += 1;
    }

    let total = samples.len() as f64;
    let mut entries: Vec<ColorFrequencyEntry> = counts
        .into_iter()
        .map(|(color, count)| ColorFrequencyEntry {
            color,
            count,
            proportion: count as f64 / total,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.color.cmp(&b.color)));

    debug!(
        "{} samples, {} distinct colors",
        samples.len(),
        entries.len()
    );

    entries
}

/// The `n` most frequent entries (or all of them if there are fewer).
pub fn top_colors(entries: &[ColorFrequencyEntry], n: usize) -> &[ColorFrequencyEntry] {
    &entries[..n.min(entries.len())]
}

/// Angular extent of one pie-chart slice, in degrees clockwise from the
/// chart's zero angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub start_degrees: f64,
    pub end_degrees: f64,
}

impl Sector {
    pub fn sweep(&self) -> f64 {
        self.end_degrees - self.start_degrees
    }
}

/// Pie-chart slice boundaries for `entries`, in the same order.
///
/// Each slice starts where the previous one ended and spans its share of the
/// combined count. The final slice always ends at exactly 360 degrees.
pub fn sector_angles(entries: &[ColorFrequencyEntry]) -> Vec<Sector> {
    let total: u64 = entries.iter().map(|e| e.count as u64).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut running: u64 = 0;
    let mut sectors = Vec::with_capacity(entries.len());
    for entry in entries {
        let start = running as f64 / total as f64 * 360.0;
        running += entry.count as u64;
        let end = running as f64 / total as f64 * 360.0;
        sectors.push(Sector {
            start_degrees: start,
            end_degrees: end,
        });
    }
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> Vec<Pixel> {
        vec![
            Pixel::new(255, 0, 0),
            Pixel::new(0, 255, 0),
            Pixel::new(0, 255, 0),
            Pixel::new(0, 0, 255),
            Pixel::new(0, 0, 255),
            Pixel::new(0, 0, 255),
        ]
    }

    #[test]
    fn test_primaries_example() {
        let entries = aggregate_frequencies(&primaries());
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].color, Pixel::new(0, 0, 255));
        assert_eq!(entries[0].count, 3);
        assert!((entries[0].proportion - 0.5).abs() < 1e-12);

        assert_eq!(entries[1].color, Pixel::new(0, 255, 0));
        assert_eq!(entries[1].count, 2);
        assert!((entries[1].proportion - 1.0 / 3.0).abs() < 1e-12);

        assert_eq!(entries[2].color, Pixel::new(255, 0, 0));
        assert_eq!(entries[2].count, 1);
        assert!((entries[2].proportion - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_samples() {
        assert!(aggregate_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_single_color() {
        let samples = vec![Pixel::new(12, 34, 56); 64];
        let entries = aggregate_frequencies(&samples);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].count, 64);
        assert!((entries[0].proportion - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_ordered_by_rgb() {
        let samples = vec![
            Pixel::new(9, 0, 0),
            Pixel::new(0, 9, 0),
            Pixel::new(0, 0, 9),
            Pixel::new(0, 0, 1),
        ];
        let entries = aggregate_frequencies(&samples);
        let colors: Vec<Pixel> = entries.iter().map(|e| e.color).collect();
        assert_eq!(
            colors,
            vec![
                Pixel::new(0, 0, 1),
                Pixel::new(0, 0, 9),
                Pixel::new(0, 9, 0),
                Pixel::new(9, 0, 0),
            ]
        );
    }

    #[test]
    fn test_near_colors_stay_separate() {
        let samples = vec![Pixel::new(10, 10, 10), Pixel::new(10, 10, 11)];
        let entries = aggregate_frequencies(&samples);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.count == 1));
    }

    #[test]
    fn test_entry_label() {
        let entries = aggregate_frequencies(&primaries());
        assert_eq!(entries[0].label(), "R:0,G:0,B:255");
    }

    #[test]
    fn test_top_colors() {
        let entries = aggregate_frequencies(&primaries());
        assert_eq!(top_colors(&entries, 2).len(), 2);
        assert_eq!(top_colors(&entries, 2)[0].count, 3);
        assert_eq!(top_colors(&entries, 10).len(), 3);
        assert!(top_colors(&entries, 0).is_empty());
    }

    #[test]
    fn test_sector_angles() {
        let entries = aggregate_frequencies(&primaries());
        let sectors = sector_angles(&entries);
        assert_eq!(sectors.len(), 3);
        assert!((sectors[0].start_degrees - 0.0).abs() < 1e-9);
        assert!((sectors[0].end_degrees - 180.0).abs() < 1e-9);
        assert!((sectors[1].start_degrees - 180.0).abs() < 1e-9);
        assert!((sectors[1].end_degrees - 300.0).abs() < 1e-9);
        assert!((sectors[2].sweep() - 60.0).abs() < 1e-9);
        assert_eq!(sectors[2].end_degrees, 360.0);
    }

    #[test]
    fn test_sector_angles_empty() {
        assert!(sector_angles(&[]).is_empty());
    }
}
