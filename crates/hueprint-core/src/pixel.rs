//! The sampled color value.

use serde::{Deserialize, Serialize};

/// An RGB color with 8 bits per channel.
///
/// Ordering is lexicographic over (red, green, blue), which is the tie-break
/// order used when two colors occur equally often.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Pixel {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a pixel from the first three bytes of an RGB triple or an
    /// RGBA/RGBX quad.
    ///
    /// Bytes past the third are ignored. Returns `None` if fewer than three
    /// bytes are given.
    pub fn from_rgba(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Display label in the `R:x,G:y,B:z` form used by chart legends.
    pub fn label(&self) -> String {
        format!("R:{},G:{},B:{}", self.red, self.green, self.blue)
    }

    /// CSS-style hex string, e.g. `#FF8000`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Channels scaled to 0.0..=1.0 for renderers that build float colors.
    pub fn to_normalized(&self) -> (f32, f32, f32) {
        (
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
        )
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        assert_eq!(Pixel::new(255, 0, 12).label(), "R:255,G:0,B:12");
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(Pixel::new(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(Pixel::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_from_rgba_ignores_alpha() {
        assert_eq!(Pixel::from_rgba(&[1, 2, 3, 0]), Some(Pixel::new(1, 2, 3)));
        assert_eq!(Pixel::from_rgba(&[1, 2, 3, 255]), Some(Pixel::new(1, 2, 3)));
        assert_eq!(Pixel::from_rgba(&[1, 2, 3]), Some(Pixel::new(1, 2, 3)));
        assert_eq!(Pixel::from_rgba(&[1, 2]), None);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut colors = vec![
            Pixel::new(0, 1, 0),
            Pixel::new(0, 0, 255),
            Pixel::new(1, 0, 0),
            Pixel::new(0, 0, 1),
        ];
        colors.sort();
        assert_eq!(
            colors,
            vec![
                Pixel::new(0, 0, 1),
                Pixel::new(0, 0, 255),
                Pixel::new(0, 1, 0),
                Pixel::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_normalized() {
        let (r, g, b) = Pixel::new(255, 0, 51).to_normalized();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!(g.abs() < f32::EPSILON);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Pixel::from([9, 8, 7]), Pixel::new(9, 8, 7));
        assert_eq!(Pixel::from((9, 8, 7)), Pixel::new(9, 8, 7));
    }
}
