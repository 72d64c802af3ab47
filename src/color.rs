//! sRGB color type and the color measures the chart sorts by.
//!
//! Values are float channels in 0.0..=1.0 so that colors defined as float
//! triples and colors parsed from 8-bit hex strings compare exactly when
//! they describe the same value.

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (0.0..=1.0)
    pub r: f32,
    /// Green channel (0.0..=1.0)
    pub g: f32,
    /// Blue channel (0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use swatchbook::color::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Format as a lowercase `#rrggbb` string for SVG attributes.
    ///
    /// # Example
    /// ```
    /// use swatchbook::color::Srgb;
    /// assert_eq!(Srgb::from_u8(31, 119, 180).to_hex(), "#1f77b4");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// True when all three channels are exactly equal.
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// HSV hue as a fraction of a turn in 0.0..1.0, with red at 0.
    ///
    /// Achromatic colors have no hue and report 0.0; callers should check
    /// [`is_achromatic`](Self::is_achromatic) first when that matters.
    pub fn hue(self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }
        // Checking blue before green matches the channel priority used by
        // the common HSV derivation when two channels tie for the maximum.
        let sector = if max == self.b {
            4.0 + (self.r - self.g) / delta
        } else if max == self.g {
            2.0 + (self.b - self.r) / delta
        } else {
            (self.g - self.b) / delta
        };
        (sector / 6.0).rem_euclid(1.0)
    }

    /// Perceived lightness per the Rec. 601 luma weights,
    /// `sqrt(0.299 r^2 + 0.587 g^2 + 0.114 b^2)`.
    pub fn luma(self) -> f32 {
        (0.299 * self.r * self.r + 0.587 * self.g * self.g + 0.114 * self.b * self.b).sqrt()
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports `#RRGGBB` and the `#RGB` shorthand, with or without the
    /// hash. Parsing is case-insensitive and trims surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::color::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test hex parsing with standard 6-digit format.
    #[test]
    fn test_hex_parsing_6digit() {
        let white: Srgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white.r, 1.0);
        assert_eq!(white.g, 1.0);
        assert_eq!(white.b, 1.0);

        let black: Srgb = "#000000".parse().unwrap();
        assert_eq!(black.r, 0.0);
        assert_eq!(black.g, 0.0);
        assert_eq!(black.b, 0.0);

        // No hash
        let red: Srgb = "FF0000".parse().unwrap();
        assert_eq!(red.r, 1.0);
        assert_eq!(red.g, 0.0);
        assert_eq!(red.b, 0.0);
    }

    /// Test hex parsing with 3-digit shorthand format.
    #[test]
    fn test_hex_parsing_shorthand() {
        let white: Srgb = "#FFF".parse().unwrap();
        assert_eq!(white.r, 1.0);
        assert_eq!(white.g, 1.0);
        assert_eq!(white.b, 1.0);

        // #ABC -> expanded to #AABBCC
        let color: Srgb = "#ABC".parse().unwrap();
        assert_eq!(color, Srgb::from_u8(0xAA, 0xBB, 0xCC));
    }

    /// Test hex parsing error cases.
    #[test]
    fn test_hex_parsing_errors() {
        let result = "#GGG".parse::<Srgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidHex(_))));

        let result = "#FFFF".parse::<Srgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));

        let result = "".parse::<Srgb>();
        assert!(matches!(result, Err(ParseColorError::InvalidLength)));
    }

    /// Test hex parsing handles whitespace and case.
    #[test]
    fn test_hex_parsing_lenient_input() {
        let white: Srgb = "  #ffffff  ".parse().unwrap();
        assert_eq!(white.r, 1.0);

        let upper: Srgb = "#ABCDEF".parse().unwrap();
        let lower: Srgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    /// Float-defined and hex-parsed colors must compare exactly equal for
    /// the same value, otherwise synonym merging falls apart.
    #[test]
    fn test_float_and_u8_representations_agree() {
        assert_eq!(Srgb::new(0.0, 0.0, 1.0), "#0000FF".parse().unwrap());
        assert_eq!(Srgb::new(1.0, 1.0, 1.0), "#ffffff".parse().unwrap());
        // Half intensity does not: 0.5 != 128/255
        assert_ne!(Srgb::new(0.0, 0.5, 0.0), Srgb::from_u8(0, 128, 0));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Srgb::from_u8(31, 119, 180).to_hex(), "#1f77b4");
        assert_eq!(Srgb::new(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Srgb::new(0.0, 0.0, 0.0).to_hex(), "#000000");

        let parsed: Srgb = "#8c564b".parse().unwrap();
        assert_eq!(parsed.to_hex(), "#8c564b");
    }

    /// Test hue at the six primary/secondary corners of the hue circle.
    #[test]
    fn test_hue_corners() {
        let hue = |r, g, b| Srgb::new(r, g, b).hue();

        assert!((hue(1.0, 0.0, 0.0) - 0.0).abs() < 1e-6); // red
        assert!((hue(1.0, 1.0, 0.0) - 1.0 / 6.0).abs() < 1e-6); // yellow
        assert!((hue(0.0, 1.0, 0.0) - 2.0 / 6.0).abs() < 1e-6); // green
        assert!((hue(0.0, 1.0, 1.0) - 3.0 / 6.0).abs() < 1e-6); // cyan
        assert!((hue(0.0, 0.0, 1.0) - 4.0 / 6.0).abs() < 1e-6); // blue
        assert!((hue(1.0, 0.0, 1.0) - 5.0 / 6.0).abs() < 1e-6); // magenta
    }

    /// Hues on the magenta-to-red side must wrap into 0.0..1.0 instead of
    /// going negative.
    #[test]
    fn test_hue_wraps_below_red() {
        let rose = Srgb::new(1.0, 0.0, 0.5);
        let h = rose.hue();
        assert!((h - 11.0 / 12.0).abs() < 1e-6, "got {h}");
        assert!((0.0..1.0).contains(&h));
    }

    #[test]
    fn test_achromatic() {
        assert!(Srgb::new(0.0, 0.0, 0.0).is_achromatic());
        assert!(Srgb::new(1.0, 1.0, 1.0).is_achromatic());
        assert!(Srgb::new(0.5, 0.5, 0.5).is_achromatic());
        assert!(!Srgb::new(0.5, 0.5, 0.50001).is_achromatic());
        assert_eq!(Srgb::new(0.5, 0.5, 0.5).hue(), 0.0);
    }

    /// Test luma against hand-computed values.
    #[test]
    fn test_luma() {
        assert!((Srgb::new(0.0, 0.0, 0.0).luma() - 0.0).abs() < 1e-6);
        assert!((Srgb::new(1.0, 1.0, 1.0).luma() - 1.0).abs() < 1e-6);
        // Pure red: sqrt(0.299) = 0.54680...
        assert!((Srgb::new(1.0, 0.0, 0.0).luma() - 0.5468089).abs() < 1e-4);
        // Pure green is the brightest primary: sqrt(0.587) = 0.76615...
        assert!((Srgb::new(0.0, 1.0, 0.0).luma() - 0.7661593).abs() < 1e-4);
        // Pure blue is the darkest: sqrt(0.114) = 0.33763...
        assert!((Srgb::new(0.0, 0.0, 1.0).luma() - 0.3376389).abs() < 1e-4);
    }
}
