//! Hue-band ordering of named colors.
//!
//! Colors sort by a two-part key: HSV hue quantized into a small number of
//! bands, then perceived lightness within the band. Achromatic colors take
//! a sentinel band below every hue band so the greys lead the chart,
//! brightest first. Odd bands negate the lightness direction, which makes
//! the lightness ramp reverse from one band to the next.

use std::cmp::Ordering;

use crate::color::Srgb;
use crate::palette::ColorEntry;

/// Sort key for one color: hue band, then lightness within the band.
#[derive(Debug, Clone, Copy)]
pub struct SortKey {
    pub band: i32,
    pub lightness: f32,
}

impl SortKey {
    /// Band reserved for achromatic colors, below every quantized hue band.
    pub const ACHROMATIC_BAND: i32 = -1;

    /// Compute the key for one color.
    ///
    /// Achromatic colors key on negated channel value so brighter greys
    /// sort first. Chromatic colors land in `int(hue * nsteps)` and rank
    /// by luma inside the band, with odd bands inverted.
    pub fn of(color: Srgb, nsteps: u32) -> Self {
        if color.is_achromatic() {
            return Self {
                band: Self::ACHROMATIC_BAND,
                lightness: -color.r,
            };
        }
        let band = (color.hue() * nsteps as f32) as i32;
        let mut lightness = color.luma();
        if band % 2 == 1 {
            lightness = nsteps as f32 - lightness;
        }
        Self { band, lightness }
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.band
            .cmp(&other.band)
            .then_with(|| self.lightness.total_cmp(&other.lightness))
    }
}

/// Stable-sort entries by their keys; equal keys keep palette order.
pub fn sort_colors(entries: &mut [ColorEntry], nsteps: u32) {
    entries.sort_by_key(|entry| SortKey::of(entry.color, nsteps));
}
