//! Single-letter base colors.

use super::{ColorEntry, PaletteSource};
use crate::color::Srgb;

/// The eight single-letter colors of the plotting tradition, as float
/// triples. `b`, `r`, `k` and `w` land on the same values as their CSS
/// namesakes; `g`, `c`, `m` and `y` are the darker half-intensity mixes.
pub const BASE_COLORS: [(&str, [f32; 3]); 8] = [
    ("b", [0.0, 0.0, 1.0]),
    ("g", [0.0, 0.5, 0.0]),
    ("r", [1.0, 0.0, 0.0]),
    ("c", [0.0, 0.75, 0.75]),
    ("m", [0.75, 0.0, 0.75]),
    ("y", [0.75, 0.75, 0.0]),
    ("k", [0.0, 0.0, 0.0]),
    ("w", [1.0, 1.0, 1.0]),
];

pub fn source() -> PaletteSource {
    PaletteSource {
        name: "base",
        entries: BASE_COLORS
            .iter()
            .map(|(name, [r, g, b])| ColorEntry {
                name: (*name).to_string(),
                color: Srgb::new(*r, *g, *b),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_letters_match_css_values_where_named_alike() {
        let entries = source().entries;
        let get = |letter: &str| {
            entries
                .iter()
                .find(|e| e.name == letter)
                .map(|e| e.color)
                .unwrap()
        };
        assert_eq!(get("b"), "#0000ff".parse().unwrap());
        assert_eq!(get("r"), "#ff0000".parse().unwrap());
        assert_eq!(get("k"), "#000000".parse().unwrap());
        assert_eq!(get("w"), "#ffffff".parse().unwrap());
        // "g" is the notable exception: half green, not CSS green #008000
        assert_ne!(get("g"), "#008000".parse().unwrap());
    }
}
