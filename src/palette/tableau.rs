//! The Tableau 10 categorical palette.

use super::{ColorEntry, PaletteSource};
use crate::error::ChartError;

pub const TABLEAU_COLORS: [(&str, &str); 10] = [
    ("tab:blue", "#1f77b4"),
    ("tab:orange", "#ff7f0e"),
    ("tab:green", "#2ca02c"),
    ("tab:red", "#d62728"),
    ("tab:purple", "#9467bd"),
    ("tab:brown", "#8c564b"),
    ("tab:pink", "#e377c2"),
    ("tab:gray", "#7f7f7f"),
    ("tab:olive", "#bcbd22"),
    ("tab:cyan", "#17becf"),
];

pub fn source() -> Result<PaletteSource, ChartError> {
    let entries = TABLEAU_COLORS
        .iter()
        .map(|(name, hex)| super::parse_entry((*name).to_string(), hex))
        .collect::<Result<Vec<ColorEntry>, _>>()?;
    Ok(PaletteSource {
        name: "tableau",
        entries,
    })
}
