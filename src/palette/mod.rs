//! Named-color tables and their aggregation into one ordered palette.

pub mod base;
pub mod css;
pub mod tableau;

use std::collections::HashMap;

use crate::color::Srgb;
use crate::error::ChartError;
use crate::models::CycleConfig;

/// A display name bound to its color value.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub name: String,
    pub color: Srgb,
}

/// One named table of colors, merged into the palette in source order.
#[derive(Debug, Clone)]
pub struct PaletteSource {
    pub name: &'static str,
    pub entries: Vec<ColorEntry>,
}

/// The default sources in merge order: base letters, CSS names, the
/// tableau palette, then the cycle aliases.
pub fn default_sources(cycle: &CycleConfig) -> Result<Vec<PaletteSource>, ChartError> {
    Ok(vec![
        base::source(),
        css::source()?,
        tableau::source()?,
        cycle_source(cycle)?,
    ])
}

/// Cycle aliases as `(C0⁺)`, `(C1⁺)`, ... entries.
fn cycle_source(cycle: &CycleConfig) -> Result<PaletteSource, ChartError> {
    let entries = cycle
        .entries()
        .map(|(name, hex)| parse_entry(name, hex))
        .collect::<Result<_, _>>()?;
    Ok(PaletteSource {
        name: "cycle",
        entries,
    })
}

fn parse_entry(name: String, hex: &str) -> Result<ColorEntry, ChartError> {
    match hex.parse::<Srgb>() {
        Ok(color) => Ok(ColorEntry { name, color }),
        Err(source) => Err(ChartError::ParseColor { name, source }),
    }
}

/// The merged name -> color mapping, in first-seen name order.
#[derive(Debug, Clone)]
pub struct NamedPalette {
    entries: Vec<ColorEntry>,
}

impl NamedPalette {
    /// Merge sources in order. A later source wins when it reuses a name,
    /// but the name keeps the position of its first appearance; new names
    /// append at the end.
    pub fn from_sources(sources: Vec<PaletteSource>) -> Result<Self, ChartError> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<ColorEntry> = Vec::new();
        for source in sources {
            tracing::debug!(
                source = source.name,
                entries = source.entries.len(),
                "Merging color source"
            );
            for entry in source.entries {
                match index.get(entry.name.as_str()) {
                    Some(&at) => entries[at].color = entry.color,
                    None => {
                        index.insert(entry.name.clone(), entries.len());
                        entries.push(entry);
                    }
                }
            }
        }
        if entries.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ColorEntry> {
        self.entries
    }
}
