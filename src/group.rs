//! Synonym grouping and label joining.
//!
//! After sorting, names that map to the exact same color value sit next to
//! each other; this module folds each run into one chart row with a merged
//! label. Matching is exact equality on the channel floats, so a color one
//! bit off its neighbor stays a separate row.

use crate::color::Srgb;
use crate::palette::ColorEntry;

/// One chart row: a distinct color and the merged label of its synonyms.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedEntry {
    pub color: Srgb,
    pub label: String,
}

/// Merge consecutive runs of entries sharing one color value.
pub fn group_synonyms(entries: &[ColorEntry]) -> Vec<GroupedEntry> {
    let mut groups: Vec<GroupedEntry> = Vec::new();
    let mut names: Vec<&str> = Vec::new();
    let mut current: Option<Srgb> = None;
    for entry in entries {
        if current != Some(entry.color) {
            if let Some(color) = current {
                groups.push(GroupedEntry {
                    color,
                    label: join_names(&names),
                });
            }
            current = Some(entry.color);
            names.clear();
        }
        names.push(&entry.name);
    }
    if let Some(color) = current {
        groups.push(GroupedEntry {
            color,
            label: join_names(&names),
        });
    }
    groups
}

/// Join synonym names with commas. The `grey` spellings drop out and their
/// `gray` twins become a `gr[ae]y` pattern; a parenthesized cycle alias
/// attaches to the preceding name without a comma.
pub fn join_names(names: &[&str]) -> String {
    let joined = names
        .iter()
        .filter(|name| !name.contains("grey"))
        .map(|name| name.replace("gray", "gr[ae]y"))
        .collect::<Vec<_>>()
        .join(", ");
    joined.replace(", (", " (")
}
