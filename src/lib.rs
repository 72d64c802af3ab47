//! Swatchbook - a reference chart of named colors
//!
//! Aggregates the named-color tables, sorts them by hue band and
//! lightness, merges synonym names sharing an RGB value and renders the
//! result as a single SVG chart.
//! This library exposes modules for integration testing.

pub mod color;
pub mod error;
pub mod group;
pub mod layout;
pub mod models;
pub mod order;
pub mod palette;
pub mod pipeline;
pub mod rendering;
