use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ChartError;
use crate::group::GroupedEntry;
use crate::layout::GridLayout;
use crate::models::ChartSpec;

const CHART_TEMPLATE: &str = include_str!("../../templates/chart.svg");
const TEMPLATE_NAME: &str = "chart.svg";

/// Footnote explaining the cycle alias entries.
const CYCLE_CAPTION: &str =
    "⁺) C… represent the default color cycler values which can be re-assigned";

// Coordinates go into the template as rounded f64 values; tera holds
// numbers as f64 and would otherwise print raw f32 conversions with a
// dozen junk digits.
#[derive(Debug, Serialize)]
struct ChartContext {
    width: u32,
    height: u32,
    label_font: f64,
    caption_font: f64,
    caption: &'static str,
    caption_x: f64,
    caption_y: f64,
    rows: Vec<ChartRow>,
}

#[derive(Debug, Serialize)]
struct ChartRow {
    label: String,
    color: String,
    line_x1: f64,
    line_x2: f64,
    line_y: f64,
    stroke_width: f64,
    text_x: f64,
    text_y: f64,
}

/// Compose the chart document for the sorted, grouped entries.
pub fn render_chart(spec: &ChartSpec, entries: &[GroupedEntry]) -> Result<String, ChartError> {
    let layout = GridLayout::new(spec, entries.len());
    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let cell = layout.cell(i);
            ChartRow {
                label: xml_escape(&entry.label),
                color: entry.color.to_hex(),
                line_x1: round2(cell.line_x1),
                line_x2: round2(cell.line_x2),
                line_y: round2(cell.line_y),
                stroke_width: round2(cell.stroke_width),
                text_x: round2(cell.text_x),
                text_y: round2(cell.text_y),
            }
        })
        .collect();

    let context = ChartContext {
        width: spec.width,
        height: spec.height,
        label_font: round2(spec.label_font_px),
        caption_font: round2(spec.caption_font_px),
        caption: CYCLE_CAPTION,
        caption_x: round2(spec.width as f32 / 2.0),
        caption_y: round2(spec.height as f32 * 0.98),
        rows,
    };

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, CHART_TEMPLATE)?;
    let svg = tera.render(TEMPLATE_NAME, &Context::from_serialize(&context)?)?;
    Ok(svg)
}

/// Simple XML escape for label text.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Round to two decimals so coordinates stay short in the output.
fn round2(v: f32) -> f64 {
    (f64::from(v) * 100.0).round() / 100.0
}
