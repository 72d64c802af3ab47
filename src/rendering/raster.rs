use std::io::Cursor;
use std::sync::Arc;

use resvg::usvg::{self, Transform};
use tiny_skia::Pixmap;

use crate::error::RenderError;
use crate::models::ChartSpec;

/// Parses and rasterizes chart SVG documents.
pub struct SvgRasterizer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRasterizer {
    /// Create a rasterizer backed by the system font collection.
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        tracing::debug!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Parse the document, confirming it is well-formed SVG.
    pub fn validate(&self, svg_data: &[u8]) -> Result<(), RenderError> {
        self.parse(svg_data).map(|_| ())
    }

    fn parse(&self, svg_data: &[u8]) -> Result<usvg::Tree, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        usvg::Tree::from_data(svg_data, &options).map_err(|e| RenderError::SvgParse(e.to_string()))
    }

    /// Parse and rasterize to an RGBA pixmap at the chart's canvas size,
    /// scaled to fit and centered on a white background.
    pub fn rasterize(&self, svg_data: &[u8], spec: &ChartSpec) -> Result<Pixmap, RenderError> {
        let tree = self.parse(svg_data)?;

        let svg_size = tree.size();
        let scale_x = spec.width as f32 / svg_size.width();
        let scale_y = spec.height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let scaled_width = svg_size.width() * scale;
        let scaled_height = svg_size.height() * scale;
        let offset_x = (spec.width as f32 - scaled_width) / 2.0;
        let offset_y = (spec.height as f32 - scaled_height) / 2.0;

        let mut pixmap =
            Pixmap::new(spec.width, spec.height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }

    /// Rasterize and encode an RGBA PNG preview of the chart.
    pub fn render_png(&self, svg_data: &[u8], spec: &ChartSpec) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize(svg_data, spec)?;
        encode_png(spec.width, spec.height, pixmap.data())
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode RGBA pixel data as an 8-bit PNG.
fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
