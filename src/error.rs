use thiserror::Error;

use crate::color::ParseColorError;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("No colors to chart")]
    EmptyPalette,

    #[error("Invalid color {name:?}: {source}")]
    ParseColor {
        name: String,
        source: ParseColorError,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
