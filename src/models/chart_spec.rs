/// Canvas geometry and text sizes for the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    pub width: u32,
    pub height: u32,
    pub columns: usize,
    pub hue_steps: u32,
    pub label_font_px: f32,
    pub caption_font_px: f32,
}

impl ChartSpec {
    /// The classic 4.5x6 inch figure at 100 dpi, three columns, four hue
    /// bands, 7pt text.
    pub const DEFAULT: Self = Self {
        width: 450,
        height: 600,
        columns: 3,
        hue_steps: 4,
        label_font_px: 9.7,
        caption_font_px: 9.7,
    };
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
