//! Column-major grid placement on the fixed canvas.
//!
//! Entries fill the first column top to bottom, then the next. All
//! coordinates are SVG pixels with the origin at the top left, y growing
//! downward.

use crate::models::ChartSpec;

/// Placement of one chart row: the swatch line plus the label anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCell {
    pub row: usize,
    pub column: usize,
    pub line_x1: f32,
    pub line_x2: f32,
    pub line_y: f32,
    pub stroke_width: f32,
    pub text_x: f32,
    pub text_y: f32,
}

/// Grid geometry derived from the canvas and the entry count.
///
/// The row height uses `count / columns + 1` grid rows plus one spare, so
/// charts whose count is just short of a full grid keep the same vertical
/// rhythm as full ones. Column assignment uses `ceil(count / columns)` rows
/// per column, which agrees with the row height on full grids and never
/// spills an entry past the last column on partial ones.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    rows_per_column: usize,
    row_height: f32,
    column_width: f32,
}

impl GridLayout {
    pub fn new(spec: &ChartSpec, entry_count: usize) -> Self {
        let nrows = entry_count / spec.columns + 1;
        Self {
            rows_per_column: entry_count.div_ceil(spec.columns).max(1),
            row_height: spec.height as f32 / (nrows + 1) as f32,
            column_width: spec.width as f32 / spec.columns as f32,
        }
    }

    pub fn rows_per_column(&self) -> usize {
        self.rows_per_column
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Cell for the entry at `index` in the sorted, grouped sequence.
    ///
    /// `index` must be below the entry count the layout was built for.
    pub fn cell(&self, index: usize) -> LayoutCell {
        let column = index / self.rows_per_column;
        let row = index % self.rows_per_column;
        let col = column as f32;
        let y = (row as f32 + 1.0) * self.row_height;
        LayoutCell {
            row,
            column,
            line_x1: self.column_width * (col + 0.05),
            line_x2: self.column_width * (col + 0.25),
            line_y: y - self.row_height * 0.1,
            stroke_width: self.row_height * 0.6,
            text_x: self.column_width * (col + 0.3),
            text_y: y,
        }
    }
}
