//! Page geometry for the two report layouts.
//!
//! All coordinates are millimeters with the origin at the top-left of
//! the page, matching the layout constants the reports were designed
//! with. The document engine converts to PDF coordinates internally.

use serde::{Deserialize, Serialize};

/// Page dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width in mm.
    pub width: f32,
    /// Page height in mm.
    pub height: f32,
}

impl PageSize {
    /// A4 portrait, 210 x 297 mm.
    pub const A4: PageSize = PageSize {
        width: 210.0,
        height: 297.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Geometry for the one-image-per-page layout.
///
/// Defaults reproduce the report design: a 10 mm horizontal inset, the
/// image top at 30 mm scaled to 190 mm wide, and the caption centered
/// across the page at 150 mm in 14 pt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleLayout {
    /// Horizontal inset of the image from the left edge, mm.
    pub margin_x: f32,
    /// Distance from the page top to the image top, mm.
    pub image_top: f32,
    /// Width the image is scaled to (aspect preserved), mm.
    pub image_width: f32,
    /// Distance from the page top to the caption baseline, mm.
    pub caption_y: f32,
    /// Caption font size, pt.
    pub caption_size: f32,
}

impl Default for SingleLayout {
    fn default() -> Self {
        Self {
            margin_x: 10.0,
            image_top: 30.0,
            image_width: 190.0,
            caption_y: 150.0,
            caption_size: 14.0,
        }
    }
}

/// A derived slot position within a grid page, mm from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPosition {
    /// Horizontal offset of the slot's left edge.
    pub x: f32,
    /// Vertical offset of the slot's top edge.
    pub y: f32,
    /// Zero-based column index.
    pub column: usize,
    /// Zero-based row index.
    pub row: usize,
}

/// Geometry for the 2-column grid layout.
///
/// Entries are placed row-major: entry `i` lands in column `i % columns`
/// and row `i / columns`. Defaults reproduce the report design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Left edge of column 0, mm.
    pub x_start: f32,
    /// Top edge of row 0, mm.
    pub y_start: f32,
    /// Width each image is scaled to, mm.
    pub image_width: f32,
    /// Nominal slot height used for row spacing, mm.
    pub image_height: f32,
    /// Horizontal gap between columns, mm.
    pub h_gap: f32,
    /// Vertical gap between rows, mm.
    pub v_gap: f32,
    /// Number of columns.
    pub columns: usize,
    /// Caption font size, pt.
    pub caption_size: f32,
    /// Line height of wrapped caption text, mm.
    pub caption_line_height: f32,
    /// Gap between the slot bottom and the caption block, mm.
    pub caption_offset: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            x_start: 10.0,
            y_start: 30.0,
            image_width: 90.0,
            image_height: 50.0,
            h_gap: 5.0,
            v_gap: 20.0,
            columns: 2,
            caption_size: 10.0,
            caption_line_height: 5.0,
            caption_offset: 2.0,
        }
    }
}

impl GridLayout {
    /// Compute the slot position for the entry at `index`.
    ///
    /// Deterministic: `x = x_start + col * (image_width + h_gap)`,
    /// `y = y_start + row * (image_height + v_gap)`.
    pub fn slot(&self, index: usize) -> GridPosition {
        let column = index % self.columns;
        let row = index / self.columns;
        GridPosition {
            x: self.x_start + column as f32 * (self.image_width + self.h_gap),
            y: self.y_start + row as f32 * (self.image_height + self.v_gap),
            column,
            row,
        }
    }

    /// Vertical position of the caption block for the slot at `index`.
    pub fn caption_y(&self, index: usize) -> f32 {
        self.slot(index).y + self.image_height + self.caption_offset
    }

    /// Number of rows a page with `len` entries occupies.
    pub fn rows_for(&self, len: usize) -> usize {
        len.div_ceil(self.columns)
    }

    /// Largest entry count whose last row still fits above `max_y` mm.
    pub fn capacity(&self, max_y: f32) -> usize {
        let row_pitch = self.image_height + self.v_gap;
        if row_pitch <= 0.0 {
            return 0;
        }
        let usable = max_y - self.y_start - self.image_height;
        if usable < 0.0 {
            return 0;
        }
        let rows = (usable / row_pitch) as usize + 1;
        rows * self.columns
    }
}
