//! Document engine abstraction layer.
//!
//! Provides a trait-based interface for page operations, isolating the
//! concrete PDF library (printpdf) from the composition logic. All
//! coordinates are millimeters from the top-left of the page.

mod pdf;
mod text;

pub use pdf::PdfEngine;
pub use text::{text_width_mm, wrap_text};

use crate::error::Result;
use crate::model::PageSize;
use std::path::Path;

/// Font face selection for text drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Regular weight.
    Regular,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
}

/// Abstract interface for building a paged document.
///
/// Implementations add pages, place images and text, and report page
/// geometry — without exposing any concrete PDF library types. The
/// composers drive this trait; tests substitute a recording mock.
pub trait DocumentEngine {
    /// Page dimensions in mm.
    fn page_size(&self) -> PageSize;

    /// Append a blank page and return its 1-indexed page number.
    fn add_page(&mut self) -> Result<u32>;

    /// Number of pages added so far.
    fn page_count(&self) -> u32;

    /// Draw an image on the current page with its top-left corner at
    /// `(x, y)` mm, scaled to `width` mm with aspect ratio preserved.
    /// Returns the drawn height in mm.
    fn draw_image(&mut self, path: &Path, x: f32, y: f32, width: f32) -> Result<f32>;

    /// Draw a single line of text with its baseline at `(x, y)` mm.
    fn draw_text(&mut self, text: &str, style: FontStyle, size: f32, x: f32, y: f32) -> Result<()>;

    /// Draw a single line centered across the full page width, baseline
    /// at `y` mm.
    fn draw_text_centered(&mut self, text: &str, style: FontStyle, size: f32, y: f32) -> Result<()> {
        let x = (self.page_size().width - text_width_mm(text, size)) / 2.0;
        self.draw_text(text, style, size, x.max(0.0), y)
    }

    /// Draw `text` wrapped to `width` mm, each line centered within the
    /// column starting at `x`, first baseline at `y`, advancing by
    /// `line_height` mm per line.
    fn draw_text_block(
        &mut self,
        text: &str,
        style: FontStyle,
        size: f32,
        x: f32,
        y: f32,
        width: f32,
        line_height: f32,
    ) -> Result<()> {
        let mut line_y = y;
        for line in wrap_text(text, width, size) {
            let line_x = x + (width - text_width_mm(&line, size)) / 2.0;
            self.draw_text(&line, style, size, line_x.max(x), line_y)?;
            line_y += line_height;
        }
        Ok(())
    }
}
