//! Page decoration strategies.
//!
//! The header/footer chrome is an explicit strategy supplied to the
//! composer and invoked on every page addition, rather than an implicit
//! hook inside the document engine.

use crate::engine::{DocumentEngine, FontStyle};
use crate::error::Result;

/// Header title baseline, mm from the page top.
const HEADER_Y: f32 = 15.0;
/// Footer baseline, mm from the page top (15 mm above the A4 bottom).
const FOOTER_Y: f32 = 282.0;
/// Header title size, pt.
const HEADER_SIZE: f32 = 15.0;
/// Footer size, pt.
const FOOTER_SIZE: f32 = 8.0;

/// Decorates each page of a report as it is added.
pub trait PageDecorator {
    /// Draw the decoration for page `page_no` (1-indexed).
    fn decorate(&self, doc: &mut dyn DocumentEngine, page_no: u32) -> Result<()>;
}

/// Leaves pages undecorated. Used by the single-image report, which
/// suppresses headers and footers entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDecoration;

impl PageDecorator for NoDecoration {
    fn decorate(&self, _doc: &mut dyn DocumentEngine, _page_no: u32) -> Result<()> {
        Ok(())
    }
}

/// Bold centered title header plus an italic `Page {n}` footer, applied
/// uniformly to every page.
#[derive(Debug, Clone)]
pub struct ReportChrome {
    title: String,
}

impl ReportChrome {
    /// Create chrome with the given header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// The header title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl PageDecorator for ReportChrome {
    fn decorate(&self, doc: &mut dyn DocumentEngine, page_no: u32) -> Result<()> {
        doc.draw_text_centered(&self.title, FontStyle::Bold, HEADER_SIZE, HEADER_Y)?;
        doc.draw_text_centered(
            &format!("Page {}", page_no),
            FontStyle::Italic,
            FOOTER_SIZE,
            FOOTER_Y,
        )
    }
}
