//! Page composers: turn entry lists into document pages.

mod decor;
mod grid;
mod single;

pub use decor::{NoDecoration, PageDecorator, ReportChrome};
pub use grid::GridComposer;
pub use single::SingleImageComposer;

/// Outcome of one composition run.
///
/// Skips are recoverable by design: composition never aborts because an
/// image is missing, it records the miss here and moves on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeSummary {
    /// Pages added to the document.
    pub pages: u32,
    /// Images actually placed.
    pub placed: u32,
    /// File names (single) or keys (grid) that had no image.
    pub skipped: Vec<String>,
}

impl ComposeSummary {
    /// Whether every entry's image was placed.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
