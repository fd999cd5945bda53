//! Grid page composer: up to `columns * rows` entries per page in a
//! row-major 2-column arrangement.

use std::collections::HashMap;
use std::path::PathBuf;

use log::warn;

use super::{ComposeSummary, PageDecorator, ReportChrome};
use crate::engine::{DocumentEngine, FontStyle};
use crate::error::Result;
use crate::model::{GridEntry, GridLayout};

/// Composes grid pages: entry `i` lands at column `i % columns`, row
/// `i / columns`, with a wrapped centered caption beneath each slot.
///
/// Entries reference images by key through a lookup table. A key with no
/// mapping (or a mapped file that is missing on disk) skips the image
/// placement but still renders the caption at its computed position.
/// Note the asymmetry with the single-image composer, which drops the
/// whole page; each occurrence is flagged with a warning so it never
/// passes silently.
pub struct GridComposer {
    layout: GridLayout,
    images: HashMap<String, PathBuf>,
    decorator: Box<dyn PageDecorator>,
}

impl GridComposer {
    /// Composer over `images` with the default layout and the standard
    /// title/page-number chrome.
    pub fn new(images: HashMap<String, PathBuf>, title: impl Into<String>) -> Self {
        Self {
            layout: GridLayout::default(),
            images,
            decorator: Box::new(ReportChrome::new(title)),
        }
    }

    /// Override the grid geometry.
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the page decorator.
    pub fn with_decorator(mut self, decorator: Box<dyn PageDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    /// The grid geometry in use.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Add one page laid out from `entries`. One call adds exactly one
    /// page, decorated, regardless of skips.
    pub fn compose_page<E: DocumentEngine>(
        &self,
        doc: &mut E,
        entries: &[GridEntry],
    ) -> Result<ComposeSummary> {
        let mut summary = ComposeSummary::default();

        let page_no = doc.add_page()?;
        self.decorator.decorate(doc, page_no)?;
        summary.pages = 1;

        for (i, entry) in entries.iter().enumerate() {
            let pos = self.layout.slot(i);

            match self.images.get(&entry.key) {
                Some(path) if path.exists() => {
                    doc.draw_image(path, pos.x, pos.y, self.layout.image_width)?;
                    summary.placed += 1;
                }
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    warn!("Skipping {} (Not found in folder)", name);
                    warn!(
                        "grid slot {} on page {} keeps its caption without an image",
                        i, page_no
                    );
                    summary.skipped.push(entry.key.clone());
                }
                None => {
                    warn!(
                        "image key {:?} has no mapping; grid slot {} on page {} keeps its caption without an image",
                        entry.key, i, page_no
                    );
                    summary.skipped.push(entry.key.clone());
                }
            }

            // Caption is rendered whether or not the image was placed.
            doc.draw_text_block(
                &entry.caption,
                FontStyle::Regular,
                self.layout.caption_size,
                pos.x,
                self.layout.caption_y(i),
                self.layout.image_width,
                self.layout.caption_line_height,
            )?;
        }

        Ok(summary)
    }

    /// Compose a sequence of pages, accumulating one summary.
    pub fn compose<E: DocumentEngine>(
        &self,
        doc: &mut E,
        pages: &[Vec<GridEntry>],
    ) -> Result<ComposeSummary> {
        let mut total = ComposeSummary::default();
        for entries in pages {
            let summary = self.compose_page(doc, entries)?;
            total.pages += summary.pages;
            total.placed += summary.placed;
            total.skipped.extend(summary.skipped);
        }
        Ok(total)
    }
}
