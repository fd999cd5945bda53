//! Single-image page composer: one page per entry.

use log::{debug, warn};

use super::{ComposeSummary, NoDecoration, PageDecorator};
use crate::engine::{DocumentEngine, FontStyle};
use crate::error::Result;
use crate::model::{Entry, SingleLayout};

/// Composes one page per entry: the image at a fixed inset scaled to a
/// fixed width, the caption centered across the page below it.
///
/// An entry whose image file does not exist produces no page at all —
/// just a skip diagnostic. Decoration defaults to none.
pub struct SingleImageComposer {
    layout: SingleLayout,
    decorator: Box<dyn PageDecorator>,
}

impl SingleImageComposer {
    /// Composer with the default layout and no page decoration.
    pub fn new() -> Self {
        Self {
            layout: SingleLayout::default(),
            decorator: Box::new(NoDecoration),
        }
    }

    /// Override the page layout.
    pub fn with_layout(mut self, layout: SingleLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the page decorator.
    pub fn with_decorator(mut self, decorator: Box<dyn PageDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    /// Compose `entries` into `doc`, one page per existing image, in
    /// input order.
    pub fn compose<E: DocumentEngine>(
        &self,
        doc: &mut E,
        entries: &[Entry],
    ) -> Result<ComposeSummary> {
        let mut summary = ComposeSummary::default();

        for entry in entries {
            if !entry.image.exists() {
                warn!("Skipping {} (Not found in folder)", entry.file_name());
                summary.skipped.push(entry.file_name());
                continue;
            }

            let page_no = doc.add_page()?;
            self.decorator.decorate(doc, page_no)?;
            summary.pages += 1;

            let drawn_h = doc.draw_image(
                &entry.image,
                self.layout.margin_x,
                self.layout.image_top,
                self.layout.image_width,
            )?;
            doc.draw_text_centered(
                &entry.caption,
                FontStyle::Regular,
                self.layout.caption_size,
                self.layout.caption_y,
            )?;
            summary.placed += 1;
            debug!(
                "page {}: {} ({}x{:.1} mm)",
                page_no,
                entry.file_name(),
                self.layout.image_width,
                drawn_h
            );
        }

        Ok(summary)
    }
}

impl Default for SingleImageComposer {
    fn default() -> Self {
        Self::new()
    }
}
