//! Concrete [`DocumentEngine`] backed by printpdf.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex,
};

use super::{DocumentEngine, FontStyle};
use crate::error::{Error, Result};
use crate::model::PageSize;

/// Images are embedded at this resolution; together with the scale
/// factor it fixes the physical size on the page.
const IMAGE_DPI: f32 = 300.0;

/// PDF document engine over printpdf.
///
/// A4 portrait by default, Helvetica builtin faces, coordinates in mm
/// from the top-left (converted to PDF's bottom-up space internally).
/// The document is finalized exactly once by [`PdfEngine::save`], which
/// consumes the engine.
pub struct PdfEngine {
    doc: PdfDocumentReference,
    page_size: PageSize,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    // printpdf creates the first page up front; hand it out on the
    // first add_page call instead of appending a new one.
    first_page: (PdfPageIndex, PdfLayerIndex),
    current: Option<PdfLayerReference>,
    pages: u32,
}

impl PdfEngine {
    /// Create an A4 portrait document titled `title`.
    pub fn new(title: &str) -> Result<Self> {
        Self::with_page_size(title, PageSize::A4)
    }

    /// Create a document with an explicit page size.
    pub fn with_page_size(title: &str, page_size: PageSize) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(page_size.width),
            Mm(page_size.height),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Engine(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::Engine(e.to_string()))?;
        let italic = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| Error::Engine(e.to_string()))?;
        Ok(Self {
            doc,
            page_size,
            regular,
            bold,
            italic,
            first_page: (page, layer),
            current: None,
            pages: 0,
        })
    }

    /// Write the finished document to `path`, consuming the engine.
    ///
    /// Refuses to write when no page was ever added: printpdf
    /// pre-creates page 1, and saving it would produce a blank page the
    /// composition summary knows nothing about.
    ///
    /// A failure here is terminal: no cleanup of a partial file is
    /// attempted.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        if self.pages == 0 {
            return Err(Error::EmptyReport);
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| Error::Engine(e.to_string()))?;
        Ok(())
    }

    fn font(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }

    fn current_layer(&self) -> Result<&PdfLayerReference> {
        self.current
            .as_ref()
            .ok_or_else(|| Error::Engine("no page added yet".to_string()))
    }

    fn load_image(&self, path: &Path) -> Result<Image> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let mut reader = BufReader::new(File::open(path)?);
        match ext.as_str() {
            "png" => {
                let decoder = PngDecoder::new(&mut reader).map_err(|e| Error::ImageDecode {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Image::try_from(decoder).map_err(|e| Error::ImageDecode {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
            "jpg" | "jpeg" => {
                let decoder = JpegDecoder::new(&mut reader).map_err(|e| Error::ImageDecode {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Image::try_from(decoder).map_err(|e| Error::ImageDecode {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
            other => Err(Error::ImageDecode {
                path: path.to_path_buf(),
                message: format!("unsupported image format: {:?}", other),
            }),
        }
    }
}

impl DocumentEngine for PdfEngine {
    fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn add_page(&mut self) -> Result<u32> {
        let (page, layer) = if self.pages == 0 {
            self.first_page
        } else {
            self.doc.add_page(
                Mm(self.page_size.width),
                Mm(self.page_size.height),
                "Layer 1",
            )
        };
        self.current = Some(self.doc.get_page(page).get_layer(layer));
        self.pages += 1;
        Ok(self.pages)
    }

    fn page_count(&self) -> u32 {
        self.pages
    }

    fn draw_image(&mut self, path: &Path, x: f32, y: f32, width: f32) -> Result<f32> {
        let image = self.load_image(path)?;
        let native_w = Mm::from(image.image.width.into_pt(IMAGE_DPI)).0;
        let native_h = Mm::from(image.image.height.into_pt(IMAGE_DPI)).0;
        if native_w <= 0.0 {
            return Err(Error::ImageDecode {
                path: path.to_path_buf(),
                message: "image has zero width".to_string(),
            });
        }
        let scale = width / native_w;
        let drawn_h = native_h * scale;

        // Top-left mm to PDF's bottom-left origin.
        let translate_y = self.page_size.height - y - drawn_h;
        let layer = self.current_layer()?.clone();
        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(translate_y)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
        Ok(drawn_h)
    }

    fn draw_text(&mut self, text: &str, style: FontStyle, size: f32, x: f32, y: f32) -> Result<()> {
        let baseline = Mm(self.page_size.height - y);
        let font = self.font(style).clone();
        let layer = self.current_layer()?;
        layer.use_text(text, size, Mm(x), baseline, &font);
        Ok(())
    }
}
