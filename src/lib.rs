//! # imgreport
//!
//! Static image-report PDF generation for Rust.
//!
//! This library arranges screenshot images onto PDF pages with captions,
//! in one of two layouts: a single-image-per-page report, or a 2-column
//! grid report with a title header and page-number footers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use imgreport::generate_from_file;
//!
//! fn main() -> imgreport::Result<()> {
//!     // Build the report described by a config file
//!     let (output, summary) = generate_from_file("demos/bus_report.toml")?;
//!     println!("{}: {} pages, {} skipped",
//!         output.display(), summary.pages, summary.skipped.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two layouts**: full-width single image per page, or 2-column grid
//! - **External configuration**: JSON or TOML report descriptions
//! - **Graceful skips**: a missing image never aborts a report
//! - **Page chrome**: pluggable header/footer decoration strategies
//! - **Engine seam**: composition is written against a trait, not a PDF
//!   library

pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use compose::{
    ComposeSummary, GridComposer, NoDecoration, PageDecorator, ReportChrome, SingleImageComposer,
};
pub use config::{GridPage, GridReportConfig, ReportConfig, SingleReportConfig};
pub use engine::{DocumentEngine, FontStyle, PdfEngine};
pub use error::{Error, Result};
pub use model::{Entry, GridEntry, GridLayout, GridPosition, PageSize, SingleLayout};

use log::info;
use std::path::{Path, PathBuf};

/// Generate the report described by `config`, writing the document to
/// the config's output path.
pub fn generate(config: &ReportConfig) -> Result<ComposeSummary> {
    generate_to(config, config.output())
}

/// Generate the report described by `config` into `output`, ignoring
/// the config's own output path.
pub fn generate_to<P: AsRef<Path>>(config: &ReportConfig, output: P) -> Result<ComposeSummary> {
    let output = output.as_ref();
    let mut engine = PdfEngine::new(&config.title())?;
    let summary = compose_into(config, &mut engine)?;
    engine.save(output)?;
    info!("Done! Created: {}", output.display());
    Ok(summary)
}

/// Load a config file and generate its report. Returns the output path
/// together with the composition summary.
pub fn generate_from_file<P: AsRef<Path>>(config_path: P) -> Result<(PathBuf, ComposeSummary)> {
    let config = ReportConfig::from_file(config_path)?;
    let output = config.output().to_path_buf();
    let summary = generate(&config)?;
    Ok((output, summary))
}

/// Compose `config` into an already-constructed engine without
/// finalizing it. Useful for tests and for callers that manage the
/// engine themselves.
pub fn compose_into<E: DocumentEngine>(
    config: &ReportConfig,
    engine: &mut E,
) -> Result<ComposeSummary> {
    match config {
        ReportConfig::Single(c) => SingleImageComposer::new()
            .with_layout(c.geometry)
            .compose(engine, &c.entries),
        ReportConfig::Grid(c) => {
            let composer = GridComposer::new(c.images.clone(), c.title.clone())
                .with_layout(c.geometry);
            let pages: Vec<Vec<GridEntry>> =
                c.pages.iter().map(|p| p.entries.clone()).collect();
            composer.compose(engine, &pages)
        }
    }
}
