//! Error types for imgreport.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for imgreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a report.
///
/// Missing image files are deliberately *not* represented here: the
/// composers recover from them locally by skipping the entry and
/// emitting a diagnostic (see [`crate::compose::ComposeSummary`]).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading images or writing the output document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing or validating a report configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The config file extension is not a recognized format.
    #[error("Unsupported config format: {0} (expected .json or .toml)")]
    UnsupportedConfigFormat(String),

    /// Error decoding an image that exists on disk.
    #[error("Image decoding error for {path}: {message}")]
    ImageDecode {
        /// Path of the offending image file.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },

    /// Error reported by the underlying document engine.
    #[error("Document engine error: {0}")]
    Engine(String),

    /// The report produced no pages, so there is nothing to write.
    /// Happens when every entry's image was skipped.
    #[error("Report has no pages: every entry was skipped")]
    EmptyReport,

    /// A layout parameter combination that cannot produce a valid page.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}
