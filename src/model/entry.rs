//! Report entries: one image reference plus one caption.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One (image path, caption) pair for the single-image report.
///
/// Constructed from configuration at startup, consumed once during
/// composition, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Path to the image file, relative to the working directory.
    pub image: PathBuf,

    /// Caption rendered beneath the image.
    pub caption: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(image: impl Into<PathBuf>, caption: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
        }
    }

    /// File name of the image, for diagnostics.
    pub fn file_name(&self) -> String {
        self.image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.image.display().to_string())
    }
}

/// One (image key, caption) pair for the grid report.
///
/// The key is resolved against the report's image table; a key with no
/// mapping skips the image but keeps the caption (see the grid
/// composer's skip policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridEntry {
    /// Lookup key into the report's image table.
    pub key: String,

    /// Caption rendered beneath the image slot.
    pub caption: String,
}

impl GridEntry {
    /// Create a new grid entry.
    pub fn new(key: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            caption: caption.into(),
        }
    }
}
