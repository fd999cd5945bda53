//! Report configuration records.
//!
//! Reports are described by external configuration files (JSON or TOML)
//! rather than hard-coded entry lists: the file names the layout mode,
//! the output document, the entries, and optional geometry overrides.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Entry, GridEntry, GridLayout, PageSize, SingleLayout};

/// A complete report description, tagged by layout mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ReportConfig {
    /// One image per page, captions centered, no header/footer.
    Single(SingleReportConfig),
    /// 2-column grid pages with title header and page-number footer.
    Grid(GridReportConfig),
}

/// Configuration for the single-image report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleReportConfig {
    /// Output PDF path; overwritten if pre-existing.
    pub output: PathBuf,

    /// Document title metadata; defaults to the output file stem.
    #[serde(default)]
    pub title: Option<String>,

    /// Ordered (image, caption) entries, one page each.
    pub entries: Vec<Entry>,

    /// Page geometry; omitted fields keep their defaults.
    #[serde(default)]
    pub geometry: SingleLayout,
}

/// One grid page: the ordered entries laid out on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridPage {
    /// Entries in slot order.
    pub entries: Vec<GridEntry>,
}

/// Configuration for the grid report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridReportConfig {
    /// Output PDF path; overwritten if pre-existing.
    pub output: PathBuf,

    /// Header title, also used as document title metadata.
    pub title: String,

    /// Image table: entry keys resolve to file paths through it.
    pub images: HashMap<String, PathBuf>,

    /// Pages in order; each adds exactly one document page.
    pub pages: Vec<GridPage>,

    /// Grid geometry; omitted fields keep their defaults.
    #[serde(default)]
    pub geometry: GridLayout,
}

impl ReportConfig {
    /// Load a config from a file, dispatching on the extension
    /// (`.json` or `.toml`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let text = fs::read_to_string(path)?;
        let config = match ext.as_str() {
            "json" => Self::from_json(&text)?,
            "toml" => Self::from_toml(&text)?,
            other => return Err(Error::UnsupportedConfigFormat(other.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config string. Does not validate.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parse a TOML config string. Does not validate.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// The configured output path.
    pub fn output(&self) -> &Path {
        match self {
            ReportConfig::Single(c) => &c.output,
            ReportConfig::Grid(c) => &c.output,
        }
    }

    /// Document title metadata.
    pub fn title(&self) -> String {
        match self {
            ReportConfig::Single(c) => c.title.clone().unwrap_or_else(|| {
                c.output
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Image Report".to_string())
            }),
            ReportConfig::Grid(c) => c.title.clone(),
        }
    }

    /// Check structural soundness: non-empty entry lists, grid pages
    /// that fit on one page (no pagination is ever performed), sane
    /// geometry.
    pub fn validate(&self) -> Result<()> {
        match self {
            ReportConfig::Single(c) => {
                if c.entries.is_empty() {
                    return Err(Error::Config("report has no entries".to_string()));
                }
                if c.geometry.image_width <= 0.0 {
                    return Err(Error::InvalidLayout("image_width must be positive".to_string()));
                }
            }
            ReportConfig::Grid(c) => {
                if c.pages.is_empty() {
                    return Err(Error::Config("report has no pages".to_string()));
                }
                if c.geometry.columns == 0 {
                    return Err(Error::InvalidLayout("columns must be at least 1".to_string()));
                }
                if c.geometry.image_width <= 0.0 {
                    return Err(Error::InvalidLayout("image_width must be positive".to_string()));
                }
                let capacity = c.geometry.capacity(PageSize::A4.height);
                for (i, page) in c.pages.iter().enumerate() {
                    if page.entries.is_empty() {
                        return Err(Error::Config(format!("page {} has no entries", i + 1)));
                    }
                    if page.entries.len() > capacity {
                        return Err(Error::Config(format!(
                            "page {} has {} entries but the grid fits {}",
                            i + 1,
                            page.entries.len(),
                            capacity
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Image references that will be skipped at generation time:
    /// files that do not exist, and (grid) keys with no mapping.
    pub fn missing_images(&self) -> Vec<String> {
        let mut missing = Vec::new();
        match self {
            ReportConfig::Single(c) => {
                for entry in &c.entries {
                    if !entry.image.exists() {
                        missing.push(entry.image.display().to_string());
                    }
                }
            }
            ReportConfig::Grid(c) => {
                for page in &c.pages {
                    for entry in &page.entries {
                        match c.images.get(&entry.key) {
                            Some(path) if path.exists() => {}
                            Some(path) => missing.push(path.display().to_string()),
                            None => missing.push(format!("(unmapped key {:?})", entry.key)),
                        }
                    }
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_TOML: &str = r#"
layout = "single"
output = "Bus_Assignment_10_Images.pdf"

[[entries]]
image = "Screenshot (189).png"
caption = "Fig 1: Front View of the Bus"

[[entries]]
image = "Screenshot (203).png"
caption = "Fig 2: Rear View of the Bus"
"#;

    const GRID_TOML: &str = r#"
layout = "grid"
output = "Lighting_Assignment_Report.pdf"
title = "Assignment: Lighting Implementation"

[images]
"222" = "Screenshot (222).png"
"224" = "Screenshot (224).png"

[[pages]]
entries = [
    { key = "222", caption = "Fig 1: Directional Light (Sunlight effect)" },
    { key = "224", caption = "Fig 2: Point Lights (Warm/Local illumination)" },
]
"#;

    #[test]
    fn test_single_from_toml() {
        let config = ReportConfig::from_toml(SINGLE_TOML).unwrap();
        config.validate().unwrap();
        let ReportConfig::Single(single) = &config else {
            panic!("expected single layout");
        };
        assert_eq!(single.entries.len(), 2);
        assert_eq!(single.entries[0].caption, "Fig 1: Front View of the Bus");
        assert_eq!(
            config.output(),
            Path::new("Bus_Assignment_10_Images.pdf")
        );
        assert_eq!(config.title(), "Bus_Assignment_10_Images");
    }

    #[test]
    fn test_grid_from_toml() {
        let config = ReportConfig::from_toml(GRID_TOML).unwrap();
        config.validate().unwrap();
        let ReportConfig::Grid(grid) = &config else {
            panic!("expected grid layout");
        };
        assert_eq!(grid.pages.len(), 1);
        assert_eq!(grid.pages[0].entries.len(), 2);
        assert_eq!(grid.images.len(), 2);
        assert_eq!(config.title(), "Assignment: Lighting Implementation");
    }

    #[test]
    fn test_single_from_json() {
        let json = r#"{
            "layout": "single",
            "output": "report.pdf",
            "entries": [
                { "image": "a.png", "caption": "Fig 1" }
            ]
        }"#;
        let config = ReportConfig::from_json(json).unwrap();
        config.validate().unwrap();
        assert_eq!(config.output(), Path::new("report.pdf"));
    }

    #[test]
    fn test_geometry_override() {
        let toml = r#"
layout = "grid"
output = "out.pdf"
title = "T"
images = {}

[geometry]
image_width = 80.0

[[pages]]
entries = [{ key = "a", caption = "c" }]
"#;
        let ReportConfig::Grid(grid) = ReportConfig::from_toml(toml).unwrap() else {
            panic!("expected grid layout");
        };
        assert_eq!(grid.geometry.image_width, 80.0);
        assert_eq!(grid.geometry.h_gap, 5.0);
    }

    #[test]
    fn test_validate_empty_entries() {
        let config = ReportConfig::from_json(
            r#"{ "layout": "single", "output": "r.pdf", "entries": [] }"#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_overfull_grid_page() {
        let entries: Vec<String> = (0..10)
            .map(|i| format!("{{ \"key\": \"k{}\", \"caption\": \"c\" }}", i))
            .collect();
        let json = format!(
            r#"{{ "layout": "grid", "output": "r.pdf", "title": "T",
                 "images": {{}}, "pages": [{{ "entries": [{}] }}] }}"#,
            entries.join(",")
        );
        let config = ReportConfig::from_json(&json).unwrap();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_images_reports_unmapped_key() {
        let config = ReportConfig::from_toml(GRID_TOML).unwrap();
        // Neither screenshot exists in the test working directory.
        let missing = config.missing_images();
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        fs::write(&path, "layout: single").unwrap();
        let result = ReportConfig::from_file(&path);
        assert!(matches!(result, Err(Error::UnsupportedConfigFormat(_))));
    }
}
