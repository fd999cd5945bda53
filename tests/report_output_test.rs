//! End-to-end tests: synthesize PNG fixtures, generate real PDF
//! documents, and reopen them with lopdf to check their structure.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use imgreport::{
    generate_to, Entry, GridEntry, GridPage, GridReportConfig, ReportConfig, SingleReportConfig,
};

/// Write a small solid-color PNG fixture.
fn write_png(path: &Path, width: u32, height: u32) {
    let img = image::ImageBuffer::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, 128u8])
    });
    img.save(path).unwrap();
}

fn page_count(path: &Path) -> usize {
    let doc = lopdf::Document::load(path).unwrap();
    doc.get_pages().len()
}

fn single_config(entries: Vec<Entry>, output: PathBuf) -> ReportConfig {
    ReportConfig::Single(SingleReportConfig {
        output,
        title: None,
        entries,
        geometry: Default::default(),
    })
}

#[test]
fn test_single_report_writes_one_page_per_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut entries = Vec::new();
    for i in 0..3 {
        let path = dir.path().join(format!("shot{}.png", i));
        write_png(&path, 64, 32);
        entries.push(Entry::new(path, format!("Fig {}", i + 1)));
    }

    let output = dir.path().join("report.pdf");
    let config = single_config(entries, output.clone());
    let summary = generate_to(&config, &output).unwrap();

    assert_eq!(summary.pages, 3);
    assert!(summary.is_complete());
    assert_eq!(page_count(&output), 3);
}

#[test]
fn test_single_report_skips_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut entries = Vec::new();
    for i in 0..10 {
        let path = dir.path().join(format!("shot{}.png", i));
        if i != 2 && i != 6 {
            write_png(&path, 40, 20);
        }
        entries.push(Entry::new(path, format!("Fig {}", i + 1)));
    }

    let output = dir.path().join("Bus_Assignment_10_Images.pdf");
    let config = single_config(entries, output.clone());
    let summary = generate_to(&config, &output).unwrap();

    assert_eq!(summary.pages, 8);
    assert_eq!(summary.skipped.len(), 2);
    assert_eq!(
        output.file_name().unwrap().to_str().unwrap(),
        "Bus_Assignment_10_Images.pdf"
    );
    assert_eq!(page_count(&output), 8);
}

#[test]
fn test_grid_report_two_pages() {
    let dir = tempfile::tempdir().unwrap();
    let keys = ["222", "224", "219", "223", "221", "220", "218"];
    let mut images = HashMap::new();
    for key in keys {
        let path = dir.path().join(format!("Screenshot ({}).png", key));
        write_png(&path, 90, 50);
        images.insert(key.to_string(), path);
    }

    let output = dir.path().join("Lighting_Assignment_Report.pdf");
    let config = ReportConfig::Grid(GridReportConfig {
        output: output.clone(),
        title: "Assignment: Lighting Implementation".to_string(),
        images,
        pages: vec![
            GridPage {
                entries: vec![
                    GridEntry::new("222", "Fig 1: Directional Light (Sunlight effect)"),
                    GridEntry::new("224", "Fig 2: Point Lights (Warm/Local illumination)"),
                    GridEntry::new("219", "Fig 3: Spot Light (Cone cut-off angle)"),
                    GridEntry::new("223", "Fig 4: Ambient Light Only"),
                ],
            },
            GridPage {
                entries: vec![
                    GridEntry::new("221", "Fig 5: Diffuse Light Component"),
                    GridEntry::new("220", "Fig 6: Specular Light Component"),
                    GridEntry::new("218", "Fig 7: Combined Lighting Implementation"),
                ],
            },
        ],
        geometry: Default::default(),
    });
    config.validate().unwrap();

    let summary = generate_to(&config, &output).unwrap();
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.placed, 7);
    assert_eq!(page_count(&output), 2);
}

#[test]
fn test_grid_missing_key_still_writes_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.png");
    write_png(&path, 30, 30);
    let mut images = HashMap::new();
    images.insert("a".to_string(), path);

    let output = dir.path().join("out.pdf");
    let config = ReportConfig::Grid(GridReportConfig {
        output: output.clone(),
        title: "T".to_string(),
        images,
        pages: vec![GridPage {
            entries: vec![
                GridEntry::new("a", "Fig 1"),
                GridEntry::new("missing", "Fig 2: caption survives"),
            ],
        }],
        geometry: Default::default(),
    });

    let summary = generate_to(&config, &output).unwrap();
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.placed, 1);
    assert_eq!(summary.skipped, vec!["missing".to_string()]);
    assert_eq!(page_count(&output), 1);
}

#[test]
fn test_all_skipped_report_refuses_to_write() {
    let dir = tempfile::tempdir().unwrap();
    // Neither image is ever written to disk
    let entries = vec![
        Entry::new(dir.path().join("gone1.png"), "Fig 1"),
        Entry::new(dir.path().join("gone2.png"), "Fig 2"),
    ];

    let output = dir.path().join("report.pdf");
    let config = single_config(entries, output.clone());
    let result = generate_to(&config, &output);

    // Zero pages means zero pages in the output too: no phantom blank
    // page is written, the run fails instead.
    assert!(matches!(result, Err(imgreport::Error::EmptyReport)));
    assert!(!output.exists());
}

#[test]
fn test_output_overwritten_on_rerun() {
    let dir = tempfile::tempdir().unwrap();
    let img = dir.path().join("a.png");
    write_png(&img, 20, 10);
    let entries = vec![Entry::new(&img, "Fig 1")];

    let output = dir.path().join("report.pdf");
    let config = single_config(entries, output.clone());

    let first = generate_to(&config, &output).unwrap();
    let second = generate_to(&config, &output).unwrap();

    // Structurally identical runs
    assert_eq!(first, second);
    assert_eq!(page_count(&output), 1);
}

#[test]
fn test_demo_configs_parse_and_validate() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");

    let bus = ReportConfig::from_file(demos.join("bus_report.toml")).unwrap();
    let ReportConfig::Single(single) = &bus else {
        panic!("bus report should be single layout");
    };
    assert_eq!(single.entries.len(), 10);
    assert_eq!(
        bus.output().file_name().unwrap().to_str().unwrap(),
        "Bus_Assignment_10_Images.pdf"
    );

    let lighting = ReportConfig::from_file(demos.join("lighting_report.toml")).unwrap();
    let ReportConfig::Grid(grid) = &lighting else {
        panic!("lighting report should be grid layout");
    };
    assert_eq!(grid.pages.len(), 2);
    assert_eq!(grid.pages[0].entries.len(), 4);
    assert_eq!(grid.pages[1].entries.len(), 3);
    assert_eq!(grid.images.len(), 7);
    assert_eq!(lighting.title(), "Assignment: Lighting Implementation");
}
