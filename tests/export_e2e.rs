// tests/export_e2e.rs
mod common;

use std::fs;

use bg_scrape::config::options::{AppOptions, ExportFormat, ExportType, TableKind};
use bg_scrape::file::export_dataset;
use bg_scrape::runner;
use bg_scrape::store::DataSet;

fn products_table() -> DataSet {
    DataSet::new(
        bg_scrape::row!["Category", "Name", "Price"],
        vec![
            bg_scrape::row!["Tools", "Drill", "45.5"],
            bg_scrape::row!["Toys", "Kite, rainbow", "5.1"],
            bg_scrape::row!["Tools", "Hex Keys", "8.99"],
            bg_scrape::row!["", "Mystery Box", "1.0"],
        ],
    )
}

#[test]
fn user_extension_survives_format_change() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Csv;
    opts.export.set_path(dir.path().join("hello.txt").to_str().unwrap());

    // flip format to TSV; extension should remain .txt
    opts.export.format = ExportFormat::Tsv;
    assert!(opts.export.out_path().to_string_lossy().ends_with("hello.txt"));

    let written = export_dataset(&opts.export, &products_table()).unwrap();
    assert_eq!(written.len(), 1);
    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(text.lines().next(), Some("Category\tName\tPrice"));
    // commas are fine inside TSV cells
    assert!(text.contains("Toys\tKite, rainbow\t5.1"));
}

#[test]
fn per_category_writes_one_file_each() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.export_type = ExportType::PerCategory;
    opts.export.include_headers = false;
    // per-category takes a directory path
    let out_dir = dir.path().join("by_category");
    opts.export.set_path(out_dir.to_str().unwrap());

    let written = export_dataset(&opts.export, &products_table()).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["uncategorized.csv", "Tools.csv", "Toys.csv"]);

    let tools = fs::read_to_string(out_dir.join("Tools.csv")).unwrap();
    assert_eq!(tools, "Tools,Drill,45.5\nTools,Hex Keys,8.99\n");
    let toys = fs::read_to_string(out_dir.join("Toys.csv")).unwrap();
    assert_eq!(toys, "Toys,\"Kite, rainbow\",5.1\n");
}

#[test]
fn per_category_needs_a_category_column() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.export.export_type = ExportType::PerCategory;
    opts.export.set_path(dir.path().to_str().unwrap());

    let ds = DataSet::new(bg_scrape::row!["Name"], vec![bg_scrape::row!["Drill"]]);
    let err = export_dataset(&opts.export, &ds).unwrap_err();
    assert!(err.to_string().contains("Category"));
}

#[test]
fn runner_exports_the_raw_table_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = common::options_in(dir.path());
    runner::scrape(&opts, None).unwrap();

    opts.export.table = TableKind::Raw;
    opts.export.set_path(dir.path().join("out").join("raw_copy.csv").to_str().unwrap());
    let written = runner::export(&opts, None).unwrap();
    assert_eq!(written.len(), 1);

    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(text.lines().count(), 6); // header + 5 listings
    assert!(text.contains("Bench Grinder"));
}
