// src/file.rs

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ExportType};
use crate::core::text::sanitize_filename;
use crate::csv::to_export_string;
use crate::store::DataSet;

/// Export a table according to ExportOptions. Returns every path written.
pub fn export_dataset(
    export: &ExportOptions,
    ds: &DataSet,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    match export.export_type {
        ExportType::SingleFile => Ok(vec![write_export_single(export, &ds.headers, &ds.rows)?]),
        ExportType::PerCategory => {
            let col = ds.column("Category").ok_or("Per-category export needs a 'Category' column")?;
            write_export_per_category(export, &ds.headers, &ds.rows, col)
        }
    }
}

/// Write a single export file based on ExportOptions (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, export.include_headers, export.format.delim());
    fs::write(&path, contents)?;
    logf!("Export: {} rows → {}", rows.len(), path.display());
    Ok(path)
}

/// Write one file per category into the directory implied by `export.out_path()`.
/// `category_col` is the column index of "Category" in `rows`.
pub fn write_export_per_category(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    category_col: usize,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    // Group rows by category; BTreeMap keeps file order predictable
    let mut by_category: BTreeMap<&str, Vec<Vec<String>>> = BTreeMap::new();
    for r in rows {
        let cat = r.get(category_col).map(|s| s.as_str()).unwrap_or("");
        by_category.entry(cat).or_default().push(r.clone());
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(by_category.len());
    let ext = export.format.ext();

    for (category, cat_rows) in by_category {
        let stem = sanitize_filename(category, "uncategorized");
        let path = resolve_unique_filename(&outdir, &stem, &mut seen, ext);

        let contents = to_export_string(headers, &cat_rows, export.include_headers, export.format.delim());
        fs::write(&path, contents)?;
        logf!("Export: {} → {} rows → {}", category, cat_rows.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_unique_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | "svg" ...
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
