// src/runner.rs
//
// Stage entry points shared by the CLI and the GUI.
// Each stage reads its input file, does its work, writes its output file
// and narrates through an optional `Progress` sink.
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    analysis::{self, AnalysisKind, Report},
    chart::svg,
    config::options::AppOptions,
    file,
    model::Product,
    progress::{say, Progress},
    scrape::{self, PageSource, ScrapeSummary},
    sql::{self, Loader, Validation},
    store,
    transform::{self, TransformReport},
};

pub struct ScrapeOutcome {
    pub path: PathBuf,
    pub summary: ScrapeSummary,
}

/// Scrape the selected categories from the configured source and save the raw table.
pub fn scrape(options: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<ScrapeOutcome, Box<dyn Error>> {
    let source = scrape::source_for(&options.scrape.source)?;
    scrape_with(options, source, progress)
}

/// Same as [`scrape`] with an explicit page source.
pub fn scrape_with(
    options: &AppOptions,
    source: Arc<dyn PageSource>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeOutcome, Box<dyn Error>> {
    let summary = scrape::collect(&options.scrape, source, progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;

    let path = store::save(&options.paths.raw, &summary.dataset)?;
    logf!("Scrape: saved {} rows → {}", summary.total(), path.display());

    say(&mut progress, &format!("Data saved to {}", path.display()));
    say(&mut progress, &format!("Total records scraped: {}", summary.total()));
    for (cat, n) in scrape::value_counts(&summary.per_category) {
        say(&mut progress, &format!("  {cat:<12} {n}"));
    }
    Ok(ScrapeOutcome { path, summary })
}

pub struct TransformOutcome {
    /// None when there was nothing to write
    pub path: Option<PathBuf>,
    pub report: TransformReport,
    pub products: Vec<Product>,
}

/// Raw table → products table.
pub fn transform(options: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<TransformOutcome, Box<dyn Error>> {
    say(&mut progress, "--- Loading Data ---");
    let raw = store::load(&options.paths.raw)?;
    let (products, report) = transform::transform(&raw)?;
    say(&mut progress, &report.to_string());

    if products.is_empty() {
        logf!("Transform: no rows left, nothing written");
        say(&mut progress, "No rows left after cleaning; nothing written.");
        return Ok(TransformOutcome { path: None, report, products });
    }

    let path = store::save(&options.paths.transformed, &Product::to_dataset(&products))?;
    logf!("Transform: {} rows → {}", products.len(), path.display());
    say(&mut progress, &format!("Transformed data saved to {}", path.display()));
    say(&mut progress, &transform::summary(&products));

    Ok(TransformOutcome { path: Some(path), report, products })
}

/// Read the products table back into typed rows.
pub fn load_products(options: &AppOptions) -> Result<Vec<Product>, Box<dyn Error>> {
    let ds = store::load(&options.paths.transformed)?;
    Product::from_dataset(&ds)
}

/// Run `kinds` (all five when empty) over the products table.
/// Charts are written as SVG when a chart directory is configured.
pub fn analyze(
    options: &AppOptions,
    kinds: &[AnalysisKind],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Report>, Box<dyn Error>> {
    let products = load_products(options)?;
    let kinds: &[AnalysisKind] = if kinds.is_empty() { &AnalysisKind::ALL } else { kinds };

    let mut reports = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let report = analysis::run(*kind, &products, options.analysis.top_n);
        say(&mut progress, &report.to_string());

        if let Some(dir) = &options.analysis.charts_dir {
            let path = dir.join(format!("{}.svg", kind.slug()));
            let written = svg::save(&report.chart, &path)?;
            say(&mut progress, &format!("Chart saved to {}", written.display()));
        }
        reports.push(report);
    }
    logf!("Analyze: {} report(s) over {} rows", reports.len(), products.len());
    Ok(reports)
}

/// Products table → database table, then count check.
pub fn load(options: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<Validation, Box<dyn Error>> {
    let products = sql::loadable(load_products(options)?);
    let expected = products.len();
    say(&mut progress, &format!("Loaded {expected} rows from CSV for insertion."));

    let lo = &options.load;
    let mut loader = Loader::open(&lo.db_path, &lo.table)?;
    say(&mut progress, &format!("Connected to {}", lo.db_path.display()));

    loader.create_schema()?;
    say(&mut progress, &format!("Table '{}' created.", loader.table()));

    say(&mut progress, &format!("Starting insertion of {expected} rows..."));
    loader.insert(&products)?;
    say(&mut progress, &format!("Data successfully inserted into {}.", loader.table()));

    let validation = loader.validate(expected)?;
    if validation.matches() {
        logf!("Load: validation ok ({} rows)", validation.actual);
    } else {
        loge!("Load: validation mismatch expected={} actual={}", validation.expected, validation.actual);
    }
    say(&mut progress, &validation.to_string());
    drop(loader);
    say(&mut progress, "Connection closed.");
    Ok(validation)
}

/// Re-export a pipeline table as CSV/TSV.
pub fn export(options: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let kind = options.export.table;
    let ds = store::load(options.paths.for_table(kind))?;
    if ds.is_empty() {
        say(&mut progress, "Nothing to export");
        return Ok(Vec::new());
    }
    let written = file::export_dataset(&options.export, &ds)?;
    match written.last() {
        Some(last) => say(&mut progress, &format!("Exported {} file(s). Last: {}", written.len(), last.display())),
        None => say(&mut progress, "Nothing to export"),
    }
    Ok(written)
}

/// scrape → transform → analyze → load.
pub fn run_all(options: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<(), Box<dyn Error>> {
    logf!("Pipeline: begin");
    say(&mut progress, "*** STARTING PIPELINE ***");
    scrape(options, progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
    let t = transform(options, progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
    if t.path.is_none() {
        return Err("Transform produced no rows; stopping before analysis".into());
    }
    analyze(options, &[], progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
    load(options, progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
    logf!("Pipeline: done");
    Ok(())
}
