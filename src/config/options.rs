// src/config/options.rs
use std::error::Error;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::model::Category;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub paths: DataPaths,
    pub analysis: AnalysisOptions,
    pub load: LoadOptions,
    pub export: ExportOptions,
}

/// The two tables the pipeline hands from stage to stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Raw,
    Products,
}

impl TableKind {
    pub fn label(&self) -> &'static str {
        match self {
            TableKind::Raw => "Raw listings",
            TableKind::Products => "Products",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Names(Vec<String>),
}

impl CategorySelector {
    /// Resolve against the fixed category list, keeping the list's order.
    pub fn resolve(&self) -> Result<Vec<Category>, Box<dyn Error>> {
        let all = CATEGORIES.iter().map(|(name, url)| Category::new(name, url));
        match self {
            CategorySelector::All => Ok(all.collect()),
            CategorySelector::Names(names) => {
                for n in names {
                    if !CATEGORIES.iter().any(|(c, _)| c.eq_ignore_ascii_case(n)) {
                        return Err(format!("Unknown category: {n}").into());
                    }
                }
                Ok(all
                    .filter(|c| names.iter().any(|n| n.eq_ignore_ascii_case(&c.name)))
                    .collect())
            }
        }
    }
}

/// Where category pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Live,
    /// Directory of saved pages named `<Category>.html`
    Snapshots(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub categories: CategorySelector,
    pub source: SourceKind,
    pub workers: usize,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            categories: CategorySelector::All,
            source: SourceKind::Live,
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub raw: PathBuf,
    pub transformed: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            raw: PathBuf::from(DATA_DIR).join(RAW_FILE),
            transformed: PathBuf::from(DATA_DIR).join(TRANSFORMED_FILE),
        }
    }
}

impl DataPaths {
    pub fn for_table(&self, kind: TableKind) -> &Path {
        match kind {
            TableKind::Raw => &self.raw,
            TableKind::Products => &self.transformed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub top_n: usize,
    /// Write one SVG per report here when set
    pub charts_dir: Option<PathBuf>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { top_n: TOP_N, charts_dir: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub db_path: PathBuf,
    pub table: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DATA_DIR).join(DEFAULT_DB_FILE),
            table: s!(TABLE_NAME),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    pub table: TableKind,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            table: TableKind::Products,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn default_dir() -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR)
    }

    /// SingleFile: `<dir>/<stem>.<ext>`; PerCategory: the directory itself.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                // A user-typed extension wins over the format's
                let ext = match &self.out_path.ext {
                    Some(e) => e.to_string_lossy().into_owned(),
                    None => s!(self.format.ext()),
                };
                path.push(join!(&*stem, ".", &ext));
            }
            ExportType::PerCategory => { /* directory only */ }
        }
        path
    }

    /// Parse user text into dir + stem (+ extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
                self.out_path.ext = p.extension().map(|e| e.to_os_string());
            }
            ExportType::PerCategory => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn is_fully_default(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: ExportOptions::default_dir(),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
