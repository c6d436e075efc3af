// src/scrape/source.rs
use std::{error::Error, fs, path::PathBuf, sync::Arc};

use reqwest::blocking::Client;

use crate::config::options::SourceKind;
use crate::core::net;
use crate::model::Category;

/// Where a category page's HTML comes from.
/// Shared by the scrape workers, hence Send + Sync.
pub trait PageSource: Send + Sync {
    /// Human-readable origin of `category`'s page (URL or file path).
    fn locate(&self, category: &Category) -> String;

    fn fetch(&self, category: &Category) -> Result<String, Box<dyn Error>>;
}

/// Live pages over HTTPS.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self { client: net::client()? })
    }
}

impl PageSource for HttpSource {
    fn locate(&self, category: &Category) -> String {
        category.url.clone()
    }

    fn fetch(&self, category: &Category) -> Result<String, Box<dyn Error>> {
        net::http_get(&self.client, &category.url)
    }
}

/// Saved pages: `<dir>/<Category>.html`, e.g. the page source of a
/// browser session after the lazy-loaded cards came in.
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, category: &Category) -> PathBuf {
        self.dir.join(format!("{}.html", category.name))
    }
}

impl PageSource for SnapshotSource {
    fn locate(&self, category: &Category) -> String {
        self.path_for(category).display().to_string()
    }

    fn fetch(&self, category: &Category) -> Result<String, Box<dyn Error>> {
        let path = self.path_for(category);
        fs::read_to_string(&path)
            .map_err(|e| format!("Cannot read snapshot {}: {e}", path.display()).into())
    }
}

pub fn source_for(kind: &SourceKind) -> Result<Arc<dyn PageSource>, Box<dyn Error>> {
    Ok(match kind {
        SourceKind::Live => Arc::new(HttpSource::new()?),
        SourceKind::Snapshots(dir) => Arc::new(SnapshotSource::new(dir.clone())),
    })
}
