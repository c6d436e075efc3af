// src/store.rs
//
// Pipeline tables on disk. Every stage reads its input and writes its output
// through here; the first CSV row is always the header.

use std::{error::Error, fs, io, path::{Path, PathBuf}};

use crate::csv::{parse_rows, write_row};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers), rows }
    }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.as_ref().map(|h| h.len()).unwrap_or(0) }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// (rows, columns), the way the stages report table shape.
    pub fn shape(&self) -> (usize, usize) {
        let cols = self.headers.as_ref().map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0);
        (self.rows.len(), cols)
    }

    /// Index of the column named `name` (exact match).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }
}

/// Load a pipeline table. A missing file is an error that names the path.
pub fn load(path: &Path) -> Result<DataSet, Box<dyn Error>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(format!("File not found: '{}'", path.display()).into());
        }
        Err(e) => return Err(e.into()),
    };
    let mut rows = parse_rows(&text, ',');
    if rows.is_empty() {
        return Ok(DataSet::default());
    }
    let headers = rows.remove(0).into_iter().map(|h| s!(h.trim())).collect();
    logd!("Store: loaded {} rows from {}", rows.len(), path.display());
    Ok(DataSet { headers: Some(headers), rows })
}

/// Save a pipeline table as CSV, creating parent directories.
pub fn save(path: &Path, ds: &DataSet) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    let mut w = io::BufWriter::new(file);
    if let Some(h) = &ds.headers {
        write_row(&mut w, h, ',')?;
    }
    for r in &ds.rows {
        write_row(&mut w, r, ',')?;
    }
    io::Write::flush(&mut w)?;
    logd!("Store: saved {} rows to {}", ds.rows.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_path() {
        let err = load(Path::new("no/such/banggood.csv")).unwrap_err();
        assert!(err.to_string().contains("no/such/banggood.csv"));
    }

    #[test]
    fn save_then_load_keeps_header_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("t.csv");
        let ds = DataSet::new(row!["Category", "Name"], vec![row!["Tools", "Saw, hand"]]);
        save(&path, &ds).unwrap();
        let back = load(&path).unwrap();
        assert_eq!(back, ds);
        assert_eq!(back.column("Name"), Some(1));
        assert_eq!(back.shape(), (1, 2));
    }
}
