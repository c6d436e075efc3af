// src/scrape/mod.rs
mod collect;
mod source;

pub use collect::{collect, value_counts, ScrapeSummary};
pub use source::{source_for, HttpSource, PageSource, SnapshotSource};
