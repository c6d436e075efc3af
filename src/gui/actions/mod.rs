// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Consumers only see actions::{scrape, transform, load, copy, export, snapshot}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod stages;  // src/gui/actions/stages.rs
pub mod snapshot;

pub use copy::copy;
pub use export::export;
pub use stages::{load, scrape, transform};

use crate::{gui::app::App, store::DataSet};

#[inline]
pub(super) fn current_table(app: &App) -> Option<&DataSet> {
    app.table(app.current_page().export_table())
}
