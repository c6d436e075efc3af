// src/gui/actions/stages.rs
//
// Pipeline stages behind the action buttons. Each runs on a worker thread
// (see `App::spawn_job`); the tables reload from disk when it finishes.
use crate::{gui::app::App, runner};

pub fn scrape(app: &mut App) {
    logf!("Scrape: Begin categories={:?}", app.state.options.scrape.categories);
    app.spawn_job("Scraping", |opts, prog| {
        let out = runner::scrape(opts, Some(prog))?;
        let skipped = out.summary.skipped.len();
        Ok(if skipped == 0 {
            format!("Scraped {} rows → {}", out.summary.total(), out.path.display())
        } else {
            format!("Scraped {} rows ({} categories skipped) → {}", out.summary.total(), skipped, out.path.display())
        })
    });
}

pub fn transform(app: &mut App) {
    app.spawn_job("Transforming", |opts, prog| {
        let out = runner::transform(opts, Some(prog))?;
        Ok(match out.path {
            Some(p) => format!("Transformed {} rows → {}", out.products.len(), p.display()),
            None => s!("No rows left after cleaning; nothing written"),
        })
    });
}

pub fn load(app: &mut App) {
    app.spawn_job("Loading", |opts, prog| {
        let v = runner::load(opts, Some(prog))?;
        Ok(if v.matches() {
            format!("Loaded {} rows into {} ({})", v.actual, opts.load.table, opts.load.db_path.display())
        } else {
            format!("Row count mismatch: expected {}, found {}", v.expected, v.actual)
        })
    });
}
