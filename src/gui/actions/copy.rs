// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, csv};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let Some(ds) = super::current_table(app) else {
            app.status("Nothing to copy (no data)");
            logd!("Copy: Clicked, but there's no table loaded");
            return;
        };
        if ds.is_empty() {
            app.status("Nothing to copy");
            return;
        }
        let export = &app.state.options.export;
        logf!("Copy: rows={}, headers={}", ds.row_count(), ds.header_count());
        csv::to_export_string(&ds.headers, &ds.rows, export.include_headers, export.format.delim())
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
