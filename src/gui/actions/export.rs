// src/gui/actions/export.rs
use crate::{file, gui::app::App};
use super::current_table;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();
    app.state.options.export.table = app.current_page().export_table();

    let status_msg = match current_table(app) {
        None => {
            logd!("Export: Clicked, but there's no table loaded");
            s!("Nothing to export (no data)")
        }
        Some(ds) if ds.is_empty() => s!("Nothing to export"),
        Some(ds) => {
            let export = &app.state.options.export;
            logf!("Export: Begin table={:?}, rows={}, type={:?}", export.table, ds.row_count(), export.export_type);
            match file::export_dataset(export, ds) {
                Ok(paths) => match paths.last() {
                    Some(last) => format!("Exported {} file(s). Last: {}", paths.len(), last.display()),
                    None => s!("Nothing to export"),
                },
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the dataset borrows are gone
    app.status(status_msg);
}
