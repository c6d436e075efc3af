// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Tables and reports are already in memory; switching only changes which
// page draws and which table Export/Copy act on.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            if idx == 2 {
                ui.separator();
            }
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_page().title();
                app.set_current_index(idx);
                logf!("UI: Tab switch {} → {}", prev, page.title());

                // Export follows the table on screen
                app.state.options.export.table = page.export_table();
            }
        }
    });
}
