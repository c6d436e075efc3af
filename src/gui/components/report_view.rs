// src/gui/components/report_view.rs
use eframe::egui::{self, RichText};

use crate::analysis::Report;

/// The report's text tables, monospaced, in a short scroll box.
pub fn draw(ui: &mut egui::Ui, report: &Report) {
    egui::ScrollArea::vertical()
        .id_salt(("report_text", report.kind.slug()))
        .max_height(ui.available_height() * 0.35)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.add(egui::Label::new(RichText::new(&report.body).monospace()).extend());
        });
}
