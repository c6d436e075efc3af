// src/gui/components/action_bar.rs

use eframe::egui::{self, Checkbox, widgets::Spinner};
use crate::{
    gui::{app::App, actions, pages::PageView},
    config::options::{
        ExportFormat,
        ExportType::{PerCategory, SingleFile},
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let on_analysis = matches!(page.view(), PageView::Analysis(_));

    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers + Per-category ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }

            let mut per_cat = matches!(export.export_type, PerCategory);
            if ui.add(Checkbox::new(&mut per_cat, "One file per category")).changed() {
                export.export_type = if per_cat { PerCategory } else { SingleFile };
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
                logf!("UI: export_type → {:?}", export.export_type);
            }
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);

            // If the entire path is still default and the user hasn't typed,
            // refresh the text field to reflect the new extension.
            if !app.out_path_dirty && export.is_fully_default() {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format (default path)");
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions ---
    ui.horizontal(|ui| {
        let idle = !app.running;

        let orange = egui::Color32::from_rgb(255, 102, 0);
        let button_scrape = ui.add_enabled(
            idle,
            egui::Button::new(egui::RichText::new("SCRAPE").color(egui::Color32::BLACK).strong())
                .fill(orange));
        if button_scrape.clicked() {
            actions::scrape(app);
        }
        if ui.add_enabled(idle, egui::Button::new("Transform")).clicked() {
            actions::transform(app);
        }
        if ui.add_enabled(idle, egui::Button::new("Load SQL")).clicked() {
            actions::load(app);
        }

        ui.separator();

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        let can_snap = on_analysis && app.chart_rect.is_some() && app.snapshot_to.is_none();
        if ui.add_enabled(can_snap, egui::Button::new("Save PNG"))
            .on_hover_text("Save the chart as an image")
            .clicked()
        {
            actions::snapshot::request(app, ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
