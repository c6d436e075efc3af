// src/gui/components/data_table.rs
//
// Draws one pipeline table. Purely a view over the in-memory DataSet.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::store::DataSet;

/// Columns drawn centered; everything else reads left to right.
const NUMERIC_COLUMNS: &[&str] = &["Price", "Rating", "Reviews", "Name_Length", "Price_Per_Char"];

fn initial_width(header: &str) -> f32 {
    match header {
        "Name" => 360.0,
        "URL" => 320.0,
        "Category" => 110.0,
        "Price_Segment" => 140.0,
        _ => 90.0,
    }
}

pub fn draw(ui: &mut egui::Ui, ds: &DataSet) {
    let headers: Vec<String> = match &ds.headers {
        Some(h) => h.clone(),
        None => (1..=ds.shape().1).map(|i| format!("Col {i}")).collect(),
    };
    let numeric: Vec<bool> = headers.iter().map(|h| NUMERIC_COLUMNS.contains(&h.as_str())).collect();

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for h in &headers {
                table = table.column(Column::initial(initial_width(h)).resizable(true).clip(true).at_least(30.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, ds.row_count(), |mut row| {
                        let Some(data) = ds.rows.get(row.index()) else { return };
                        for ci in 0..headers.len() {
                            let cell = data.get(ci).map(|s| s.as_str()).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric[ci] {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
