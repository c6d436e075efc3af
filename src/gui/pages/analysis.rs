// src/gui/pages/analysis.rs
use eframe::egui;

use crate::{analysis::AnalysisKind, gui::{app::App, components::{chart_view, report_view}}};

use super::{Page, PageView};

pub struct AnalysisPage(pub AnalysisKind);

pub static PRICE_DISTRIBUTION: AnalysisPage = AnalysisPage(AnalysisKind::PriceDistribution);
pub static RATING_PRICE: AnalysisPage = AnalysisPage(AnalysisKind::RatingPrice);
pub static TOP_REVIEWED: AnalysisPage = AnalysisPage(AnalysisKind::TopReviewed);
pub static BEST_VALUE: AnalysisPage = AnalysisPage(AnalysisKind::BestValue);
pub static NAME_LENGTH: AnalysisPage = AnalysisPage(AnalysisKind::NameLength);

impl Page for AnalysisPage {
    fn title(&self) -> &'static str { self.0.title() }
    fn view(&self) -> PageView { PageView::Analysis(self.0) }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(report) = app.report(self.0).cloned() else {
            app.chart_rect = None;
            ui.label("No products yet. Scrape and transform first.");
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(&report.heading);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut app.state.gui.show_report_text, "Show tables");
            });
        });

        if app.state.gui.show_report_text {
            report_view::draw(ui, &report);
            ui.separator();
        }
        app.chart_rect = Some(chart_view::draw(ui, &report.chart));
    }
}
