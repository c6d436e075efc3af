// src/gui/pages/mod.rs
use eframe::egui;

use crate::{analysis::AnalysisKind, config::options::TableKind, gui::app::App};

pub mod analysis;
pub mod table;

/// What a tab shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    Table(TableKind),
    Analysis(AnalysisKind),
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn view(&self) -> PageView;

    /// Draw the page body below the action bar.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Table pages export their own table; analysis pages export products.
    fn export_table(&self) -> TableKind {
        match self.view() {
            PageView::Table(kind) => kind,
            PageView::Analysis(_) => TableKind::Products,
        }
    }
}
