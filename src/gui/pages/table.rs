// src/gui/pages/table.rs
use eframe::egui;

use crate::{config::options::TableKind, gui::{app::App, components::data_table}};

use super::{Page, PageView};

pub struct TablePage(pub TableKind);

pub static RAW: TablePage = TablePage(TableKind::Raw);
pub static PRODUCTS: TablePage = TablePage(TableKind::Products);

impl Page for TablePage {
    fn title(&self) -> &'static str { self.0.label() }
    fn view(&self) -> PageView { PageView::Table(self.0) }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let path = app.state.options.paths.for_table(self.0).to_path_buf();
        match app.table(self.0) {
            Some(ds) => {
                ui.label(format!("{} rows × {} columns  ·  {}", ds.row_count(), ds.header_count(), path.display()));
                ui.separator();
                data_table::draw(ui, ds);
            }
            None => {
                ui.label(format!("No data yet ({} not found).", path.display()));
            }
        }
    }
}
