// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use bg_scrape::{config::state::GuiState, gui};
use eframe::egui::{ IconData, ViewportBuilder };

/// Small orange tile with a dark bar chart on it.
fn app_icon() -> IconData {
    const SIZE: u32 = 32;
    const BARS: [u32; 3] = [12, 20, 26];
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let bar = (x >= 5 && x < 27).then(|| ((x - 5) / 8) as usize).filter(|_| (x - 5) % 8 < 6);
        match bar {
            Some(i) if y >= SIZE - 3 - BARS[i] && y < SIZE - 3 => image::Rgba([40, 40, 40, 255]),
            _ => image::Rgba([255, 102, 0, 255]),
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
