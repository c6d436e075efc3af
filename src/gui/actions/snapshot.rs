// src/gui/actions/snapshot.rs
//
// "Save PNG": ask the viewport for a screenshot, then crop the chart out of
// it once the frame arrives (usually the next update).
use std::path::{Path, PathBuf};

use eframe::egui::{self, ColorImage, Event, UserData, ViewportCommand};

use crate::{gui::{app::App, pages::PageView}, config::consts::{DEFAULT_CHARTS_SUBDIR, DEFAULT_OUT_DIR}};

pub fn request(app: &mut App, ctx: &egui::Context) {
    let PageView::Analysis(kind) = app.current_page().view() else { return };
    if app.chart_rect.is_none() {
        app.status("Nothing to save (no chart)");
        return;
    }
    let path = PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_CHARTS_SUBDIR).join(format!("{}.png", kind.slug()));
    logf!("Snapshot: requested → {}", path.display());
    app.snapshot_to = Some(path);
    ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::default()));
}

pub fn collect(app: &mut App, ctx: &egui::Context) {
    if app.snapshot_to.is_none() {
        return;
    }
    let shot = ctx.input(|i| {
        i.raw.events.iter().find_map(|e| match e {
            Event::Screenshot { image, .. } => Some(image.clone()),
            _ => None,
        })
    });
    let Some(image) = shot else { return };
    let Some(path) = app.snapshot_to.take() else { return };

    let Some(rect) = app.chart_rect else {
        app.status("Chart went away before the screenshot arrived");
        return;
    };
    let chart = image.region(&rect, Some(ctx.pixels_per_point()));
    match save_png(&chart, &path) {
        Ok(()) => {
            logf!("Snapshot: saved {}x{} → {}", chart.size[0], chart.size[1], path.display());
            app.status(format!("Chart saved to {}", path.display()));
        }
        Err(e) => {
            loge!("Snapshot: {e}");
            app.status(format!("PNG error: {e}"));
        }
    }
}

fn save_png(img: &ColorImage, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            crate::file::ensure_directory(parent)?;
        }
    }
    let bytes: Vec<u8> = img.pixels.iter().flat_map(|c| c.to_srgba_unmultiplied()).collect();
    let (w, h) = (img.size[0] as u32, img.size[1] as u32);
    let buf = image::RgbaImage::from_raw(w, h, bytes).ok_or("Screenshot buffer has the wrong size")?;
    buf.save(path)?;
    Ok(())
}
