// src/gui/components/chart_view.rs
//
// Paints a `Chart` with the egui painter, from the same layout the SVG
// writer uses. Returns the painted rect so the PNG snapshot can crop to it.

use eframe::egui::{self, epaint::TextShape, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::chart::{layout::{layout, Anchor, Shape}, Chart, Rgb};

fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

pub fn draw(ui: &mut egui::Ui, chart: &Chart) -> Rect {
    let size = Vec2::new(ui.available_width(), ui.available_height().max(240.0));
    let (rect, _resp) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let at = |p: (f64, f64)| Pos2::new(rect.min.x + p.0 as f32, rect.min.y + p.1 as f32);

    for shape in layout(chart, rect.width() as f64, rect.height() as f64) {
        match shape {
            Shape::Line { a, b, color: c, width } => {
                painter.line_segment([at(a), at(b)], Stroke::new(width as f32, color(c)));
            }
            Shape::Rect { min, max, fill, stroke } => {
                let r = Rect::from_min_max(at(min), at(max));
                if let Some(f) = fill {
                    painter.rect_filled(r, 0.0, color(f));
                }
                if let Some(s) = stroke {
                    painter.rect_stroke(r, 0.0, Stroke::new(1.0, color(s)), StrokeKind::Inside);
                }
            }
            Shape::Circle { c, r, fill, stroke } => {
                let stroke = stroke.map(|s| Stroke::new(1.0, color(s))).unwrap_or(Stroke::NONE);
                painter.circle(at(c), r as f32, color(fill), stroke);
            }
            Shape::Text { pos, text, size, anchor, color: c, angle } => {
                let galley = painter.layout_no_wrap(text, FontId::proportional(size as f32), color(c));
                let (w, h) = (galley.size().x, galley.size().y);
                let ax = match anchor {
                    Anchor::Start => 0.0,
                    Anchor::Middle => w / 2.0,
                    Anchor::End => w,
                };
                // Galleys rotate around their top-left corner; shift it so the
                // anchor point lands on `pos`.
                let rad = (angle as f32).to_radians();
                let (sin, cos) = rad.sin_cos();
                let (lx, ly) = (ax, h / 2.0);
                let offset = Vec2::new(lx * cos - ly * sin, lx * sin + ly * cos);
                let origin = at(pos) - offset;
                painter.add(TextShape::new(origin, galley, color(c)).with_angle(rad));
            }
        }
    }
    rect
}
