// src/chart/layout.rs
//
// Chart → positioned primitives in canvas pixels (origin top-left, y down).

use super::scale::{nice_domain, tick_label, Linear};
use super::{Chart, ChartKind, Rgb};
use crate::core::text::ellipsize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// `Text::pos` is the anchor point on the vertical middle of the line;
/// `angle` (degrees, clockwise) rotates around it.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { a: (f64, f64), b: (f64, f64), color: Rgb, width: f64 },
    Rect { min: (f64, f64), max: (f64, f64), fill: Option<Rgb>, stroke: Option<Rgb> },
    Circle { c: (f64, f64), r: f64, fill: Rgb, stroke: Option<Rgb> },
    Text { pos: (f64, f64), text: String, size: f64, anchor: Anchor, color: Rgb, angle: f64 },
}

pub const INK: Rgb = Rgb(38, 38, 38);
pub const GRID: Rgb = Rgb(224, 224, 224);
pub const PAPER: Rgb = Rgb(255, 255, 255);
pub const PANEL: Rgb = Rgb(250, 250, 252);

const TITLE_SIZE: f64 = 15.0;
const LABEL_SIZE: f64 = 12.0;
const TICK_SIZE: f64 = 10.5;
const TICKS: usize = 6;
const LEGEND_W: f64 = 150.0;
const CAT_LABEL_MAX: usize = 32;

fn text(pos: (f64, f64), s: &str, size: f64, anchor: Anchor) -> Shape {
    Shape::Text { pos, text: s!(s), size, anchor, color: INK, angle: 0.0 }
}

fn line(a: (f64, f64), b: (f64, f64), color: Rgb, width: f64) -> Shape {
    Shape::Line { a, b, color, width }
}

/// Lay `chart` out on a `w` × `h` canvas.
pub fn layout(chart: &Chart, w: f64, h: f64) -> Vec<Shape> {
    let mut out = vec![Shape::Rect { min: (0.0, 0.0), max: (w, h), fill: Some(PAPER), stroke: None }];

    let longest_cat = category_labels(chart).iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let left = match &chart.kind {
        ChartKind::HBar(_) => (longest_cat.min(CAT_LABEL_MAX) as f64 * 6.2 + 30.0).clamp(80.0, 240.0),
        _ => 70.0,
    };
    let bottom = match &chart.kind {
        ChartKind::VBar { rotate_labels: true, .. } => 40.0 + longest_cat.min(CAT_LABEL_MAX) as f64 * 4.6,
        _ => 55.0,
    };
    let right = if chart.legend.is_empty() { 20.0 } else { LEGEND_W + 20.0 };
    let (x0, x1, y0, y1) = (left, (w - right).max(left + 10.0), 44.0, (h - bottom).max(54.0));

    out.push(Shape::Rect { min: (x0, y0), max: (x1, y1), fill: Some(PANEL), stroke: None });
    out.push(text((w / 2.0, 20.0), &chart.title, TITLE_SIZE, Anchor::Middle));
    out.push(text(((x0 + x1) / 2.0, h - 14.0), &chart.x_label, LABEL_SIZE, Anchor::Middle));
    out.push(Shape::Text {
        pos: (16.0, (y0 + y1) / 2.0),
        text: chart.y_label.clone(),
        size: LABEL_SIZE,
        anchor: Anchor::Middle,
        color: INK,
        angle: -90.0,
    });

    let value_top = chart.value_max.unwrap_or_else(|| chart.data_max());

    match &chart.kind {
        ChartKind::Box(groups) => {
            let ys = value_axis_y(&mut out, 0.0, value_top, chart.value_max.is_some(), (x0, x1, y0, y1));
            let band = (x1 - x0) / groups.len().max(1) as f64;
            for (i, g) in groups.iter().enumerate() {
                let cx = x0 + band * (i as f64 + 0.5);
                out.push(text((cx, y1 + 14.0), &ellipsize(&g.label, CAT_LABEL_MAX), TICK_SIZE, Anchor::Middle));
                let Some(b) = &g.stats else { continue };
                let half = band * 0.3;
                let (yq1, yq3) = (ys.map_clamped(b.q1), ys.map_clamped(b.q3));
                out.push(line((cx, ys.map_clamped(b.whisker_lo)), (cx, yq1), INK, 1.2));
                out.push(line((cx, yq3), (cx, ys.map_clamped(b.whisker_hi)), INK, 1.2));
                for wv in [b.whisker_lo, b.whisker_hi] {
                    let y = ys.map_clamped(wv);
                    out.push(line((cx - half / 2.0, y), (cx + half / 2.0, y), INK, 1.2));
                }
                out.push(Shape::Rect {
                    min: (cx - half, yq3.min(yq1)),
                    max: (cx + half, yq3.max(yq1)),
                    fill: Some(g.color),
                    stroke: Some(INK),
                });
                let ym = ys.map_clamped(b.median);
                out.push(line((cx - half, ym), (cx + half, ym), INK, 2.0));
                for o in b.outliers.iter().filter(|o| **o <= value_top) {
                    out.push(Shape::Circle { c: (cx, ys.map(*o)), r: 2.5, fill: PAPER, stroke: Some(INK) });
                }
            }
        }
        ChartKind::Scatter(series) => {
            let xs_all = series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
            let x_lo = xs_all.clone().fold(f64::NAN, f64::min);
            let x_hi = xs_all.fold(f64::NAN, f64::max);
            let y_lo = series.iter().flat_map(|s| s.points.iter().map(|p| p.1)).fold(f64::NAN, f64::min);
            let (x_lo, x_hi) = if x_lo.is_nan() { (0.0, 1.0) } else { (x_lo.min(0.0), x_hi) };
            let y_lo = if y_lo.is_nan() { 0.0 } else { y_lo.min(0.0) };

            let ys = value_axis_y(&mut out, y_lo, value_top, false, (x0, x1, y0, y1));
            let xs = value_axis_x(&mut out, x_lo, x_hi, (x0, x1, y0, y1));
            for s in series {
                for (px, py) in &s.points {
                    if px.is_nan() || py.is_nan() {
                        continue;
                    }
                    out.push(Shape::Circle { c: (xs.map(*px), ys.map(*py)), r: 3.5, fill: s.color, stroke: Some(PAPER) });
                }
            }
        }
        ChartKind::HBar(bars) => {
            let xs = value_axis_x(&mut out, 0.0, value_top, (x0, x1, y0, y1));
            let band = (y1 - y0) / bars.len().max(1) as f64;
            for (i, b) in bars.iter().enumerate() {
                let cy = y0 + band * (i as f64 + 0.5);
                out.push(text((x0 - 6.0, cy), &ellipsize(&b.label, CAT_LABEL_MAX), TICK_SIZE, Anchor::End));
                if b.value.is_nan() {
                    continue;
                }
                out.push(Shape::Rect {
                    min: (x0, cy - band * 0.4),
                    max: (xs.map_clamped(b.value).max(x0), cy + band * 0.4),
                    fill: Some(b.color),
                    stroke: None,
                });
            }
        }
        ChartKind::VBar { bars, rotate_labels } => {
            let ys = value_axis_y(&mut out, 0.0, value_top, false, (x0, x1, y0, y1));
            let band = (x1 - x0) / bars.len().max(1) as f64;
            for (i, b) in bars.iter().enumerate() {
                let cx = x0 + band * (i as f64 + 0.5);
                let label = ellipsize(&b.label, CAT_LABEL_MAX);
                out.push(if *rotate_labels {
                    Shape::Text { pos: (cx, y1 + 10.0), text: label, size: TICK_SIZE, anchor: Anchor::End, color: INK, angle: -45.0 }
                } else {
                    text((cx, y1 + 14.0), &label, TICK_SIZE, Anchor::Middle)
                });
                if b.value.is_nan() {
                    continue;
                }
                out.push(Shape::Rect {
                    min: (cx - band * 0.4, ys.map_clamped(b.value).min(y1)),
                    max: (cx + band * 0.4, y1),
                    fill: Some(b.color),
                    stroke: None,
                });
            }
        }
    }

    // Axes on top of the data
    out.push(line((x0, y1), (x1, y1), INK, 1.0));
    out.push(line((x0, y0), (x0, y1), INK, 1.0));

    if !chart.legend.is_empty() {
        let lx = x1 + 16.0;
        out.push(text((lx, y0 + 6.0), "Category", LABEL_SIZE, Anchor::Start));
        for (i, (label, color)) in chart.legend.iter().enumerate() {
            let ly = y0 + 26.0 + i as f64 * 18.0;
            out.push(Shape::Rect { min: (lx, ly - 5.0), max: (lx + 10.0, ly + 5.0), fill: Some(*color), stroke: None });
            out.push(text((lx + 16.0, ly), &ellipsize(label, 18), TICK_SIZE, Anchor::Start));
        }
    }
    out
}

fn category_labels(chart: &Chart) -> Vec<&str> {
    match &chart.kind {
        ChartKind::Box(groups) => groups.iter().map(|g| g.label.as_str()).collect(),
        ChartKind::HBar(bars) | ChartKind::VBar { bars, .. } => bars.iter().map(|b| b.label.as_str()).collect(),
        ChartKind::Scatter(_) => Vec::new(),
    }
}

/// Vertical value axis with grid lines; returns the data → pixel scale.
/// An exact `top` keeps the clip value as the axis end instead of rounding it up.
fn value_axis_y(out: &mut Vec<Shape>, lo: f64, top: f64, exact: bool, frame: (f64, f64, f64, f64)) -> Linear {
    let (x0, x1, y0, y1) = frame;
    let ((d0, d1), ticks) = nice_domain(lo, top, TICKS);
    let d1 = if exact && top > d0 { top } else { d1 };
    let s = Linear::new((d0, d1), (y1, y0));
    for t in ticks.into_iter().filter(|t| *t <= d1) {
        let y = s.map(t);
        out.push(line((x0, y), (x1, y), GRID, 1.0));
        out.push(text((x0 - 6.0, y), &tick_label(t), TICK_SIZE, Anchor::End));
    }
    s
}

fn value_axis_x(out: &mut Vec<Shape>, lo: f64, hi: f64, frame: (f64, f64, f64, f64)) -> Linear {
    let (x0, x1, y0, y1) = frame;
    let ((d0, d1), ticks) = nice_domain(lo, hi, TICKS);
    let s = Linear::new((d0, d1), (x0, x1));
    for t in ticks {
        let x = s.map(t);
        out.push(line((x, y0), (x, y1), GRID, 1.0));
        out.push(text((x, y1 + 14.0), &tick_label(t), TICK_SIZE, Anchor::Middle));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Bar, BoxGroup, BoxStats};

    fn chart(kind: ChartKind) -> Chart {
        Chart {
            title: s!("T"),
            x_label: s!("x"),
            y_label: s!("y"),
            kind,
            legend: Vec::new(),
            value_max: None,
        }
    }

    fn texts(shapes: &[Shape]) -> Vec<&str> {
        shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bars_stay_inside_the_canvas() {
        let c = chart(ChartKind::HBar(vec![
            Bar { label: s!("Toys"), value: 12.0, color: Rgb(1, 2, 3) },
            Bar { label: s!("Tools"), value: 3.5, color: Rgb(1, 2, 3) },
        ]));
        let shapes = layout(&c, 640.0, 400.0);
        for s in &shapes {
            if let Shape::Rect { min, max, .. } = s {
                assert!(min.0 >= 0.0 && max.0 <= 640.0);
                assert!(min.1 >= 0.0 && max.1 <= 400.0);
            }
        }
        let t = texts(&shapes);
        assert!(t.contains(&"Toys"));
        assert!(t.contains(&"T"));
    }

    #[test]
    fn box_group_without_values_draws_only_its_label() {
        let c = chart(ChartKind::Box(vec![
            BoxGroup { label: s!("A"), color: Rgb(0, 0, 0), stats: None },
            BoxGroup { label: s!("B"), color: Rgb(0, 0, 0), stats: BoxStats::from_values(&[1.0, 2.0, 3.0]) },
        ]));
        let shapes = layout(&c, 640.0, 400.0);
        let filled = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { fill: Some(Rgb(0, 0, 0)), .. }))
            .count();
        assert_eq!(filled, 1);
        assert!(texts(&shapes).contains(&"A"));
    }

    #[test]
    fn legend_lists_entries() {
        let mut c = chart(ChartKind::Scatter(Vec::new()));
        c.legend = vec![(s!("Sports"), Rgb(9, 9, 9))];
        let shapes = layout(&c, 640.0, 400.0);
        assert!(texts(&shapes).contains(&"Sports"));
    }
}
