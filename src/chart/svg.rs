// src/chart/svg.rs
use std::fmt::Write as _;
use std::{fs, io, path::{Path, PathBuf}};

use super::layout::{layout, Anchor, Shape};
use super::Chart;

pub const WIDTH: f64 = 900.0;
pub const HEIGHT: f64 = 560.0;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render(chart: &Chart, w: f64, h: f64) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#
    );
    for shape in layout(chart, w, h) {
        let _ = match shape {
            Shape::Line { a, b, color, width } => writeln!(
                svg,
                r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{width}"/>"#,
                a.0, a.1, b.0, b.1, color.hex()
            ),
            Shape::Rect { min, max, fill, stroke } => writeln!(
                svg,
                r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}"/>"#,
                min.0, min.1, max.0 - min.0, max.1 - min.1,
                fill.map(|c| c.hex()).unwrap_or_else(|| s!("none")),
                stroke.map(|c| c.hex()).unwrap_or_else(|| s!("none")),
            ),
            Shape::Circle { c, r, fill, stroke } => writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{r}" fill="{}" stroke="{}"/>"#,
                c.0, c.1, fill.hex(),
                stroke.map(|c| c.hex()).unwrap_or_else(|| s!("none")),
            ),
            Shape::Text { pos, text, size, anchor, color, angle } => {
                let anchor = match anchor {
                    Anchor::Start => "start",
                    Anchor::Middle => "middle",
                    Anchor::End => "end",
                };
                let rotate = if angle != 0.0 {
                    format!(r#" transform="rotate({angle} {:.1} {:.1})""#, pos.0, pos.1)
                } else {
                    s!()
                };
                writeln!(
                    svg,
                    r#"  <text x="{:.1}" y="{:.1}" font-size="{size}" fill="{}" text-anchor="{anchor}" dominant-baseline="middle"{rotate}>{}</text>"#,
                    pos.0, pos.1, color.hex(), escape(&text)
                )
            }
        };
    }
    svg.push_str("</svg>\n");
    svg
}

/// Write `chart` to `path` at the default canvas size, creating parent dirs.
pub fn save(chart: &Chart, path: &Path) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(chart, WIDTH, HEIGHT))?;
    logd!("Chart: saved {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Bar, ChartKind, Rgb};

    #[test]
    fn renders_escaped_text_and_rotation() {
        let chart = Chart {
            title: s!("Budget <$10> & more"),
            x_label: s!("Segment"),
            y_label: s!("Length"),
            kind: ChartKind::VBar {
                bars: vec![Bar { label: s!("Budget (<$10)"), value: 40.0, color: Rgb(10, 20, 30) }],
                rotate_labels: true,
            },
            legend: Vec::new(),
            value_max: None,
        };
        let svg = render(&chart, 400.0, 300.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Budget &lt;$10&gt; &amp; more"));
        assert!(svg.contains("rotate(-45"));
        assert!(svg.contains("#0a141e"));
    }
}
