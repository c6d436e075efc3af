// src/chart/mod.rs
//
// Renderer-neutral chart model.
//
// Analyses describe *what* to draw (`Chart`); `layout` turns that into
// positioned primitives for a given canvas size, which `svg` serializes
// and the GUI paints. Neither renderer knows about products or stats.
pub mod layout;
pub mod palette;
pub mod scale;
pub mod svg;

use crate::analysis::stats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    /// Hue legend, drawn top-right when non-empty
    pub legend: Vec<(String, Rgb)>,
    /// Value-axis clip; data beyond it is cut off at the frame
    pub value_max: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartKind {
    /// One box per category along x
    Box(Vec<BoxGroup>),
    /// Points, one series per hue
    Scatter(Vec<Series>),
    /// Bars growing right, labels on y
    HBar(Vec<Bar>),
    /// Bars growing up, labels on x
    VBar { bars: Vec<Bar>, rotate_labels: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Rgb,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxGroup {
    pub label: String,
    pub color: Rgb,
    pub stats: Option<BoxStats>,
}

/// Five-number box with Tukey whiskers.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_lo: f64,
    pub whisker_hi: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Whiskers reach the furthest values within 1.5 × IQR of the box;
    /// everything beyond is an outlier. `None` without any present value.
    pub fn from_values(values: &[f64]) -> Option<BoxStats> {
        let mut v = stats::present(values);
        if v.is_empty() {
            return None;
        }
        v.sort_by(|a, b| a.total_cmp(b));
        let q1 = stats::quantile_sorted(&v, 0.25);
        let median = stats::quantile_sorted(&v, 0.5);
        let q3 = stats::quantile_sorted(&v, 0.75);
        let iqr = q3 - q1;
        let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        let inside = || v.iter().copied().filter(|x| *x >= lo_fence && *x <= hi_fence);
        let whisker_lo = inside().reduce(f64::min).unwrap_or(q1);
        let whisker_hi = inside().reduce(f64::max).unwrap_or(q3);
        let outliers = v.iter().copied().filter(|x| *x < lo_fence || *x > hi_fence).collect();

        Some(BoxStats { q1, median, q3, whisker_lo, whisker_hi, outliers })
    }

    pub fn max_value(&self) -> f64 {
        self.outliers.iter().copied().fold(self.whisker_hi, f64::max)
    }
}

impl Chart {
    /// Largest value on the value axis (y for box/scatter/vbar, x for hbar).
    pub fn data_max(&self) -> f64 {
        let m = match &self.kind {
            ChartKind::Box(groups) => groups
                .iter()
                .filter_map(|g| g.stats.as_ref().map(|s| s.max_value()))
                .fold(f64::NAN, f64::max),
            ChartKind::Scatter(series) => series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p.1))
                .fold(f64::NAN, f64::max),
            ChartKind::HBar(bars) | ChartKind::VBar { bars, .. } => {
                bars.iter().map(|b| b.value).fold(f64::NAN, f64::max)
            }
        };
        if m.is_nan() { 0.0 } else { m }
    }

    pub fn is_empty(&self) -> bool {
        match &self.kind {
            ChartKind::Box(groups) => groups.iter().all(|g| g.stats.is_none()),
            ChartKind::Scatter(series) => series.iter().all(|s| s.points.is_empty()),
            ChartKind::HBar(bars) | ChartKind::VBar { bars, .. } => bars.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_stats_split_outliers() {
        let b = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(b.median, 3.5);
        assert_eq!(b.q1, 2.25);
        assert_eq!(b.q3, 4.75);
        assert_eq!(b.whisker_lo, 1.0);
        assert_eq!(b.whisker_hi, 5.0);
        assert_eq!(b.outliers, vec![100.0]);
        assert_eq!(b.max_value(), 100.0);
    }

    #[test]
    fn box_stats_need_values() {
        assert!(BoxStats::from_values(&[f64::NAN]).is_none());
        let one = BoxStats::from_values(&[7.0]).unwrap();
        assert_eq!((one.q1, one.median, one.q3), (7.0, 7.0, 7.0));
    }

    #[test]
    fn hex_is_lowercase_rrggbb() {
        assert_eq!(Rgb(31, 119, 180).hex(), "#1f77b4");
    }
}
