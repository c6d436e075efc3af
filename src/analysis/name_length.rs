// src/analysis/name_length.rs
//
// Name length as a stand-in for how much detail (and stock variety) a
// listing carries.
use crate::chart::{palette, Bar, Chart, ChartKind};
use crate::core::text::fmt_fixed;
use crate::model::{PriceSegment, Product};

use super::{by_category, by_segment, segment_rows, stats, table, AnalysisKind, Report};

#[derive(Clone, Debug, PartialEq)]
pub struct NameLengthStats {
    pub category: String,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub count: usize,
}

fn lengths(rows: &[&Product]) -> Vec<f64> {
    rows.iter().map(|p| p.name_length as f64).collect()
}

/// Highest mean first.
pub fn name_length_by_category(products: &[Product]) -> Vec<NameLengthStats> {
    let mut out: Vec<NameLengthStats> = by_category(products)
        .into_iter()
        .map(|(category, rows)| {
            let v = lengths(&rows);
            NameLengthStats {
                category: s!(category),
                mean: stats::mean(&v),
                median: stats::median(&v),
                std: stats::std_dev(&v),
                count: v.len(),
            }
        })
        .collect();
    out.sort_by(|a, b| stats::desc_nan_last(a.mean, b.mean));
    out
}

/// Mean name length for all four segments; NaN for an empty one.
pub fn name_length_by_segment(products: &[Product]) -> Vec<(PriceSegment, f64)> {
    let groups = by_segment(products);
    PriceSegment::ALL
        .iter()
        .map(|seg| (*seg, stats::mean(&lengths(&groups[seg.index()]))))
        .collect()
}

pub(super) fn report(products: &[Product]) -> Report {
    let per_cat = name_length_by_category(products);
    let per_seg = name_length_by_segment(products);

    let rows: Vec<Vec<String>> = per_cat
        .iter()
        .map(|s| row![s.category, fmt_fixed(s.mean, 2), fmt_fixed(s.median, 1), fmt_fixed(s.std, 2), s.count])
        .collect();
    let mut body = s!("--- Average Product Name Length by Category ---\n");
    body.push_str(&table::render(&row!["Category", "mean", "median", "std", "count"], &rows));
    body.push_str("\nAverage Name Length by Price Segment:\n");
    body.push_str(&table::render(&row!["Price_Segment", "Name_Length"], &segment_rows(&per_seg, 2)));

    let bars = per_seg
        .iter()
        .zip(palette::magma(per_seg.len()))
        .map(|((seg, mean), color)| Bar { label: s!(seg.label()), value: *mean, color })
        .collect();

    Report {
        kind: AnalysisKind::NameLength,
        heading: s!("5. Product Detail Analysis (Name Length Proxy)"),
        body,
        chart: Chart {
            title: s!("Average Name Length by Price Segment"),
            x_label: s!("Price Segment"),
            y_label: s!("Average Product Name Length"),
            kind: ChartKind::VBar { bars, rotate_labels: true },
            legend: Vec::new(),
            value_max: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::product;
    use super::*;

    #[test]
    fn per_category_sorted_by_mean() {
        let ps = vec![
            product("Toys", "ab", 1.0, 0.0, 0),
            product("Toys", "abcd", 1.0, 0.0, 0),
            product("Tools", "abcdefgh", 1.0, 0.0, 0),
        ];
        let s = name_length_by_category(&ps);
        assert_eq!(s[0].category, "Tools");
        assert_eq!(s[0].count, 1);
        assert_eq!(s[1].mean, 3.0);
        assert_eq!(s[1].median, 3.0);
    }

    #[test]
    fn empty_segments_are_nan() {
        let ps = vec![product("Toys", "abc", 5.0, 0.0, 0), product("Toys", "abcde", 7.0, 0.0, 0)];
        let seg = name_length_by_segment(&ps);
        assert_eq!(seg.len(), 4);
        assert_eq!(seg[0], (PriceSegment::Budget, 4.0));
        assert!(seg[1].1.is_nan() && seg[2].1.is_nan() && seg[3].1.is_nan());
    }

    #[test]
    fn chart_is_four_rotated_bars() {
        let r = report(&[product("Toys", "abc", 5.0, 0.0, 0)]);
        let ChartKind::VBar { bars, rotate_labels } = &r.chart.kind else { panic!("not a bar chart") };
        assert!(*rotate_labels);
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[0].label, "Budget (<$10)");
    }
}
