// src/analysis/top_reviewed.rs
use crate::chart::{Bar, Chart, ChartKind};
use crate::core::text::fmt_float;
use crate::model::Product;

use super::{hue_legend, hue_of, table, AnalysisKind, Report};

/// The `n` most reviewed rows; equal counts keep table order.
pub fn top_reviewed(products: &[Product], n: usize) -> Vec<&Product> {
    let mut rows: Vec<&Product> = products.iter().collect();
    rows.sort_by(|a, b| b.reviews.cmp(&a.reviews));
    rows.truncate(n);
    rows
}

pub(super) fn report(products: &[Product], n: usize) -> Report {
    let top = top_reviewed(products, n);

    let rows: Vec<Vec<String>> = top
        .iter()
        .map(|p| row![p.category_key(), p.name, p.reviews, fmt_float(p.price), fmt_float(p.rating)])
        .collect();
    let body = join!(
        &format!("--- Top {n} Products by Review Count ---\n"),
        &table::render(&row!["Category", "Name", "Reviews", "Price", "Rating"], &rows)
    );

    // Legend only for the categories that made the cut, colors as elsewhere
    let all = hue_legend(products);
    let legend: Vec<_> = all
        .iter()
        .filter(|(c, _)| top.iter().any(|p| p.category_key() == c))
        .cloned()
        .collect();
    let bars = top
        .iter()
        .map(|p| Bar { label: p.name.clone(), value: p.reviews as f64, color: hue_of(&all, p.category.as_deref()) })
        .collect();

    Report {
        kind: AnalysisKind::TopReviewed,
        heading: format!("3. Top {n} Most Reviewed Products"),
        body,
        chart: Chart {
            title: format!("Top {n} Products by Review Count"),
            x_label: s!("Reviews Count"),
            y_label: s!("Product Name"),
            kind: ChartKind::HBar(bars),
            legend,
            value_max: None,
        },
    }
}
