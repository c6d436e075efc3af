// src/analysis/best_value.rs
use crate::chart::{palette, Bar, Chart, ChartKind};
use crate::core::text::{fmt_fixed, fmt_float};
use crate::model::Product;

use super::{by_category, stats, table, AnalysisKind, Report};

#[derive(Clone, Debug, PartialEq)]
pub struct BestValue {
    pub category: String,
    pub name: String,
    pub price: f64,
    pub reviews: i64,
    pub value_metric: f64,
}

/// Reviews per dollar. A zero price gives 0 (not infinity); 0 / 0 stays NaN.
pub fn value_metric(reviews: i64, price: f64) -> f64 {
    let v = reviews as f64 / price;
    if v.is_infinite() { 0.0 } else { v }
}

/// Per category the first row with the highest metric, best first.
/// Categories where no row has a metric are left out.
pub fn best_value(products: &[Product]) -> Vec<BestValue> {
    let mut out: Vec<BestValue> = by_category(products)
        .into_iter()
        .filter_map(|(category, rows)| {
            let mut best: Option<(&Product, f64)> = None;
            for p in rows {
                let m = value_metric(p.reviews, p.price);
                if m.is_nan() {
                    continue;
                }
                if best.is_none_or(|(_, b)| m > b) {
                    best = Some((p, m));
                }
            }
            best.map(|(p, m)| BestValue {
                category: s!(category),
                name: p.name.clone(),
                price: p.price,
                reviews: p.reviews,
                value_metric: m,
            })
        })
        .collect();
    out.sort_by(|a, b| stats::desc_nan_last(a.value_metric, b.value_metric));
    out
}

pub(super) fn report(products: &[Product]) -> Report {
    let best = best_value(products);

    let rows: Vec<Vec<String>> = best
        .iter()
        .map(|b| row![b.category, b.name, fmt_float(b.price), b.reviews, fmt_fixed(b.value_metric, 4)])
        .collect();
    let body = join!(
        "--- Best Value Product in Each Category (Highest Reviews/Price) ---\n",
        &table::render(&row!["Category", "Name", "Price", "Reviews", "Value_Metric"], &rows)
    );

    let colors = palette::viridis(best.len());
    let bars = best
        .iter()
        .zip(colors)
        .map(|(b, color)| Bar { label: b.category.clone(), value: b.value_metric, color })
        .collect();

    Report {
        kind: AnalysisKind::BestValue,
        heading: s!("4. Best Value Metric (Reviews per Dollar)"),
        body,
        chart: Chart {
            title: s!("Best Value Metric (Reviews/Price) by Category"),
            x_label: s!("Max Value Metric (Reviews per Dollar)"),
            y_label: s!("Category"),
            kind: ChartKind::HBar(bars),
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
    fn metric_edges() {
        assert_eq!(value_metric(10, 5.0), 2.0);
        assert_eq!(value_metric(3, 0.0), 0.0);
        assert!(value_metric(0, 0.0).is_nan());
    }

    #[test]
    fn first_max_per_category_best_first() {
        let ps = vec![
            product("Toys", "kite", 2.0, 0.0, 4),
            product("Toys", "ball", 1.0, 0.0, 2),
            product("Tools", "saw", 10.0, 0.0, 50),
            product("Tools", "free", 0.0, 0.0, 0),
        ];
        let b = best_value(&ps);
        assert_eq!(b.len(), 2);
        assert_eq!((b[0].category.as_str(), b[0].name.as_str(), b[0].value_metric), ("Tools", "saw", 5.0));
        // tie at 2.0: the earlier row wins
        assert_eq!(b[1].name, "kite");
    }

    #[test]
    fn all_nan_category_is_dropped() {
        let ps = vec![product("Toys", "free", 0.0, 0.0, 0)];
        assert!(best_value(&ps).is_empty());
        assert!(matches!(report(&ps).chart.kind, ChartKind::HBar(ref b) if b.is_empty()));
    }
}
