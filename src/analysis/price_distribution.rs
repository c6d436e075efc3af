// src/analysis/price_distribution.rs
use crate::chart::{palette, BoxGroup, BoxStats, Chart, ChartKind};
use crate::config::consts::PRICE_CLIP_QUANTILE;
use crate::core::text::fmt_fixed;
use crate::model::Product;

use super::{by_category, hue_order, stats, table, AnalysisKind, Report};

#[derive(Clone, Debug, PartialEq)]
pub struct PriceStats {
    pub category: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-category price summary, highest mean first.
pub fn price_distribution(products: &[Product]) -> Vec<PriceStats> {
    let mut out: Vec<PriceStats> = by_category(products)
        .into_iter()
        .map(|(category, rows)| {
            let prices: Vec<f64> = rows.iter().map(|p| p.price).collect();
            PriceStats {
                category: s!(category),
                count: stats::count(&prices),
                mean: stats::mean(&prices),
                median: stats::median(&prices),
                std: stats::std_dev(&prices),
                min: stats::min(&prices),
                max: stats::max(&prices),
            }
        })
        .collect();
    out.sort_by(|a, b| stats::desc_nan_last(a.mean, b.mean));
    out
}

/// Upper y limit of the box plot: the 0.95 quantile of every price.
pub fn price_clip(products: &[Product]) -> f64 {
    let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
    stats::quantile(&prices, PRICE_CLIP_QUANTILE)
}

pub(super) fn report(products: &[Product]) -> Report {
    let summary = price_distribution(products);

    let headers = row!["Category", "count", "mean", "median", "std", "min", "max"];
    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|s| {
            row![
                s.category,
                s.count,
                fmt_fixed(s.mean, 2),
                fmt_fixed(s.median, 2),
                fmt_fixed(s.std, 2),
                fmt_fixed(s.min, 2),
                fmt_fixed(s.max, 2)
            ]
        })
        .collect();
    let body = join!("--- Summary Statistics (Price per Category) ---\n", &table::render(&headers, &rows));

    let groups = by_category(products);
    let boxes = hue_order(products)
        .into_iter()
        .enumerate()
        .map(|(i, cat)| {
            let prices: Vec<f64> = groups.get(cat).map(|g| g.iter().map(|p| p.price).collect()).unwrap_or_default();
            BoxGroup { label: s!(cat), color: palette::categorical(i), stats: BoxStats::from_values(&prices) }
        })
        .collect();

    let clip = price_clip(products);
    Report {
        kind: AnalysisKind::PriceDistribution,
        heading: s!("1. Price Distribution per Category"),
        body,
        chart: Chart {
            title: s!("Price Distribution by Category (Box Plot)"),
            x_label: s!("Category"),
            y_label: s!("Price (USD)"),
            kind: ChartKind::Box(boxes),
            legend: Vec::new(),
            value_max: if clip > 0.0 { Some(clip) } else { None },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::product;
    use super::*;

    #[test]
    fn sorted_by_mean_desc() {
        let ps = vec![
            product("Toys", "a", 10.0, 0.0, 0),
            product("Toys", "b", 20.0, 0.0, 0),
            product("Tools", "c", 100.0, 0.0, 0),
            product("", "d", 999.0, 0.0, 0),
        ];
        let s = price_distribution(&ps);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].category, "Tools");
        assert_eq!(s[0].count, 1);
        assert!(s[0].std.is_nan());
        assert_eq!(s[1].mean, 15.0);
        assert_eq!(s[1].median, 15.0);
        assert!((s[1].std - 50f64.sqrt()).abs() < 1e-9);
        assert_eq!((s[1].min, s[1].max), (10.0, 20.0));
    }

    #[test]
    fn clip_is_95th_percentile_of_all_rows() {
        let ps: Vec<Product> = (1..=21).map(|i| product("Toys", "x", i as f64, 0.0, 0)).collect();
        assert_eq!(price_clip(&ps), 20.0);
    }

    #[test]
    fn chart_is_clipped_box_plot() {
        let ps = vec![product("Toys", "a", 10.0, 0.0, 0), product("Tools", "b", 30.0, 0.0, 0)];
        let r = report(&ps);
        assert!(matches!(r.chart.kind, ChartKind::Box(ref g) if g.len() == 2 && g[0].label == "Toys"));
        assert_eq!(r.chart.value_max, Some(29.0));
        assert!(r.body.contains("Summary Statistics"));
    }
}
