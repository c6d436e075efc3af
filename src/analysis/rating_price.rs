// src/analysis/rating_price.rs
use crate::chart::{Chart, ChartKind, Series};
use crate::core::text::fmt_fixed;
use crate::model::{PriceSegment, Product};

use super::{by_segment, hue_legend, segment_rows, stats, table, AnalysisKind, Report};

#[derive(Clone, Debug, PartialEq)]
pub struct RatingPrice {
    /// Pearson r over every row; NaN when undefined
    pub overall: f64,
    /// All four segments in label order
    pub by_segment: Vec<(PriceSegment, f64)>,
}

pub fn rating_price(products: &[Product]) -> RatingPrice {
    let ratings: Vec<f64> = products.iter().map(|p| p.rating).collect();
    let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
    let overall = stats::pearson(&ratings, &prices);

    let groups = by_segment(products);
    let by_segment = PriceSegment::ALL
        .iter()
        .map(|seg| {
            let g = &groups[seg.index()];
            let p: Vec<f64> = g.iter().map(|r| r.price).collect();
            let r: Vec<f64> = g.iter().map(|r| r.rating).collect();
            (*seg, stats::pearson(&p, &r))
        })
        .collect();

    RatingPrice { overall, by_segment }
}

pub(super) fn report(products: &[Product]) -> Report {
    let rp = rating_price(products);
    let overall = fmt_fixed(rp.overall, 3);

    let mut body = format!("Overall Pearson Correlation (Rating vs. Price): {overall}\n\n");
    body.push_str("Correlation by Price Segment:\n");
    body.push_str(&table::render(&row!["Price_Segment", "corr"], &segment_rows(&rp.by_segment, 3)));

    let legend = hue_legend(products);
    let series = legend
        .iter()
        .map(|(cat, color)| Series {
            label: cat.clone(),
            color: *color,
            points: products
                .iter()
                .filter(|p| p.category.as_deref() == Some(cat.as_str()))
                .map(|p| (p.price, p.rating))
                .collect(),
        })
        .collect();

    Report {
        kind: AnalysisKind::RatingPrice,
        heading: s!("2. Rating vs. Price Correlation"),
        body,
        chart: Chart {
            title: format!("Rating vs. Price (Correlation: {overall})"),
            x_label: s!("Price (USD)"),
            y_label: s!("Rating"),
            kind: ChartKind::Scatter(series),
            legend,
            value_max: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::product;
    use super::*;

    #[test]
    fn placeholder_ratings_give_nan() {
        // Scraped ratings are all the 0.0 placeholder
        let ps = vec![product("Toys", "a", 5.0, 0.0, 0), product("Toys", "b", 60.0, 0.0, 0)];
        let rp = rating_price(&ps);
        assert!(rp.overall.is_nan());
        assert_eq!(rp.by_segment.len(), 4);
        assert!(rp.by_segment.iter().all(|(_, r)| r.is_nan()));
        assert!(report(&ps).chart.title.ends_with("(Correlation: NaN)"));
    }

    #[test]
    fn segment_correlation_needs_two_rows() {
        let ps = vec![
            product("Toys", "a", 11.0, 3.0, 0),
            product("Tools", "b", 20.0, 4.0, 0),
            product("Tools", "c", 40.0, 5.0, 0),
            product("Toys", "d", 5.0, 1.0, 0),
        ];
        let rp = rating_price(&ps);
        assert!(rp.overall > 0.9);
        let mid = rp.by_segment[PriceSegment::MidRange.index()].1;
        assert!((mid - 0.9768500427657447).abs() < 1e-9);
        assert!(rp.by_segment[PriceSegment::Budget.index()].1.is_nan());
        assert!(rp.by_segment[PriceSegment::HighEnd.index()].1.is_nan());
    }

    #[test]
    fn scatter_has_one_series_per_category() {
        let ps = vec![product("Toys", "a", 1.0, 0.0, 0), product("Tools", "b", 2.0, 0.0, 0), product("Toys", "c", 3.0, 0.0, 0)];
        let r = report(&ps);
        let ChartKind::Scatter(series) = &r.chart.kind else { panic!("not a scatter") };
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].points, vec![(1.0, 0.0), (3.0, 0.0)]);
        assert_eq!(r.chart.legend.len(), 2);
    }
}
