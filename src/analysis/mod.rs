// src/analysis/mod.rs
//
// Exploratory reports over the products table.
//
// Each analysis is a pure function `&[Product] → typed result`, plus a
// `report` that renders the result as text tables and one `Chart`.
// Rows without a category take no part in per-category groups.
pub mod stats;
pub mod table;

mod best_value;
mod name_length;
mod price_distribution;
mod rating_price;
mod top_reviewed;

pub use best_value::{best_value, value_metric, BestValue};
pub use name_length::{name_length_by_category, name_length_by_segment, NameLengthStats};
pub use price_distribution::{price_clip, price_distribution, PriceStats};
pub use rating_price::{rating_price, RatingPrice};
pub use top_reviewed::top_reviewed;

use std::collections::BTreeMap;
use std::fmt;

use crate::chart::{palette, Chart, Rgb};
use crate::model::{PriceSegment, Product};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    PriceDistribution,
    RatingPrice,
    TopReviewed,
    BestValue,
    NameLength,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 5] = [
        AnalysisKind::PriceDistribution,
        AnalysisKind::RatingPrice,
        AnalysisKind::TopReviewed,
        AnalysisKind::BestValue,
        AnalysisKind::NameLength,
    ];

    /// Short tab title
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisKind::PriceDistribution => "Price distribution",
            AnalysisKind::RatingPrice => "Rating vs price",
            AnalysisKind::TopReviewed => "Top reviewed",
            AnalysisKind::BestValue => "Best value",
            AnalysisKind::NameLength => "Name length",
        }
    }

    /// CLI name and chart file stem
    pub fn slug(&self) -> &'static str {
        match self {
            AnalysisKind::PriceDistribution => "price-distribution",
            AnalysisKind::RatingPrice => "rating-price",
            AnalysisKind::TopReviewed => "top-reviewed",
            AnalysisKind::BestValue => "best-value",
            AnalysisKind::NameLength => "name-length",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One rendered analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub kind: AnalysisKind,
    pub heading: String,
    pub body: String,
    pub chart: Chart,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "## {}", self.heading)?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

pub fn run(kind: AnalysisKind, products: &[Product], top_n: usize) -> Report {
    logd!("Analysis: {} over {} rows", kind.slug(), products.len());
    match kind {
        AnalysisKind::PriceDistribution => price_distribution::report(products),
        AnalysisKind::RatingPrice => rating_price::report(products),
        AnalysisKind::TopReviewed => top_reviewed::report(products, top_n),
        AnalysisKind::BestValue => best_value::report(products),
        AnalysisKind::NameLength => name_length::report(products),
    }
}

pub fn run_all(products: &[Product], top_n: usize) -> Vec<Report> {
    AnalysisKind::ALL.iter().map(|k| run(*k, products, top_n)).collect()
}

/// Rows per category, ordered by category name.
pub(crate) fn by_category(products: &[Product]) -> BTreeMap<&str, Vec<&Product>> {
    let mut groups: BTreeMap<&str, Vec<&Product>> = BTreeMap::new();
    for p in products {
        if let Some(c) = p.category.as_deref() {
            groups.entry(c).or_default().push(p);
        }
    }
    groups
}

/// Rows per price segment, in segment order.
pub(crate) fn by_segment(products: &[Product]) -> [Vec<&Product>; 4] {
    let mut groups: [Vec<&Product>; 4] = Default::default();
    for p in products {
        if let Some(seg) = p.segment {
            groups[seg.index()].push(p);
        }
    }
    groups
}

/// Categories in the order they first appear; this is the hue order.
pub(crate) fn hue_order(products: &[Product]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for p in products {
        if let Some(c) = p.category.as_deref() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
    }
    seen
}

/// Hue legend for `products`, one tab10 color per category.
pub(crate) fn hue_legend(products: &[Product]) -> Vec<(String, Rgb)> {
    hue_order(products)
        .into_iter()
        .enumerate()
        .map(|(i, c)| (s!(c), palette::categorical(i)))
        .collect()
}

pub(crate) fn hue_of(legend: &[(String, Rgb)], category: Option<&str>) -> Rgb {
    category
        .and_then(|c| legend.iter().find(|(l, _)| l == c))
        .map(|(_, rgb)| *rgb)
        .unwrap_or(Rgb(127, 127, 127))
}

pub(crate) fn segment_rows(values: &[(PriceSegment, f64)], decimals: usize) -> Vec<Vec<String>> {
    values
        .iter()
        .map(|(seg, v)| row![seg.label(), crate::core::text::fmt_fixed(*v, decimals)])
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn slugs_resolve_case_insensitively() {
        assert_eq!(AnalysisKind::from_slug("Best-Value"), Some(AnalysisKind::BestValue));
        assert_eq!(AnalysisKind::from_slug("nope"), None);
    }

    #[test]
    fn hue_order_is_first_seen_and_skips_missing() {
        let ps = vec![
            product("Toys", "a", 1.0, 0.0, 0),
            product("", "b", 1.0, 0.0, 0),
            product("Sports", "c", 1.0, 0.0, 0),
            product("Toys", "d", 1.0, 0.0, 0),
        ];
        assert_eq!(hue_order(&ps), vec!["Toys", "Sports"]);
        assert_eq!(by_category(&ps).keys().copied().collect::<Vec<_>>(), vec!["Sports", "Toys"]);
    }

    #[test]
    fn every_report_has_banner_and_chart() {
        let ps = vec![
            product("Toys", "Kite", 5.0, 4.0, 10),
            product("Toys", "Robot arm kit", 80.0, 4.5, 3),
            product("Tools", "Drill", 45.0, 0.0, 0),
        ];
        for r in run_all(&ps, 5) {
            let text = r.to_string();
            assert!(text.contains(&"=".repeat(50)));
            assert!(text.contains(&r.heading));
            assert!(!r.chart.title.is_empty());
        }
    }
}
