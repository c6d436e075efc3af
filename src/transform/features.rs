// src/transform/features.rs
use crate::model::{PriceSegment, Product};

use super::CleanRecord;

/// Segment edges: `[0, 10, 50, 200, top]` where `top` always clears the
/// most expensive row (at least 201).
pub fn price_bins(max_price: f64) -> [f64; 5] {
    let top = if max_price.is_nan() { 201.0 } else { (max_price + 1.0).max(201.0) };
    [0.0, 10.0, 50.0, 200.0, top]
}

/// Left-closed buckets: 10.0 is Mid-Range, 9.99 is Budget.
/// Prices outside `[bins[0], bins[4])` get no segment.
pub fn segment_for(price: f64, bins: &[f64; 5]) -> Option<PriceSegment> {
    bins.windows(2)
        .position(|w| price >= w[0] && price < w[1])
        .map(|i| PriceSegment::ALL[i])
}

pub fn engineer(records: Vec<CleanRecord>) -> Vec<Product> {
    let max_price = records.iter().map(|r| r.price).fold(f64::NAN, f64::max);
    let bins = price_bins(max_price);

    records
        .into_iter()
        .map(|r| {
            let name_length = r.name.chars().count();
            let price_per_char = if name_length > 0 { r.price / name_length as f64 } else { 0.0 };
            Product {
                segment: segment_for(r.price, &bins),
                category: r.category,
                name: r.name,
                price: r.price,
                rating: r.rating,
                reviews: r.reviews,
                url: r.url,
                name_length,
                price_per_char,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, price: f64) -> CleanRecord {
        CleanRecord {
            category: Some(s!("Tools")),
            name: s!(name),
            price,
            rating: 0.0,
            reviews: 0,
            url: s!("https://x"),
        }
    }

    #[test]
    fn top_edge_clears_max_price() {
        assert_eq!(price_bins(35.0)[4], 201.0);
        assert_eq!(price_bins(999.5)[4], 1000.5);
    }

    #[test]
    fn segments_are_left_closed() {
        let bins = price_bins(500.0);
        assert_eq!(segment_for(0.0, &bins), Some(PriceSegment::Budget));
        assert_eq!(segment_for(9.99, &bins), Some(PriceSegment::Budget));
        assert_eq!(segment_for(10.0, &bins), Some(PriceSegment::MidRange));
        assert_eq!(segment_for(50.0, &bins), Some(PriceSegment::Premium));
        assert_eq!(segment_for(200.0, &bins), Some(PriceSegment::HighEnd));
        assert_eq!(segment_for(500.0, &bins), Some(PriceSegment::HighEnd));
        assert_eq!(segment_for(-1.0, &bins), None);
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        let out = engineer(vec![rec("Café", 8.0), rec("", 3.0)]);
        assert_eq!(out[0].name_length, 4);
        assert_eq!(out[0].price_per_char, 2.0);
        assert_eq!(out[1].name_length, 0);
        assert_eq!(out[1].price_per_char, 0.0);
    }

    #[test]
    fn engineer_keeps_row_order_and_fields() {
        let out = engineer(vec![rec("Hammer", 12.0), rec("Saw", 250.0)]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "Hammer");
        assert_eq!(out[0].segment, Some(PriceSegment::MidRange));
        assert_eq!(out[1].segment, Some(PriceSegment::HighEnd));
        assert_eq!(out[1].category.as_deref(), Some("Tools"));
    }
}
