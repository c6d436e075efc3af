// src/transform/mod.rs
//
// Raw listings → cleaned, feature-engineered products.
//
//   load → clean (price text → number, rating/reviews coerced, critical NAs dropped)
//        → features (price segment, name length, price per char)
//
// Each step is a pure function over rows; `runner::transform` does the I/O.
pub mod clean;
pub mod features;
mod report;

pub use clean::{clean, clean_price, is_na, CleanRecord};
pub use features::{engineer, price_bins, segment_for};
pub use report::{summary, TransformReport};

use std::error::Error;

use crate::model::Product;
use crate::store::DataSet;

/// Clean + engineer in one go. Empty input yields no products and no bins.
pub fn transform(raw: &DataSet) -> Result<(Vec<Product>, TransformReport), Box<dyn Error>> {
    let missing_in = clean::missing_counts(raw);
    let (records, price_missing) = clean(raw)?;
    let shape_clean = (records.len(), raw.shape().1);
    let max_price = records.iter().map(|r| r.price).fold(f64::NAN, f64::max);
    let bins = if records.is_empty() { None } else { Some(price_bins(max_price)) };
    let products = engineer(records);

    let report = TransformReport {
        shape_in: raw.shape(),
        missing_in,
        price_missing,
        shape_clean,
        bins,
        shape_out: (products.len(), crate::model::Product::HEADERS.len()),
    };
    Ok((products, report))
}
