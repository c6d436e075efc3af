// src/model.rs
//
// Typed records for the two pipeline tables.
//
// - Listing: one scraped product card, every field still a string
//            (`Category, Name, Price, Rating, Reviews, URL`).
// - Product: one cleaned + engineered row
//            (`… , Price_Segment, Name_Length, Price_Per_Char`).
//
// Conversions to/from `store::DataSet` rows live here so the stages
// never index columns by position.

use std::error::Error;
use std::fmt;

use crate::core::text::fmt_float;
use crate::store::DataSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub url: String,
}

impl Category {
    pub fn new(name: &str, url: &str) -> Self {
        Self { name: s!(name), url: s!(url) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub category: String,
    pub name: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
    pub url: String,
}

impl Listing {
    pub const HEADERS: [&'static str; 6] = ["Category", "Name", "Price", "Rating", "Reviews", "URL"];

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.name.clone(),
            self.price.clone(),
            self.rating.clone(),
            self.reviews.clone(),
            self.url.clone(),
        ]
    }
}

/// Fixed price buckets, in label order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriceSegment {
    Budget,
    MidRange,
    Premium,
    HighEnd,
}

impl PriceSegment {
    pub const ALL: [PriceSegment; 4] = [
        PriceSegment::Budget,
        PriceSegment::MidRange,
        PriceSegment::Premium,
        PriceSegment::HighEnd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceSegment::Budget => "Budget (<$10)",
            PriceSegment::MidRange => "Mid-Range ($10-50)",
            PriceSegment::Premium => "Premium ($50-200)",
            PriceSegment::HighEnd => "High-End (>$200)",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|seg| seg.label() == s.trim())
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PriceSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub category: Option<String>,
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: i64,
    pub url: String,
    pub segment: Option<PriceSegment>,
    pub name_length: usize,
    pub price_per_char: f64,
}

impl Product {
    pub const HEADERS: [&'static str; 9] = [
        "Category", "Name", "Price", "Rating", "Reviews", "URL",
        "Price_Segment", "Name_Length", "Price_Per_Char",
    ];

    pub fn headers() -> Vec<String> {
        Self::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Grouping key; rows with no category group under "".
    pub fn category_key(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.category.clone().unwrap_or_default(),
            self.name.clone(),
            fmt_float(self.price),
            fmt_float(self.rating),
            self.reviews.to_string(),
            self.url.clone(),
            self.segment.map(|s| s!(s.label())).unwrap_or_default(),
            self.name_length.to_string(),
            fmt_float(self.price_per_char),
        ]
    }

    /// Read the transformed table back into typed rows.
    /// Columns are located by header name; unparsable numbers read as NaN / 0.
    pub fn from_dataset(ds: &DataSet) -> Result<Vec<Product>, Box<dyn Error>> {
        let col = |name: &str| -> Result<usize, Box<dyn Error>> {
            ds.column(name).ok_or_else(|| format!("Column '{name}' missing from products table").into())
        };
        let (c_cat, c_name, c_price, c_rating, c_reviews, c_url) = (
            col("Category")?, col("Name")?, col("Price")?,
            col("Rating")?, col("Reviews")?, col("URL")?,
        );
        let (c_seg, c_len, c_ppc) = (col("Price_Segment")?, col("Name_Length")?, col("Price_Per_Char")?);

        let cell = |row: &[String], i: usize| -> String {
            row.get(i).map(|c| c.trim().to_string()).unwrap_or_default()
        };
        let float = |row: &[String], i: usize| -> f64 {
            cell(row, i).parse::<f64>().unwrap_or(f64::NAN)
        };

        let mut out = Vec::with_capacity(ds.rows.len());
        for row in &ds.rows {
            let category = cell(row, c_cat);
            // Name is kept exactly as scraped; its length is a feature
            let name = row.get(c_name).cloned().unwrap_or_default();
            let name_length = cell(row, c_len)
                .parse::<usize>()
                .unwrap_or_else(|_| name.chars().count());
            out.push(Product {
                category: if category.is_empty() { None } else { Some(category) },
                price: float(row, c_price),
                rating: float(row, c_rating),
                reviews: cell(row, c_reviews)
                    .parse::<f64>()
                    .map(|v| v as i64)
                    .unwrap_or(0),
                url: cell(row, c_url),
                segment: PriceSegment::from_label(&cell(row, c_seg)),
                name_length,
                price_per_char: float(row, c_ppc),
                name,
            });
        }
        Ok(out)
    }

    pub fn to_dataset(products: &[Product]) -> DataSet {
        DataSet {
            headers: Some(Self::headers()),
            rows: products.iter().map(|p| p.to_row()).collect(),
        }
    }
}
