// src/transform/clean.rs
use std::error::Error;

use crate::config::consts::NO_URL;
use crate::store::DataSet;

/// Cell texts that read as "missing" (the usual CSV NA spellings).
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_na(cell: &str) -> bool {
    NA_TOKENS.contains(&cell)
}

/// One row after cleaning; numbers are numbers, critical fields present.
#[derive(Clone, Debug, PartialEq)]
pub struct CleanRecord {
    pub category: Option<String>,
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: i64,
    pub url: String,
}

/// `US$1,299.99` → 1299.99. Only ASCII digits and '.' survive;
/// anything that still isn't a number (no digits, two dots) is missing.
pub fn clean_price(raw: Option<&str>) -> Option<f64> {
    let raw = raw.filter(|s| !is_na(s))?;
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    cleaned.parse::<f64>().ok()
}

/// Non-numeric or missing → 0.0
pub fn coerce_rating(cell: Option<&str>) -> f64 {
    match parse_numeric(cell) {
        Some(v) => v,
        None => 0.0,
    }
}

/// Non-numeric or missing → 0; fractional counts truncate.
pub fn coerce_reviews(cell: Option<&str>) -> i64 {
    match parse_numeric(cell) {
        Some(v) => v as i64,
        None => 0,
    }
}

fn parse_numeric(cell: Option<&str>) -> Option<f64> {
    let s = cell.filter(|s| !is_na(s))?.trim();
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Missing cells per column, in column order.
pub fn missing_counts(ds: &DataSet) -> Vec<(String, usize)> {
    let Some(headers) = &ds.headers else { return Vec::new() };
    headers
        .iter()
        .enumerate()
        .map(|(ci, h)| {
            let n = ds.rows.iter().filter(|r| r.get(ci).map(|c| is_na(c)).unwrap_or(true)).count();
            (h.clone(), n)
        })
        .collect()
}

const REQUIRED: [&str; 6] = ["Category", "Name", "Price", "Rating", "Reviews", "URL"];

/// Clean the raw listings table.
/// Returns the surviving rows and how many prices could not be read.
pub fn clean(ds: &DataSet) -> Result<(Vec<CleanRecord>, usize), Box<dyn Error>> {
    let mut cols = [0usize; 6];
    for (slot, name) in cols.iter_mut().zip(REQUIRED) {
        *slot = ds.column(name).ok_or_else(|| format!("Column '{name}' missing from raw table"))?;
    }
    let [c_cat, c_name, c_price, c_rating, c_reviews, c_url] = cols;

    let mut price_missing = 0usize;
    let mut out = Vec::with_capacity(ds.rows.len());

    for row in &ds.rows {
        let get = |i: usize| row.get(i).map(|s| s.as_str());
        let present = |i: usize| get(i).filter(|s| !is_na(s)).map(|s| s.to_string());

        let price = clean_price(get(c_price));
        if price.is_none() { price_missing += 1; }

        // Name and Price are critical
        let (Some(name), Some(price)) = (present(c_name), price) else { continue };

        out.push(CleanRecord {
            category: present(c_cat),
            name,
            price,
            rating: coerce_rating(get(c_rating)),
            reviews: coerce_reviews(get(c_reviews)),
            url: present(c_url).unwrap_or_else(|| s!(NO_URL)),
        });
    }

    logf!("Clean: {} of {} rows kept, {} prices unreadable", out.len(), ds.rows.len(), price_missing);
    Ok((out, price_missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_currency_and_grouping() {
        assert_eq!(clean_price(Some("$19.99")), Some(19.99));
        assert_eq!(clean_price(Some("US$1,299.00")), Some(1299.0));
        assert_eq!(clean_price(Some("£10.50")), Some(10.5));
    }

    #[test]
    fn price_missing_when_unreadable() {
        assert_eq!(clean_price(Some("N/A")), None);
        assert_eq!(clean_price(None), None);
        assert_eq!(clean_price(Some("Sold out")), None);
        // a range glues into two dots
        assert_eq!(clean_price(Some("$1.99-$2.50")), None);
    }

    #[test]
    fn rating_and_reviews_fall_back_to_zero() {
        assert_eq!(coerce_rating(Some("N/A")), 0.0);
        assert_eq!(coerce_rating(Some("4.5")), 4.5);
        assert_eq!(coerce_reviews(Some("0")), 0);
        assert_eq!(coerce_reviews(Some("12.7")), 12);
        assert_eq!(coerce_reviews(Some("1,024")), 0);
        assert_eq!(coerce_reviews(None), 0);
    }

    #[test]
    fn drops_rows_without_name_or_price() {
        let ds = DataSet::new(
            row!["Category", "Name", "Price", "Rating", "Reviews", "URL"],
            vec![
                row!["Tools", "Saw", "$9.99", "N/A", "0", "N/A"],
                row!["Tools", "", "$5.00", "N/A", "0", "https://x"],
                row!["Toys", "Kite", "N/A", "N/A", "0", "https://y"],
                row!["", "Ball", "$1", "N/A", "3"],
            ],
        );
        let (recs, price_missing) = clean(&ds).unwrap();
        assert_eq!(price_missing, 1);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].url, NO_URL);
        assert_eq!(recs[1].category, None);
        assert_eq!(recs[1].reviews, 3);
        assert_eq!(recs[1].url, NO_URL);
    }

    #[test]
    fn counts_missing_per_column() {
        let ds = DataSet::new(row!["Name", "Price"], vec![row!["A", "N/A"], row!["", "1"], row!["B"]]);
        assert_eq!(missing_counts(&ds), vec![(s!("Name"), 1), (s!("Price"), 2)]);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let ds = DataSet::new(row!["Name", "Price"], vec![]);
        assert!(clean(&ds).unwrap_err().to_string().contains("Category"));
    }
}
