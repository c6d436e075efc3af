// src/transform/report.rs
use std::fmt;

use crate::core::text::{ellipsize, fmt_float};
use crate::model::Product;

/// What the transform stage saw and did, printed by the runner.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformReport {
    pub shape_in: (usize, usize),
    pub missing_in: Vec<(String, usize)>,
    pub price_missing: usize,
    pub shape_clean: (usize, usize),
    pub bins: Option<[f64; 5]>,
    pub shape_out: (usize, usize),
}

impl TransformReport {
    pub fn dropped(&self) -> usize {
        self.shape_in.0.saturating_sub(self.shape_clean.0)
    }
}

impl fmt::Display for TransformReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial shape: {:?}", self.shape_in)?;
        writeln!(f, "Missing values per column:")?;
        let w = self.missing_in.iter().map(|(c, _)| c.len()).max().unwrap_or(0);
        for (col, n) in &self.missing_in {
            writeln!(f, "  {col:<w$}  {n}")?;
        }
        writeln!(f, "Unreadable prices: {}", self.price_missing)?;
        writeln!(f, "Shape after cleaning: {:?} ({} rows dropped)", self.shape_clean, self.dropped())?;
        match &self.bins {
            Some(b) => {
                let edges: Vec<String> = b.iter().map(|v| fmt_float(*v)).collect();
                writeln!(f, "Feature: Price_Segment, bins [{}]", edges.join(", "))?;
            }
            None => writeln!(f, "Feature: Price_Segment, no rows to bin")?,
        }
        writeln!(f, "Feature: Name_Length")?;
        writeln!(f, "Feature: Price_Per_Char")?;
        write!(f, "Final shape: {:?}", self.shape_out)
    }
}

const HEAD_ROWS: usize = 5;
const HEAD_CELL_MAX: usize = 30;

/// Final shape, column types and the first rows of the products table.
pub fn summary(products: &[Product]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Final shape: ({}, {})\n", products.len(), Product::HEADERS.len()));

    out.push_str("Column types:\n");
    let types = ["text", "text", "float", "float", "int", "text", "category", "int", "float"];
    let w = Product::HEADERS.iter().map(|h| h.len()).max().unwrap_or(0);
    for (h, t) in Product::HEADERS.iter().zip(types) {
        out.push_str(&format!("  {h:<w$}  {t}\n"));
    }

    out.push_str(&format!("First {} rows:\n", HEAD_ROWS.min(products.len())));
    let rows: Vec<Vec<String>> = products
        .iter()
        .take(HEAD_ROWS)
        .map(|p| p.to_row().iter().map(|c| ellipsize(c, HEAD_CELL_MAX)).collect())
        .collect();
    out.push_str(&crate::analysis::table::render(&Product::headers(), &rows));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_missing_and_bins() {
        let r = TransformReport {
            shape_in: (4, 6),
            missing_in: vec![(s!("Name"), 1), (s!("Price"), 2)],
            price_missing: 2,
            shape_clean: (2, 6),
            bins: Some([0.0, 10.0, 50.0, 200.0, 201.0]),
            shape_out: (2, 9),
        };
        let text = r.to_string();
        assert!(text.contains("Initial shape: (4, 6)"));
        assert!(text.contains("(2 rows dropped)"));
        assert!(text.contains("bins [0.0, 10.0, 50.0, 200.0, 201.0]"));
        assert!(text.ends_with("Final shape: (2, 9)"));
    }
}
