// src/sql.rs
//
// Bulk load of the products table into SQLite.
//
//   open → create_schema (drop + create) → insert (one transaction) → validate (COUNT)

use std::{error::Error, fmt, fs, path::Path};

use rusqlite::{params, Connection, Transaction};

use crate::model::Product;

const INSERT_COLUMNS: [&str; 9] = [
    "Category", "Name", "Price", "Rating", "Reviews", "URL", "Price_Segment", "Name_Length", "Price_Per_Char",
];

/// `[A-Za-z_][A-Za-z0-9_]*`; the name is spliced into DDL, so nothing else passes.
pub fn valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rows the database will take: Category and Name must both be present.
pub fn loadable(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.category.as_deref().is_some_and(|c| !c.is_empty()) && !p.name.is_empty())
        .collect()
}

/// DECIMAL(p, s) binding: round to `scale` places; NaN / ±inf become NULL.
fn decimal(v: f64, scale: i32) -> Option<f64> {
    if !v.is_finite() {
        return None;
    }
    let f = 10f64.powi(scale);
    Some((v * f).round() / f)
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Expected vs actual row count after a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validation {
    pub expected: usize,
    pub actual: usize,
}

impl Validation {
    pub fn matches(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Validation ---")?;
        writeln!(f, "Expected rows (from CSV): {}", self.expected)?;
        writeln!(f, "Actual rows (in database): {}", self.actual)?;
        if self.matches() {
            write!(f, "Validation successful: Row counts match.")
        } else {
            write!(f, "Validation mismatch: Row counts do not match!")
        }
    }
}

pub struct Loader {
    conn: Connection,
    table: String,
}

impl Loader {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path, table: &str) -> Result<Self, Box<dyn Error>> {
        check_table(table)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)
            .map_err(|e| format!("Connection Error: {e} ({})", path.display()))?;
        logf!("SQL: connected to {}", path.display());
        Ok(Self { conn, table: s!(table) })
    }

    pub fn open_in_memory(table: &str) -> Result<Self, Box<dyn Error>> {
        check_table(table)?;
        Ok(Self { conn: Connection::open_in_memory()?, table: s!(table) })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Fresh table on every run.
    pub fn create_schema(&self) -> rusqlite::Result<()> {
        let t = &self.table;
        self.conn.execute_batch(&format!(
            r#"
            DROP TABLE IF EXISTS {t};
            CREATE TABLE {t} (
                ProductID INTEGER PRIMARY KEY AUTOINCREMENT,
                Category VARCHAR(50),
                Name VARCHAR(500) NOT NULL,
                Price DECIMAL(10, 2),
                Rating DECIMAL(3, 2),
                Reviews INT,
                URL VARCHAR(1000),
                Price_Segment VARCHAR(50),
                Name_Length INT,
                Price_Per_Char DECIMAL(10, 4)
            );
            "#
        ))?;
        logf!("SQL: table {t} created");
        Ok(())
    }

    /// All rows or none: any failing row rolls the whole batch back.
    pub fn insert(&mut self, products: &[Product]) -> Result<usize, Box<dyn Error>> {
        let tx = self.conn.transaction()?;
        match insert_rows(&tx, &self.table, products) {
            Ok(n) => {
                tx.commit()?;
                logf!("SQL: inserted {n} rows into {}", self.table);
                Ok(n)
            }
            Err(e) => {
                let _ = tx.rollback();
                loge!("SQL: insert into {} failed, rolled back: {e}", self.table);
                Err(format!("Error during data insertion: {e}").into())
            }
        }
    }

    pub fn count(&self) -> rusqlite::Result<usize> {
        let n: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", self.table), [], |row| row.get(0))?;
        Ok(n as usize)
    }

    pub fn validate(&self, expected: usize) -> rusqlite::Result<Validation> {
        Ok(Validation { expected, actual: self.count()? })
    }
}

fn check_table(table: &str) -> Result<(), Box<dyn Error>> {
    if valid_table_name(table) {
        Ok(())
    } else {
        Err(format!("Invalid table name: '{table}'").into())
    }
}

fn insert_rows(tx: &Transaction, table: &str, products: &[Product]) -> rusqlite::Result<usize> {
    let placeholders = vec!["?"; INSERT_COLUMNS.len()].join(", ");
    let sql = format!("INSERT INTO {table} ({}) VALUES ({placeholders})", INSERT_COLUMNS.join(", "));
    let mut stmt = tx.prepare(&sql)?;
    let mut n = 0;
    for p in products {
        n += stmt.execute(params![
            p.category.as_deref(),
            p.name,
            decimal(p.price, 2),
            decimal(p.rating, 2),
            p.reviews,
            non_empty(&p.url),
            p.segment.map(|s| s.label()),
            p.name_length as i64,
            decimal(p.price_per_char, 4),
        ])?;
    }
    Ok(n)
}
