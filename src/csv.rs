// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
/// Blank lines are skipped; a quoted field may span lines.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    // Leading BOM from spreadsheet exports
    if chars.peek() == Some(&'\u{feff}') { chars.next(); }

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without newline (even if quotes were unterminated).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full table as text; headers are emitted only when present and requested.
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_and_crlf() {
        let text = "Category,Name,Price\r\nTools,\"Drill, 12V\",\"US$1,299.00\"\r\n\r\nToys,\"Say \"\"hi\"\"\",N/A";
        let rows = parse_rows(text, ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], row!["Tools", "Drill, 12V", "US$1,299.00"]);
        assert_eq!(rows[2], row!["Toys", "Say \"hi\"", "N/A"]);
    }

    #[test]
    fn keeps_trailing_empty_field() {
        let rows = parse_rows("a,b,\n", ',');
        assert_eq!(rows, vec![row!["a", "b", ""]]);
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "d\"e"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"d\"\"e\"\n");

        let mut tsv = Vec::new();
        write_row(&mut tsv, &["b,c", "x"], '\t').unwrap();
        assert_eq!(String::from_utf8(tsv).unwrap(), "b,c\tx\n");
    }

    #[test]
    fn export_string_respects_header_toggle() {
        let headers = Some(row!["A", "B"]);
        let rows = vec![row!["1", "2"]];
        assert_eq!(to_export_string(&headers, &rows, true, ','), "A,B\n1,2\n");
        assert_eq!(to_export_string(&headers, &rows, false, ','), "1,2\n");
    }
}
