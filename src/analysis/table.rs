// src/analysis/table.rs
//
// Plain-text tables for the console and the GUI report view.

/// Columns padded to their widest cell, two spaces apart.
/// The first column is left-aligned, the rest right-aligned.
pub fn render(headers: &[String], rows: &[Vec<String>]) -> String {
    let cols = headers.len().max(rows.iter().map(|r| r.len()).max().unwrap_or(0));
    let mut widths = vec![0usize; cols];
    for (i, h) in headers.iter().enumerate() {
        widths[i] = widths[i].max(h.chars().count());
    }
    for r in rows {
        for (i, c) in r.iter().enumerate() {
            widths[i] = widths[i].max(c.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[String]| {
        let mut l = String::new();
        for (i, w) in widths.iter().enumerate() {
            let c = cells.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = w.saturating_sub(c.chars().count());
            if i > 0 {
                l.push_str("  ");
            }
            if i == 0 {
                l.push_str(c);
                l.extend(std::iter::repeat_n(' ', pad));
            } else {
                l.extend(std::iter::repeat_n(' ', pad));
                l.push_str(c);
            }
        }
        out.push_str(l.trim_end());
        out.push('\n');
    };

    line(headers);
    for r in rows {
        line(r);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_aligns() {
        let t = render(&row!["Category", "n"], &[row!["Toys", "12"], row!["Electronics", "3"]]);
        let lines: Vec<&str> = t.lines().collect();
        assert_eq!(lines[0], "Category      n");
        assert_eq!(lines[1], "Toys         12");
        assert_eq!(lines[2], "Electronics   3");
    }
}
