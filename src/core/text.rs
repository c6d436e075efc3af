// src/core/text.rs
//
// Small string helpers shared by the specs and the stages.

/// Trim every text piece and glue them with no separator.
/// `<span>US$</span> <b>12.99</b>` → `US$12.99`
pub fn strip_join<'a, I>(pieces: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = s!();
    for p in pieces {
        out.push_str(p.trim());
    }
    out
}

/// Shortest round-trip float text, always with a decimal part.
/// 0 → "0.0", 19.99 → "19.99", NaN → "" (empty cell).
pub fn fmt_float(v: f64) -> String {
    if v.is_nan() {
        return s!();
    }
    let s = v.to_string();
    if v.is_finite() && !s.contains('.') && !s.contains('e') {
        join!(&s, ".0")
    } else {
        s
    }
}

/// Fixed-precision float for reports; NaN prints as "NaN".
pub fn fmt_fixed(v: f64, decimals: usize) -> String {
    if v.is_nan() { s!("NaN") } else { format!("{v:.decimals$}") }
}

/// Filesystem-safe stem: ASCII alnum kept, whitespace runs → '_', '-'/'_' kept.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

/// Cut to `max` chars, marking the cut with '…'.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s!(s);
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_join_glues_trimmed_pieces() {
        assert_eq!(strip_join(["  US$ ", "\n12.99 ", ""]), "US$12.99");
    }

    #[test]
    fn floats_keep_a_decimal_part() {
        assert_eq!(fmt_float(0.0), "0.0");
        assert_eq!(fmt_float(201.0), "201.0");
        assert_eq!(fmt_float(19.99), "19.99");
        assert_eq!(fmt_float(f64::NAN), "");
    }

    #[test]
    fn sanitize_collapses_spaces() {
        assert_eq!(sanitize_filename("Toys & Hobbies", "x"), "Toys_Hobbies");
        assert_eq!(sanitize_filename("???", "category"), "category");
    }

    #[test]
    fn ellipsize_marks_cut() {
        assert_eq!(ellipsize("abcdef", 4), "abc…");
        assert_eq!(ellipsize("abc", 4), "abc");
    }
}
