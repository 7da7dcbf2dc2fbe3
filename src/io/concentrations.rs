// src/io/concentrations.rs

use std::fs::File;
use std::io::{self, BufRead};

use super::ImportError;

/// Parses (symbol, mg/mL) pairs from a delimited text export.
/// Accepts comma, semicolon or whitespace separated columns; header
/// lines and anything that is not "symbol number" is skipped.
pub fn parse(path: &str) -> Result<Vec<(String, f64)>, ImportError> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut pairs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(pair) = parse_line(&line) {
            pairs.push(pair);
        }
    }

    if pairs.is_empty() {
        return Err(ImportError::NoData);
    }
    Ok(pairs)
}

fn parse_line(line: &str) -> Option<(String, f64)> {
    let trimmed = line.trim();

    // 1. Skip blanks and obvious comments
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('*') {
        return None;
    }

    // 2. First field must look like an element symbol, second like a number.
    // This implicitly skips text headers because the value parse fails.
    let mut fields = trimmed
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|f| !f.is_empty());

    let symbol = fields.next()?;
    if symbol.len() > 2 || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let value: f64 = fields.next()?.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some((normalize_symbol(symbol), value))
}

/// Instrument software is not consistent about case: "FE" and "fe"
/// both mean "Fe".
pub(crate) fn normalize_symbol(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_delimiters() {
        assert_eq!(parse_line("Fe,2.5"), Some(("Fe".to_string(), 2.5)));
        assert_eq!(parse_line("Ca; 1.25"), Some(("Ca".to_string(), 1.25)));
        assert_eq!(parse_line("Si\t0.8"), Some(("Si".to_string(), 0.8)));
        assert_eq!(parse_line("  Zn   12  "), Some(("Zn".to_string(), 12.0)));
    }

    #[test]
    fn skips_headers_comments_and_blanks() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("# run 42"), None);
        assert_eq!(parse_line("* instrument: iCAP 7400"), None);
        assert_eq!(parse_line("Element,Concentration (mg/mL)"), None);
        assert_eq!(parse_line("Fe"), None);
        assert_eq!(parse_line("Fe,abc"), None);
    }

    #[test]
    fn normalizes_symbol_case() {
        assert_eq!(parse_line("FE,2.0"), Some(("Fe".to_string(), 2.0)));
        assert_eq!(parse_line("fe,2.0"), Some(("Fe".to_string(), 2.0)));
        assert_eq!(parse_line("k,0.5"), Some(("K".to_string(), 0.5)));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(parse_line("Fe,inf"), None);
        assert_eq!(parse_line("Fe,NaN"), None);
    }

    #[test]
    fn negative_values_pass_through_for_later_clamping() {
        // Baseline-corrected exports can dip below zero; the session
        // clamps on update.
        assert_eq!(parse_line("Fe,-0.02"), Some(("Fe".to_string(), -0.02)));
    }
}
