// src/io/xlsx.rs

use calamine::{open_workbook_auto, Data, Reader};

use super::concentrations;
use super::ImportError;

/// Reads (symbol, mg/mL) pairs from the first sheet of a spreadsheet
/// export. Column A holds the symbol, column B the concentration.
pub fn parse(path: &str) -> Result<Vec<(String, f64)>, ImportError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ImportError::Sheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoData)?
        .map_err(|e| ImportError::Sheet(e.to_string()))?;

    let pairs = rows_to_pairs(range.rows());
    if pairs.is_empty() {
        return Err(ImportError::NoData);
    }
    Ok(pairs)
}

fn rows_to_pairs<'a, I>(rows: I) -> Vec<(String, f64)>
where
    I: Iterator<Item = &'a [Data]>,
{
    rows.filter_map(|row| {
        let symbol = cell_to_symbol(row.first()?)?;
        let value = cell_to_value(row.get(1)?)?;
        Some((symbol, value))
    })
    .collect()
}

fn cell_to_symbol(cell: &Data) -> Option<String> {
    let raw = match cell {
        Data::String(s) => s.trim(),
        _ => return None,
    };
    if raw.is_empty() || raw.len() > 2 || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(concentrations::normalize_symbol(raw))
}

fn cell_to_value(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        // Some exports write numbers as text
        Data::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_pairs_and_skips_header_rows() {
        let rows = vec![
            vec![
                Data::String("Element".to_string()),
                Data::String("Concentration (mg/mL)".to_string()),
            ],
            vec![Data::String("Fe".to_string()), Data::Float(2.5)],
            vec![Data::String("ca".to_string()), Data::Int(3)],
            vec![Data::String("Si".to_string()), Data::String("0.8".to_string())],
            vec![Data::Empty, Data::Float(1.0)],
            vec![Data::String("Zn".to_string()), Data::Empty],
        ];

        let pairs = rows_to_pairs(rows.iter().map(|r| r.as_slice()));
        assert_eq!(
            pairs,
            vec![
                ("Fe".to_string(), 2.5),
                ("Ca".to_string(), 3.0),
                ("Si".to_string(), 0.8),
            ]
        );
    }

    #[test]
    fn short_and_malformed_rows_are_ignored() {
        let rows: Vec<Vec<Data>> = vec![
            vec![],
            vec![Data::String("Fe".to_string())],
            vec![Data::Float(1.0), Data::Float(2.0)],
        ];
        let pairs = rows_to_pairs(rows.iter().map(|r| r.as_slice()));
        assert!(pairs.is_empty());
    }
}
