// src/io/csv_export.rs

use std::fs::File;
use std::io::{self, Write};

use crate::chem::results::ResultsTable;

pub const HEADER: &str = "Element,Converted,Concentration (%) (Converted)";

/// Renders the results table as CSV text. The header is always present,
/// even for an empty table. Labels come from a fixed vocabulary and
/// never contain commas, so no quoting is needed.
pub fn to_csv(table: &ResultsTable) -> String {
    let mut out = String::with_capacity(64 + table.rows.len() * 32);
    out.push_str(HEADER);
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format!(
            "{},{},{}\n",
            row.label, row.converted, row.concentration_pct
        ));
    }
    out
}

pub fn write_csv(path: &str, table: &ResultsTable) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(to_csv(table).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::results::ResultRow;

    fn row(label: &str, converted: &str, pct: f64) -> ResultRow {
        ResultRow {
            label: label.to_string(),
            converted: converted.to_string(),
            concentration_pct: pct,
        }
    }

    #[test]
    fn empty_table_is_header_only() {
        let csv = to_csv(&ResultsTable::default());
        assert_eq!(csv, format!("{}\n", HEADER));
    }

    #[test]
    fn rows_serialize_in_order_at_full_precision() {
        let table = ResultsTable {
            rows: vec![
                row("Fe", "Fe2O3", 0.028594),
                row("Moisture Content", "N/A", 5.0),
                row("Total", "N/A", 5.028594),
            ],
            skipped: Vec::new(),
        };

        let csv = to_csv(&table);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "Fe,Fe2O3,0.028594");
        assert_eq!(lines[2], "Moisture Content,N/A,5");
        assert_eq!(lines[3], "Total,N/A,5.028594");
    }

    #[test]
    fn values_round_trip_through_the_text_form() {
        let pct = 2.0 * (100.0 / 1000.0) / (1000.0 / 100.0) * 1.4297;
        let table = ResultsTable {
            rows: vec![row("Fe", "Fe2O3", pct)],
            skipped: Vec::new(),
        };

        let csv = to_csv(&table);
        let value_field = csv.lines().nth(1).unwrap().split(',').nth(2).unwrap();
        let parsed: f64 = value_field.parse().unwrap();
        assert_eq!(parsed, pct);
    }
}
