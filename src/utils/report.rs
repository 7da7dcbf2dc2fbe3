// src/utils/report.rs

use crate::chem::results::ResultsTable;

/// Generates the text for the "Results" tab.
pub fn results_summary(table: &ResultsTable, decimals: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<18} {:<10} {:>18}\n",
        "Element", "Converted", "Concentration"
    ));
    out.push_str("------------------------------------------------\n");

    for (i, row) in table.rows.iter().enumerate() {
        // Separate the Total from the body of the table
        if i + 1 == table.rows.len() && row.label == "Total" {
            out.push_str("------------------------------------------------\n");
        }
        out.push_str(&format!(
            "{:<18} {:<10} {:>17.*}%\n",
            row.label, row.converted, decimals, row.concentration_pct
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::results::ResultRow;

    fn table() -> ResultsTable {
        ResultsTable {
            rows: vec![
                ResultRow {
                    label: "Fe".to_string(),
                    converted: "Fe2O3".to_string(),
                    concentration_pct: 0.028594,
                },
                ResultRow {
                    label: "Total".to_string(),
                    converted: "N/A".to_string(),
                    concentration_pct: 0.028594,
                },
            ],
            skipped: Vec::new(),
        }
    }

    #[test]
    fn formats_with_configured_decimals() {
        let two = results_summary(&table(), 2);
        assert!(two.contains("Fe2O3"));
        assert!(two.contains("0.03%"));

        let four = results_summary(&table(), 4);
        assert!(four.contains("0.0286%"));
    }

    #[test]
    fn total_row_is_set_off_by_a_divider() {
        let text = results_summary(&table(), 2);
        let divider_count = text
            .lines()
            .filter(|l| l.starts_with("----"))
            .count();
        assert_eq!(divider_count, 2);
    }
}
