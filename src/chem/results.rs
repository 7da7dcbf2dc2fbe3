// src/chem/results.rs

use thiserror::Error;

use crate::model::oxides;
use crate::model::selection::{DisplayMode, Selection};

/// Sample preparation inputs, shared by every row of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleParameters {
    /// Volume of the sample solution in mL.
    pub volume_ml: f64,
    /// Initial mass of the solid sample in mg. The sidebar takes grams
    /// and converts once at the boundary.
    pub initial_mass_mg: f64,
    /// Moisture content of the sample, already a percentage.
    pub moisture_pct: f64,
    /// Loss on ignition, already a percentage.
    pub loi_pct: f64,
}

impl Default for SampleParameters {
    fn default() -> Self {
        Self {
            volume_ml: 0.0,
            initial_mass_mg: 0.0,
            moisture_pct: 0.0,
            loi_pct: 0.0,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid sample mass: enter a non-zero initial mass before computing percentages")]
    InvalidSampleMass,
}

/// One line of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Element symbol, or "Moisture Content" / "LOI" / "Total".
    pub label: String,
    /// Reported species: the symbol itself, its oxide, or "N/A".
    pub converted: String,
    /// Weight percentage in the original solid sample.
    pub concentration_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    /// Rows in display order. When non-empty the last row is the Total.
    pub rows: Vec<ResultRow>,
    /// Symbols dropped because no conversion entry exists for them.
    pub skipped: Vec<String>,
}

impl ResultsTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the Total row, zero for an empty table.
    pub fn total(&self) -> f64 {
        self.rows.last().map(|r| r.concentration_pct).unwrap_or(0.0)
    }
}

/// Weight percent of the element in the original solid sample.
fn elemental_pct(concentration: f64, sample: &SampleParameters) -> f64 {
    concentration * (sample.volume_ml / 1000.0) / (sample.initial_mass_mg / 100.0)
}

/// Builds the results table from the current session inputs.
///
/// Elements with zero concentration are left out. Moisture and LOI are
/// appended as literal percentage rows when positive, and a Total row
/// closes any non-empty table. Fails when concentrations have been
/// entered but the sample mass is still zero.
pub fn compute(selection: &Selection, sample: &SampleParameters) -> Result<ResultsTable, CalcError> {
    let mut table = ResultsTable::default();

    let active: Vec<_> = selection
        .iter()
        .filter(|(_, entry)| entry.concentration > 0.0)
        .collect();

    if !active.is_empty() && sample.initial_mass_mg <= 0.0 {
        return Err(CalcError::InvalidSampleMass);
    }

    for (symbol, entry) in active {
        let conversion = match oxides::get_conversion(symbol) {
            Some(c) => c,
            None => {
                table.skipped.push(symbol.to_string());
                continue;
            }
        };

        let pct = elemental_pct(entry.concentration, sample);
        let (converted, value) = match entry.display_mode {
            DisplayMode::Elemental => (symbol.to_string(), pct),
            DisplayMode::Oxide => (conversion.oxide.to_string(), pct * conversion.factor),
        };

        table.rows.push(ResultRow {
            label: symbol.to_string(),
            converted,
            concentration_pct: value,
        });
    }

    if sample.moisture_pct > 0.0 {
        table.rows.push(ResultRow {
            label: "Moisture Content".to_string(),
            converted: "N/A".to_string(),
            concentration_pct: sample.moisture_pct,
        });
    }
    if sample.loi_pct > 0.0 {
        table.rows.push(ResultRow {
            label: "LOI".to_string(),
            converted: "N/A".to_string(),
            concentration_pct: sample.loi_pct,
        });
    }

    if !table.rows.is_empty() {
        let total: f64 = table.rows.iter().map(|r| r.concentration_pct).sum();
        table.rows.push(ResultRow {
            label: "Total".to_string(),
            converted: "N/A".to_string(),
            concentration_pct: total,
        });
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn sample(volume_ml: f64, mass_g: f64) -> SampleParameters {
        SampleParameters {
            volume_ml,
            initial_mass_mg: mass_g * 1000.0,
            moisture_pct: 0.0,
            loi_pct: 0.0,
        }
    }

    #[test]
    fn elemental_percentage_follows_dilution_formula() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.update("Fe", 2.0, DisplayMode::Elemental);

        let table = compute(&sel, &sample(100.0, 1.0)).unwrap();
        // 2.0 mg/mL in 100 mL from 1 g of sample -> 0.02 wt%
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].label, "Fe");
        assert_eq!(table.rows[0].converted, "Fe");
        assert!((table.rows[0].concentration_pct - 0.02).abs() < TOL);
    }

    #[test]
    fn oxide_mode_applies_the_gravimetric_factor() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.update("Fe", 2.0, DisplayMode::Oxide);

        let table = compute(&sel, &sample(100.0, 1.0)).unwrap();
        assert_eq!(table.rows[0].converted, "Fe2O3");
        assert!((table.rows[0].concentration_pct - 0.02 * 1.4297).abs() < TOL);
        assert!((table.rows[0].concentration_pct - 0.028594).abs() < TOL);
    }

    #[test]
    fn zero_concentration_elements_are_left_out() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.select("Ca");
        sel.update("Ca", 1.5, DisplayMode::Elemental);

        let table = compute(&sel, &sample(250.0, 2.0)).unwrap();
        assert_eq!(table.rows.len(), 2); // Ca + Total
        assert_eq!(table.rows[0].label, "Ca");
        assert_eq!(table.rows[1].label, "Total");
    }

    #[test]
    fn all_zero_selection_yields_an_empty_table() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.select("Si");

        let table = compute(&sel, &sample(100.0, 1.0)).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0.0);
    }

    #[test]
    fn rows_follow_selection_order_then_extras_then_total() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.select("Ca"); // newest first: Ca, Fe
        sel.update("Fe", 1.0, DisplayMode::Elemental);
        sel.update("Ca", 2.0, DisplayMode::Oxide);

        let mut s = sample(100.0, 1.0);
        s.moisture_pct = 5.0;
        s.loi_pct = 2.0;

        let table = compute(&sel, &s).unwrap();
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Ca", "Fe", "Moisture Content", "LOI", "Total"]);
    }

    #[test]
    fn total_is_the_sum_of_every_row() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.select("Si");
        sel.update("Fe", 2.0, DisplayMode::Oxide);
        sel.update("Si", 1.0, DisplayMode::Elemental);

        let mut s = sample(100.0, 1.0);
        s.moisture_pct = 5.0;
        s.loi_pct = 2.0;

        let table = compute(&sel, &s).unwrap();
        let n = table.rows.len();
        let sum: f64 = table.rows[..n - 1].iter().map(|r| r.concentration_pct).sum();
        assert_eq!(table.rows[n - 1].label, "Total");
        assert_eq!(table.rows[n - 1].converted, "N/A");
        assert!((table.rows[n - 1].concentration_pct - sum).abs() < TOL);
        assert!((table.total() - sum).abs() < TOL);
    }

    #[test]
    fn moisture_and_loi_render_without_any_elements() {
        let sel = Selection::new();
        let s = SampleParameters {
            volume_ml: 0.0,
            initial_mass_mg: 0.0,
            moisture_pct: 5.0,
            loi_pct: 2.0,
        };

        let table = compute(&sel, &s).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].label, "Moisture Content");
        assert_eq!(table.rows[0].converted, "N/A");
        assert!((table.rows[0].concentration_pct - 5.0).abs() < TOL);
        assert_eq!(table.rows[1].label, "LOI");
        assert!((table.total() - 7.0).abs() < TOL);
    }

    #[test]
    fn zero_mass_with_entered_concentrations_is_an_error() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.update("Fe", 2.0, DisplayMode::Elemental);

        let err = compute(&sel, &sample(100.0, 0.0)).unwrap_err();
        assert_eq!(err, CalcError::InvalidSampleMass);
        assert!(err.to_string().contains("invalid sample mass"));
    }

    #[test]
    fn zero_mass_without_concentrations_is_fine() {
        let mut sel = Selection::new();
        sel.select("Fe"); // still at 0.0

        let mut s = sample(100.0, 0.0);
        s.moisture_pct = 3.0;

        let table = compute(&sel, &s).unwrap();
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Moisture Content", "Total"]);
    }

    #[test]
    fn unknown_symbols_are_reported_not_computed() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.select("Xx"); // no conversion entry
        sel.update("Fe", 2.0, DisplayMode::Elemental);
        sel.update("Xx", 1.0, DisplayMode::Elemental);

        let table = compute(&sel, &sample(100.0, 1.0)).unwrap();
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Fe", "Total"]);
        assert_eq!(table.skipped, vec!["Xx".to_string()]);
    }

    #[test]
    fn results_never_contain_non_finite_values() {
        let mut sel = Selection::new();
        sel.select("Fe");
        sel.update("Fe", f64::INFINITY, DisplayMode::Oxide); // collapses to 0.0
        sel.select("Ca");
        sel.update("Ca", 1.0, DisplayMode::Oxide);

        let table = compute(&sel, &sample(100.0, 1.0)).unwrap();
        for row in &table.rows {
            assert!(row.concentration_pct.is_finite());
        }
    }
}
