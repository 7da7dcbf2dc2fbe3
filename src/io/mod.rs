// src/io/mod.rs
pub mod concentrations;
pub mod csv_export;
pub mod xlsx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not read spreadsheet: {0}")]
    Sheet(String),
    #[error("no usable element/concentration rows found")]
    NoData,
}

/// Loads (symbol, mg/mL) pairs from an instrument export, dispatching
/// on the file extension.
pub fn load_concentrations(path: &str) -> Result<Vec<(String, f64)>, ImportError> {
    let p = path.to_lowercase();

    if p.ends_with(".xlsx") || p.ends_with(".xls") || p.ends_with(".xlsb") || p.ends_with(".ods") {
        xlsx::parse(path)
    } else {
        // Everything else is treated as delimited text
        concentrations::parse(path)
    }
}
