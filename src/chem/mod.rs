// src/chem/mod.rs
pub mod results;

pub use results::{CalcError, ResultRow, ResultsTable, SampleParameters};
