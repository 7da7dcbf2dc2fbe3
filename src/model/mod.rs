//src/model/mod.rs
pub mod elements;
pub mod oxides;
pub mod selection;

// Re-exports for cleaner imports
pub use oxides::Conversion;
pub use selection::{DisplayMode, Selection, SelectionEntry};
