pub mod chart;
pub mod element_grid;
pub mod preferences;
pub mod results_view;

// Re-exports
pub use preferences::show_preferences_window;
pub use results_view::ResultsPanel;
