// src/state.rs
use crate::chem::results::SampleParameters;
use crate::config::Config;
use crate::model::Selection;

pub struct AppState {
    pub sample: SampleParameters,
    pub selection: Selection,
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sample: SampleParameters::default(),
            selection: Selection::new(),
            config: Config::default(),
        }
    }

    /// Replaces the config with whatever is on disk; returns the
    /// load message for the console.
    pub fn load_config(&mut self) -> String {
        let (config, message) = Config::load();
        self.config = config;
        message
    }

    pub fn save_config(&self) {
        let message = self.config.save();
        log::debug!("{}", message);
    }
}
