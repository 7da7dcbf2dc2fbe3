// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

fn default_decimals() -> usize {
  2
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
  /// Decimal places used when formatting percentages for display.
  /// Exports always keep full precision.
  #[serde(default = "default_decimals")]
  pub decimals: usize,

  #[serde(default)]
  pub verbose_logging: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      decimals: 2,
      verbose_logging: false,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/icpcalc/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    // "com.example.icpcalc" should match the Application ID in main.rs
    if let Some(proj) = ProjectDirs::from("com", "example", "icpcalc") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_fall_back_to_defaults() {
    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.decimals, 2);
    assert!(!cfg.verbose_logging);
  }

  #[test]
  fn saved_fields_survive_a_round_trip() {
    let cfg = Config {
      decimals: 4,
      verbose_logging: true,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back.decimals, 4);
    assert!(back.verbose_logging);
  }
}
