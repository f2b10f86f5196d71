//! Dressing Settings Crate
//!
//! Loads, validates and saves the application configuration.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, Config, DefaultSettings, HistorySettings,
    MeasurementSystem, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
