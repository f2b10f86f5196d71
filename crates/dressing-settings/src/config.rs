//! Configuration file handling for the dressing designer
//!
//! Configuration is organized into logical sections:
//! - Constraints (dimension bounds, zone and divider spacing, material strictness)
//! - History (undo depth, project revision depth)
//! - Defaults for new projects (size, material, template, display units)
//!
//! JSON and TOML are both accepted, chosen by file extension.

pub use dressing_core::units::MeasurementSystem;
use dressing_core::ConstraintConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Directory name below the platform config directory
pub const CONFIG_DIR_NAME: &str = "dressing";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Undo/redo and revision limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Number of undoable steps kept by the orchestrator
    pub undo_depth: usize,
    /// Number of revisions kept inside a project
    pub revision_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            undo_depth: 50,
            revision_depth: 20,
        }
    }
}

/// Values used when a new project is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub material_id: String,
    /// Template applied to new projects, by name
    pub template: Option<String>,
    pub measurement_system: MeasurementSystem,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 2400.0,
            depth: 600.0,
            material_id: "melamine_white".to_string(),
            template: None,
            measurement_system: MeasurementSystem::Metric,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub constraints: ConstraintConfig,
    pub history: HistorySettings,
    pub defaults: DefaultSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Config = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML). Parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.constraints.validate()?;

        if self.history.undo_depth == 0 {
            return Err(SettingsError::invalid("history.undo_depth", "must be > 0"));
        }
        if self.history.revision_depth == 0 {
            return Err(SettingsError::invalid(
                "history.revision_depth",
                "must be > 0",
            ));
        }

        let bounds = &self.constraints.dimensions;
        for (key, value, axis) in [
            ("defaults.width", self.defaults.width, &bounds.width),
            ("defaults.height", self.defaults.height, &bounds.height),
            ("defaults.depth", self.defaults.depth, &bounds.depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::invalid(key, "must be a positive number"));
            }
            if self.constraints.enforce_constraints && !axis.contains(value) {
                return Err(SettingsError::invalid(
                    key,
                    format!("{} is outside {}..{}", value, axis.min, axis.max),
                ));
            }
        }

        if self.defaults.material_id.trim().is_empty() {
            return Err(SettingsError::invalid(
                "defaults.material_id",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Platform config directory for the application, e.g.
/// `~/.config/dressing` on Linux.
pub fn config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|p| p.join(CONFIG_DIR_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config or home directory available".to_string())
        })
}

pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
