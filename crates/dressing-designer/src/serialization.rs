//! Project files.
//!
//! A `.dressing` file is the JSON form of a [`ProjectFile`]: a format
//! version, save metadata and the complete project, components included.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::project::FurnitureProject;

/// Project file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Default project file extension
pub const FILE_EXTENSION: &str = "dressing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub saved_at: DateTime<Utc>,
    /// Crate version that wrote the file
    #[serde(default)]
    pub generator: String,
}

impl Default for FileMetadata {
    fn default() -> Self {
        Self {
            saved_at: Utc::now(),
            generator: format!("dressing-designer {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: String,
    pub metadata: FileMetadata,
    pub project: FurnitureProject,
}

impl ProjectFile {
    pub fn new(project: FurnitureProject) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: FileMetadata::default(),
            project,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize project")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: ProjectFile =
            serde_json::from_str(json).context("Failed to parse project file")?;
        check_version(&file.version)?;
        Ok(file)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write project file {}", path.as_ref().display())
        })?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read project file {}", path.as_ref().display())
        })?;
        Self::from_json(&content)
    }
}

/// Files from a newer major format version are refused.
fn check_version(version: &str) -> Result<()> {
    let major = |v: &str| v.split('.').next().and_then(|m| m.parse::<u32>().ok());
    match (major(version), major(FILE_FORMAT_VERSION)) {
        (Some(found), Some(supported)) if found <= supported => Ok(()),
        _ => anyhow::bail!(
            "Unsupported project file version {} (supported: {})",
            version,
            FILE_FORMAT_VERSION
        ),
    }
}

pub fn to_json(project: &FurnitureProject) -> Result<String> {
    ProjectFile::new(project.clone()).to_json()
}

pub fn from_json(json: &str) -> Result<FurnitureProject> {
    Ok(ProjectFile::from_json(json)?.project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::{DrawerSettings, ZoneContent};

    #[test]
    fn test_json_round_trip() {
        let mut project = FurnitureProject::new("Bedroom");
        project.zones[0].content = ZoneContent::Drawers(DrawerSettings::default());
        project.regenerate().unwrap();

        let json = to_json(&project).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, project);
    }

    #[test]
    fn test_newer_major_version_is_refused() {
        let mut file = ProjectFile::new(FurnitureProject::new("Test"));
        file.version = "2.0".to_string();
        let json = file.to_json().unwrap();
        let err = ProjectFile::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(from_json("{ not json").is_err());
    }
}
