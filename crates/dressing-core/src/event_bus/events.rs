//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Project mutations, undo and redo
    Project(ProjectEvent),
    /// Project file operations
    File(FileEvent),
    /// Settings and configuration
    Settings(SettingsEvent),
    /// Error and diagnostic events
    Error(ErrorEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Project(_) => EventCategory::Project,
            AppEvent::File(_) => EventCategory::File,
            AppEvent::Settings(_) => EventCategory::Settings,
            AppEvent::Error(_) => EventCategory::Error,
        }
    }

    /// Id of the project the event is about, if any
    pub fn project_id(&self) -> Option<&str> {
        match self {
            AppEvent::Project(e) => Some(e.project_id()),
            AppEvent::Error(ErrorEvent::Generation { project_id, .. }) => Some(project_id),
            _ => None,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Project(e) => e.description(),
            AppEvent::File(e) => e.description(),
            AppEvent::Settings(e) => e.description(),
            AppEvent::Error(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Project state events.
    Project,
    /// File operation events.
    File,
    /// Settings and configuration events.
    Settings,
    /// Error and diagnostic events.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Project => write!(f, "Project"),
            EventCategory::File => write!(f, "File"),
            EventCategory::Settings => write!(f, "Settings"),
            EventCategory::Error => write!(f, "Error"),
        }
    }
}

/// Project lifecycle events
///
/// Renderers re-render on every `Changed`, `Undone`, `Redone` and `Loaded`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectEvent {
    /// A mutation committed and the component list was regenerated.
    Changed {
        /// Project id.
        project_id: String,
        /// Name of the committed operation.
        operation: String,
        /// Number of components after regeneration.
        component_count: usize,
    },
    /// The last mutation was undone.
    Undone {
        /// Project id.
        project_id: String,
        /// Name of the undone operation.
        operation: String,
    },
    /// An undone mutation was re-applied.
    Redone {
        /// Project id.
        project_id: String,
        /// Name of the re-applied operation.
        operation: String,
    },
    /// A whole project replaced the current one.
    Loaded {
        /// Project id.
        project_id: String,
    },
    /// A mutation failed its preconditions.
    MutationRejected {
        /// Project id.
        project_id: String,
        /// Machine readable reason code.
        code: String,
        /// Human readable message.
        message: String,
    },
    /// Validation status flipped.
    ValidationChanged {
        /// Project id.
        project_id: String,
        /// New validity.
        is_valid: bool,
        /// Number of blocking issues.
        issue_count: usize,
    },
}

impl ProjectEvent {
    pub fn project_id(&self) -> &str {
        match self {
            ProjectEvent::Changed { project_id, .. }
            | ProjectEvent::Undone { project_id, .. }
            | ProjectEvent::Redone { project_id, .. }
            | ProjectEvent::Loaded { project_id }
            | ProjectEvent::MutationRejected { project_id, .. }
            | ProjectEvent::ValidationChanged { project_id, .. } => project_id,
        }
    }

    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            ProjectEvent::Changed {
                operation,
                component_count,
                ..
            } => format!("{} ({} components)", operation, component_count),
            ProjectEvent::Undone { operation, .. } => format!("Undo {}", operation),
            ProjectEvent::Redone { operation, .. } => format!("Redo {}", operation),
            ProjectEvent::Loaded { project_id } => format!("Loaded project {}", project_id),
            ProjectEvent::MutationRejected { code, message, .. } => {
                format!("Rejected [{}]: {}", code, message)
            }
            ProjectEvent::ValidationChanged {
                is_valid,
                issue_count,
                ..
            } => {
                if *is_valid {
                    "Project valid".to_string()
                } else {
                    format!("Project invalid ({} issues)", issue_count)
                }
            }
        }
    }
}

/// File operation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileEvent {
    /// Project file was loaded.
    Opened {
        /// Path of the file.
        path: PathBuf,
    },
    /// Project file was written.
    Saved {
        /// Path of the file.
        path: PathBuf,
    },
    /// Writing the project file failed.
    SaveFailed {
        /// Path of the file.
        path: PathBuf,
        /// Error message.
        error: String,
    },
}

impl FileEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            FileEvent::Opened { path } => format!("Opened {}", path.display()),
            FileEvent::Saved { path } => format!("Saved {}", path.display()),
            FileEvent::SaveFailed { path, error } => {
                format!("Save of {} failed: {}", path.display(), error)
            }
        }
    }
}

/// Settings events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsEvent {
    /// A setting value changed.
    Changed {
        /// Setting key.
        key: String,
    },
    /// Settings were reloaded from disk.
    Reloaded,
}

impl SettingsEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            SettingsEvent::Changed { key } => format!("Setting {} changed", key),
            SettingsEvent::Reloaded => "Settings reloaded".to_string(),
        }
    }
}

/// Error and diagnostic events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorEvent {
    /// Regeneration failed; the project kept its last committed state.
    Generation {
        /// Project id.
        project_id: String,
        /// Error message.
        message: String,
    },
    /// A renderer failed; project state is unaffected.
    RenderFailed {
        /// Renderer name.
        renderer: String,
        /// Error message.
        message: String,
    },
}

impl ErrorEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            ErrorEvent::Generation { message, .. } => format!("Generation error: {}", message),
            ErrorEvent::RenderFailed { renderer, message } => {
                format!("Renderer {} failed: {}", renderer, message)
            }
        }
    }
}
