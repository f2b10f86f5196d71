//! Error types for the designer crate.
//!
//! Mutations fail in one of two ways:
//! - a [`Rejection`]: a precondition did not hold, nothing was changed
//! - a [`GenerationError`]: regeneration hit settings it cannot interpret,
//!   the project keeps its last committed state

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::zone::SubZoneName;

/// Machine readable reason for a rejected mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCode {
    DimensionsLocked,
    DividersLocked,
    ThicknessLocked,
    ZoneLocked,
    InvalidDimensions,
    OutOfBounds,
    InvalidPosition,
    DividerTooClose,
    DividerNotFound,
    ZoneNotFound,
    SubZoneNotFound,
    InvalidSettings,
    InvalidSeparation,
    InvalidThickness,
    MaterialNotFound,
    MaterialIncompatible,
    ComponentNotFound,
    TemplateNotFound,
    NothingToUndo,
    NothingToRedo,
}

impl RejectionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DimensionsLocked => "dimensions_locked",
            Self::DividersLocked => "dividers_locked",
            Self::ThicknessLocked => "thickness_locked",
            Self::ZoneLocked => "zone_locked",
            Self::InvalidDimensions => "invalid_dimensions",
            Self::OutOfBounds => "out_of_bounds",
            Self::InvalidPosition => "invalid_position",
            Self::DividerTooClose => "divider_too_close",
            Self::DividerNotFound => "divider_not_found",
            Self::ZoneNotFound => "zone_not_found",
            Self::SubZoneNotFound => "sub_zone_not_found",
            Self::InvalidSettings => "invalid_settings",
            Self::InvalidSeparation => "invalid_separation",
            Self::InvalidThickness => "invalid_thickness",
            Self::MaterialNotFound => "material_not_found",
            Self::MaterialIncompatible => "material_incompatible",
            Self::ComponentNotFound => "component_not_found",
            Self::TemplateNotFound => "template_not_found",
            Self::NothingToUndo => "nothing_to_undo",
            Self::NothingToRedo => "nothing_to_redo",
        }
    }
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed precondition: reason code plus a message for the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub code: RejectionCode,
    pub message: String,
}

impl Rejection {
    pub fn new(code: RejectionCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Unexpected failure while regenerating components
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// A numeric setting is NaN or infinite.
    #[error("Zone {zone_index}{}: setting '{setting}' is not a finite number", sub_zone_suffix(.sub_zone))]
    NonFiniteSetting {
        zone_index: usize,
        sub_zone: Option<SubZoneName>,
        setting: String,
    },

    /// A setting cannot be interpreted at all.
    #[error("Zone {zone_index}{}: invalid setting '{setting}': {reason}", sub_zone_suffix(.sub_zone))]
    InvalidSetting {
        zone_index: usize,
        sub_zone: Option<SubZoneName>,
        setting: String,
        reason: String,
    },

    /// Project geometry itself is unusable.
    #[error("Invalid project geometry: {0}")]
    InvalidGeometry(String),
}

fn sub_zone_suffix(sub_zone: &Option<SubZoneName>) -> String {
    sub_zone
        .map(|name| format!(" ({} sub-zone)", name))
        .unwrap_or_default()
}

/// Errors returned by project mutations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// Precondition failed; state untouched.
    #[error("Mutation rejected: {0}")]
    Rejected(Rejection),

    /// Regeneration failed; state untouched.
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl DesignError {
    pub fn rejected(code: RejectionCode, message: impl Into<String>) -> Self {
        DesignError::Rejected(Rejection::new(code, message))
    }

    /// Reason code for rejected mutations
    pub fn code(&self) -> Option<RejectionCode> {
        match self {
            DesignError::Rejected(r) => Some(r.code),
            DesignError::Generation(_) => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, DesignError::Rejected(_))
    }
}

impl From<Rejection> for DesignError {
    fn from(rejection: Rejection) -> Self {
        DesignError::Rejected(rejection)
    }
}

/// Result type alias for designer operations.
pub type DesignResult<T> = Result<T, DesignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = DesignError::rejected(RejectionCode::DividerTooClose, "too close to divider 1");
        assert_eq!(
            err.to_string(),
            "Mutation rejected: [divider_too_close] too close to divider 1"
        );
        assert_eq!(err.code(), Some(RejectionCode::DividerTooClose));
    }

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::NonFiniteSetting {
            zone_index: 2,
            sub_zone: Some(SubZoneName::Lower),
            setting: "face_height".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Zone 2 (lower sub-zone): setting 'face_height' is not a finite number"
        );

        let design: DesignError = err.into();
        assert!(!design.is_rejection());
        assert_eq!(design.code(), None);
    }

    #[test]
    fn test_rejection_code_serialization() {
        let json = serde_json::to_string(&RejectionCode::ZoneLocked).unwrap();
        assert_eq!(json, "\"zone_locked\"");
    }
}
