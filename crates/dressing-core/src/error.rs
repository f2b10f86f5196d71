//! Error handling for Dressing
//!
//! Provides the error types shared by every crate of the workspace:
//! - Material errors (catalog lookups, thickness compatibility)
//! - Constraint errors (dimension bounds, configuration sanity)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Material catalog error type
///
/// Raised when a material reference cannot be honoured by the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Material id is not present in the catalog
    #[error("Material not found: {id}")]
    NotFound {
        /// The unknown material id.
        id: String,
    },

    /// Requested panel thickness is outside the range the material is sold in
    #[error("Material {id} is not available in {thickness}mm (valid: {min}..{max})")]
    ThicknessOutOfRange {
        /// The material id.
        id: String,
        /// The requested thickness in mm.
        thickness: f64,
        /// Minimum available thickness in mm.
        min: f64,
        /// Maximum available thickness in mm.
        max: f64,
    },

    /// Material cannot be used for load-bearing carcass panels
    #[error("Material {id} is not rated for structural use")]
    NotStructural {
        /// The material id.
        id: String,
    },
}

/// Constraint error type
///
/// Represents violations of the configured dimensional bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintError {
    /// A value lies outside its `[min, max]` bounds
    #[error("{axis} {value}mm out of bounds (valid: {min}..{max})")]
    OutOfBounds {
        /// The axis or quantity name.
        axis: String,
        /// The offending value in mm.
        value: f64,
        /// Lower bound in mm.
        min: f64,
        /// Upper bound in mm.
        max: f64,
    },

    /// The bounds themselves are inconsistent
    #[error("Invalid bounds for {axis}: min {min} > max {max}")]
    InvalidBounds {
        /// The axis or quantity name.
        axis: String,
        /// Lower bound in mm.
        min: f64,
        /// Upper bound in mm.
        max: f64,
    },

    /// A configuration value is not usable
    #[error("Invalid constraint '{name}': {reason}")]
    InvalidValue {
        /// The configuration key.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Main error type for Dressing
///
/// A unified error type that can represent any error from the core layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Material error
    #[error(transparent)]
    Material(#[from] MaterialError),

    /// Constraint error
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a material error
    pub fn is_material_error(&self) -> bool {
        matches!(self, Error::Material(_))
    }

    /// Check if this is a constraint error
    pub fn is_constraint_error(&self) -> bool {
        matches!(self, Error::Constraint(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
