//! Dimensional constraint configuration
//!
//! Bounds and thresholds consumed by the designer when validating
//! mutations. The settings crate persists these as part of its config.

use serde::{Deserialize, Serialize};

use crate::error::ConstraintError;

/// Inclusive `[min, max]` bounds in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check `value`, naming the offending axis on failure
    pub fn check(&self, axis: &str, value: f64) -> Result<(), ConstraintError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ConstraintError::OutOfBounds {
                axis: axis.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn validate(&self, axis: &str) -> Result<(), ConstraintError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 || self.min > self.max {
            return Err(ConstraintError::InvalidBounds {
                axis: axis.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Per-axis dimension bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionBounds {
    pub width: Bounds,
    pub height: Bounds,
    pub depth: Bounds,
}

impl Default for DimensionBounds {
    fn default() -> Self {
        Self {
            width: Bounds::new(300.0, 5000.0),
            height: Bounds::new(300.0, 3000.0),
            depth: Bounds::new(250.0, 1000.0),
        }
    }
}

/// Constraint policy for the project orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintConfig {
    /// Overall dimension bounds
    pub dimensions: DimensionBounds,
    /// Reject out-of-bounds mutations instead of only flagging them
    pub enforce_constraints: bool,
    /// Intervals narrower than this are dropped by the partitioner
    pub min_zone_width: f64,
    /// Minimum distance between two divider positions
    pub min_divider_distance: f64,
    /// Reject material ids unknown to the catalog instead of falling back
    pub strict_materials: bool,
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            dimensions: DimensionBounds::default(),
            enforce_constraints: true,
            min_zone_width: 100.0,
            min_divider_distance: 150.0,
            strict_materials: false,
        }
    }
}

impl ConstraintConfig {
    /// Validate the configuration itself
    pub fn validate(&self) -> Result<(), ConstraintError> {
        self.dimensions.width.validate("width")?;
        self.dimensions.height.validate("height")?;
        self.dimensions.depth.validate("depth")?;

        if !(self.min_zone_width > 0.0) {
            return Err(ConstraintError::InvalidValue {
                name: "min_zone_width".to_string(),
                reason: "must be > 0".to_string(),
            });
        }
        if !(self.min_divider_distance > 0.0) {
            return Err(ConstraintError::InvalidValue {
                name: "min_divider_distance".to_string(),
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
