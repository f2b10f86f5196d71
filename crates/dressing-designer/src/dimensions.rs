//! Overall cabinet dimensions.

use dressing_core::units::{self, MeasurementSystem};
use dressing_core::{ConstraintError, DimensionBounds};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Width, height and depth of the cabinet in millimetres.
///
/// Values are stored rounded to two decimals. Arithmetic never produces
/// negative components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 2400.0,
            depth: 600.0,
        }
    }
}

fn normalize(value: f64) -> f64 {
    if value.is_finite() {
        units::round2(value.max(0.0))
    } else {
        value
    }
}

impl Dimensions {
    /// Creates dimensions from millimetre values.
    ///
    /// Non-finite values are kept as-is so validation can report them.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width: normalize(width),
            height: normalize(height),
            depth: normalize(depth),
        }
    }

    /// Creates dimensions from values expressed in `system`.
    pub fn from_units(width: f64, height: f64, depth: f64, system: MeasurementSystem) -> Self {
        Self::new(
            units::to_mm(width, system),
            units::to_mm(height, system),
            units::to_mm(depth, system),
        )
    }

    /// Multiplies every axis by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor, self.depth * factor)
    }

    /// Values expressed in `system`, for display.
    pub fn convert(&self, system: MeasurementSystem) -> (f64, f64, f64) {
        (
            units::round2(units::from_mm(self.width, system)),
            units::round2(units::from_mm(self.height, system)),
            units::round2(units::from_mm(self.depth, system)),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.depth.is_finite()
    }

    /// True when any axis is zero or not a number.
    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.width <= 0.0 || self.height <= 0.0 || self.depth <= 0.0
    }

    /// Checks every axis against `bounds`, collecting all violations.
    pub fn validate(&self, bounds: &DimensionBounds) -> Vec<ConstraintError> {
        [
            bounds.width.check("width", self.width),
            bounds.height.check("height", self.height),
            bounds.depth.check("depth", self.depth),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// Enclosed volume in cubic metres
    pub fn volume_m3(&self) -> f64 {
        self.width * self.height * self.depth / 1e9
    }

    /// Human readable `W x H x D` in the given system
    pub fn format(&self, system: MeasurementSystem) -> String {
        format!(
            "{} x {} x {} {}",
            units::format_length(self.width, system),
            units::format_length(self.height, system),
            units::format_length(self.depth, system),
            units::get_unit_label(system)
        )
    }
}

impl Add for Dimensions {
    type Output = Dimensions;

    fn add(self, other: Dimensions) -> Dimensions {
        Dimensions::new(
            self.width + other.width,
            self.height + other.height,
            self.depth + other.depth,
        )
    }
}

impl Sub for Dimensions {
    type Output = Dimensions;

    /// Component-wise difference, clamped at zero.
    fn sub(self, other: Dimensions) -> Dimensions {
        Dimensions::new(
            self.width - other.width,
            self.height - other.height,
            self.depth - other.depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_and_clamping() {
        let dims = Dimensions::new(1200.456, -5.0, 600.004);
        assert_eq!(dims.width, 1200.46);
        assert_eq!(dims.height, 0.0);
        assert_eq!(dims.depth, 600.0);
        assert!(dims.is_degenerate());
    }

    #[test]
    fn test_arithmetic() {
        let a = Dimensions::new(1000.0, 2000.0, 500.0);
        let b = Dimensions::new(1500.0, 100.0, 100.0);
        assert_eq!(a + b, Dimensions::new(2500.0, 2100.0, 600.0));
        assert_eq!(a - b, Dimensions::new(0.0, 1900.0, 400.0));
        assert_eq!(a.scale(0.5), Dimensions::new(500.0, 1000.0, 250.0));
    }

    #[test]
    fn test_unit_conversion() {
        let dims = Dimensions::from_units(100.0, 240.0, 60.0, MeasurementSystem::Centimetric);
        assert_eq!(dims, Dimensions::new(1000.0, 2400.0, 600.0));
        assert_eq!(dims.convert(MeasurementSystem::Imperial).2, 23.62);
    }

    #[test]
    fn test_validate_collects_all_axes() {
        let dims = Dimensions::new(100.0, 2000.0, 2000.0);
        let errors = dims.validate(&DimensionBounds::default());
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().contains("width"));
        assert!(errors[1].to_string().contains("depth"));
    }

    #[test]
    fn test_nan_is_kept_for_validation() {
        let dims = Dimensions::new(f64::NAN, 2000.0, 600.0);
        assert!(dims.is_degenerate());
        assert_eq!(dims.validate(&DimensionBounds::default()).len(), 1);
    }
}
