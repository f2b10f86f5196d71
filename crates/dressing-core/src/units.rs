//! Unit conversion utilities
//!
//! Every length in the model is stored in millimetres. This module converts
//! to and from centimetres and inches for display and input, including
//! fractional inch parsing ("23 5/8").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Millimetres
    #[default]
    Metric,
    /// Centimetres
    Centimetric,
    /// Inches
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Centimetric => write!(f, "Centimetric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "centimetric" | "cm" => Ok(Self::Centimetric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert a millimetre value into the given system
pub fn from_mm(value_mm: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => value_mm,
        MeasurementSystem::Centimetric => value_mm / 10.0,
        MeasurementSystem::Imperial => value_mm / MM_PER_INCH,
    }
}

/// Convert a value expressed in the given system into millimetres
pub fn to_mm(value: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => value,
        MeasurementSystem::Centimetric => value * 10.0,
        MeasurementSystem::Imperial => value * MM_PER_INCH,
    }
}

/// Round to two decimals, the storage precision of every model length
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1}", value_mm),
        MeasurementSystem::Centimetric => format!("{:.2}", from_mm(value_mm, system)),
        MeasurementSystem::Imperial => format!("{:.3}", from_mm(value_mm, system)),
    }
}

/// Parse length string to millimeters
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric | MeasurementSystem::Centimetric => {
            let value = input.parse::<f64>().map_err(|e| e.to_string())?;
            Ok(to_mm(value, system))
        }
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|e| e.to_string())?;
                return Ok(inches * MM_PER_INCH);
            }

            let mut total_inches = 0.0;
            for part in input.split_whitespace() {
                if part.contains('/') {
                    let frac_parts: Vec<&str> = part.split('/').collect();
                    if frac_parts.len() != 2 {
                        return Err("Invalid fraction format".to_string());
                    }
                    let num = frac_parts[0]
                        .parse::<f64>()
                        .map_err(|_| "Invalid numerator")?;
                    let den = frac_parts[1]
                        .parse::<f64>()
                        .map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total_inches += num / den;
                } else {
                    total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            Ok(total_inches * MM_PER_INCH)
        }
    }
}

/// Get the unit label for the given system
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Centimetric => "cm",
        MeasurementSystem::Imperial => "in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_conversion() {
        assert_eq!(format_length(600.0, MeasurementSystem::Metric), "600.0");
        assert_eq!(parse_length("600", MeasurementSystem::Metric).unwrap(), 600.0);
        assert_eq!(
            parse_length("60", MeasurementSystem::Centimetric).unwrap(),
            600.0
        );
    }

    #[test]
    fn test_imperial_fraction() {
        // 1 1/2 inch = 38.1 mm
        let mm = parse_length("1 1/2", MeasurementSystem::Imperial).unwrap();
        assert!((mm - 38.1).abs() < 1e-9);

        let mm = parse_length("1/4", MeasurementSystem::Imperial).unwrap();
        assert!((mm - 6.35).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_conversion() {
        let mm = 2400.0;
        for system in [
            MeasurementSystem::Metric,
            MeasurementSystem::Centimetric,
            MeasurementSystem::Imperial,
        ] {
            let back = to_mm(from_mm(mm, system), system);
            assert!((back - mm).abs() < 1e-9, "{system}");
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(599.999), 600.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("abc", MeasurementSystem::Metric).is_err());
        assert!(parse_length("1/0", MeasurementSystem::Imperial).is_err());
        assert!(parse_length("1/2/3", MeasurementSystem::Imperial).is_err());
        assert_eq!(parse_length("", MeasurementSystem::Metric).unwrap(), 0.0);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(get_unit_label(MeasurementSystem::Metric), "mm");
        assert_eq!(get_unit_label(MeasurementSystem::Centimetric), "cm");
        assert_eq!(get_unit_label(MeasurementSystem::Imperial), "in");
    }
}
