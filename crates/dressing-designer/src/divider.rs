//! Vertical dividers splitting the cabinet into zones.

use serde::{Deserialize, Serialize};

use crate::error::{Rejection, RejectionCode};

/// A vertical divider. `position` is the x coordinate of its left face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    pub index: usize,
    pub position: f64,
    pub thickness: f64,
}

impl Divider {
    pub fn new(position: f64, thickness: f64) -> Self {
        Self {
            index: 0,
            position: dressing_core::units::round2(position),
            thickness,
        }
    }

    /// x coordinate of the right face
    pub fn end(&self) -> f64 {
        self.position + self.thickness
    }
}

/// Sorts dividers by position and reassigns indices so that index == rank.
pub fn normalize(dividers: &mut [Divider]) {
    dividers.sort_by(|a, b| a.position.total_cmp(&b.position));
    for (rank, divider) in dividers.iter_mut().enumerate() {
        divider.index = rank;
    }
}

/// Checks that a divider may be placed at `position`.
///
/// `ignore` names a divider index to skip, used when moving a divider.
pub fn check_position(
    dividers: &[Divider],
    position: f64,
    total_width: f64,
    min_distance: f64,
    ignore: Option<usize>,
) -> Result<(), Rejection> {
    if !position.is_finite() || position <= 0.0 || position >= total_width {
        return Err(Rejection::new(
            RejectionCode::InvalidPosition,
            format!(
                "Divider position {}mm must lie strictly between 0 and {}mm",
                position, total_width
            ),
        ));
    }

    let conflict = dividers
        .iter()
        .filter(|d| Some(d.index) != ignore)
        .find(|d| (d.position - position).abs() < min_distance);

    if let Some(existing) = conflict {
        return Err(Rejection::new(
            RejectionCode::DividerTooClose,
            format!(
                "Divider at {}mm is closer than {}mm to divider {} at {}mm",
                position, min_distance, existing.index, existing.position
            ),
        ));
    }

    Ok(())
}
