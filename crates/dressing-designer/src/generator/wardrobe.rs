use dressing_core::{MaterialId, RAIL_MATERIAL_ID};
use tracing::warn;

use super::ensure_finite;
use crate::error::GenerationError;
use crate::model::{Component, RailPart};
use crate::zone::{WardrobeSettings, ZoneFrame};

/// Rail length is the zone width minus this, for the end brackets
pub const RAIL_END_CLEARANCE: f64 = 60.0;

pub(super) fn generate(
    settings: &WardrobeSettings,
    frame: &ZoneFrame,
) -> Result<Vec<Component>, GenerationError> {
    ensure_finite(frame, "rail_height", settings.rail_height)?;

    let diameter = settings.rail_type.diameter();
    let length = frame.width - RAIL_END_CLEARANCE;
    if length <= 0.0 {
        warn!(
            "Zone {}: {}mm is too narrow for a hanging rail",
            frame.zone_index, frame.width
        );
        return Ok(Vec::new());
    }
    if frame.usable_height() < diameter {
        warn!("Zone {}: too low for a hanging rail", frame.zone_index);
        return Ok(Vec::new());
    }

    let lowest = frame.interior_bottom() + diameter / 2.0;
    let mut y = frame.interior_top() - settings.rail_height;
    if y < lowest {
        warn!(
            "Zone {}: rail {}mm below the ceiling does not fit, raising it",
            frame.zone_index, settings.rail_height
        );
        y = lowest;
    }

    Ok(vec![RailPart::build(
        frame,
        y,
        length,
        settings.rail_type,
        &MaterialId::new(RAIL_MATERIAL_ID),
    )])
}
