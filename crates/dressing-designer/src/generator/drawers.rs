use dressing_core::MaterialId;
use tracing::warn;

use super::ensure_finite;
use crate::error::GenerationError;
use crate::model::{
    Component, DrawerBottomPart, DrawerBoxPart, DrawerFrontPart, Orientation, PartSize, Placement,
};
use crate::thickness::ThicknessProfile;
use crate::zone::{DrawerSettings, DrawerType, ZoneFrame};

/// Reveal between a drawer front and the zone edge, each side
pub const DRAWER_FRONT_SIDE_GAP: f64 = 2.0;
/// Space taken by a runner on each side of a drawer box
pub const DRAWER_SLIDE_CLEARANCE: f64 = 13.0;
/// Space kept behind a drawer box
const REAR_CLEARANCE: f64 = 10.0;
/// Box sides sit this much lower than the front
const BOX_HEIGHT_REDUCTION: f64 = 40.0;

pub(super) fn generate(
    settings: &DrawerSettings,
    frame: &ZoneFrame,
    profile: &ThicknessProfile,
    material: &MaterialId,
) -> Result<Vec<Component>, GenerationError> {
    ensure_finite(frame, "face_height", settings.face_height)?;
    ensure_finite(frame, "operational_gap", settings.operational_gap)?;
    if let Some(depth) = settings.box_depth {
        ensure_finite(frame, "box_depth", depth)?;
    }

    if settings.drawer_count == 0 {
        return Ok(Vec::new());
    }

    let count = settings.drawer_count as usize;
    let n = count as f64;
    let gap = settings.operational_gap.max(0.0);
    let usable = frame.usable_height();

    let mut face = settings.face_height;
    let required = n * face + (n - 1.0) * gap;
    if required > usable {
        face = (usable - (n - 1.0) * gap) / n;
        warn!(
            "Zone {}: {} drawers of {}mm need {}mm but only {}mm available, reducing faces to {:.1}mm",
            frame.zone_index, count, settings.face_height, required, usable, face
        );
    }
    if face <= 0.0 {
        warn!(
            "Zone {}: no room for {} drawers, skipping",
            frame.zone_index, count
        );
        return Ok(Vec::new());
    }

    let front_width = frame.width - 2.0 * DRAWER_FRONT_SIDE_GAP;
    if front_width <= 0.0 {
        warn!("Zone {}: too narrow for drawers", frame.zone_index);
        return Ok(Vec::new());
    }

    let mut components = Vec::new();
    for i in 0..count {
        let bottom = frame.interior_bottom() + i as f64 * (face + gap);
        components.push(DrawerFrontPart::build(
            frame,
            i,
            bottom,
            front_width,
            face,
            profile.drawer_front,
            (settings.handle_type, settings.handle_position),
            material,
        ));

        if settings.drawer_type == DrawerType::Custom {
            components.extend(drawer_box(settings, frame, profile, material, i, bottom, face));
        }
    }

    Ok(components)
}

/// Sides, back and bottom of a cut drawer box
fn drawer_box(
    settings: &DrawerSettings,
    frame: &ZoneFrame,
    profile: &ThicknessProfile,
    material: &MaterialId,
    drawer_index: usize,
    bottom: f64,
    face: f64,
) -> Vec<Component> {
    let side_t = profile.drawer_side;
    let back_t = profile.drawer_back;
    let bottom_t = profile.drawer_bottom;

    let inner_width = frame.width - 2.0 * DRAWER_SLIDE_CLEARANCE;
    let available_depth = frame.interior_depth() - profile.drawer_front - REAR_CLEARANCE;
    let box_depth = match settings.box_depth {
        Some(depth) if depth > available_depth => {
            warn!(
                "Zone {}: drawer box depth {}mm exceeds {:.1}mm available, shortening",
                frame.zone_index, depth, available_depth
            );
            available_depth
        }
        Some(depth) => depth,
        None => available_depth,
    };
    let box_height = (face - BOX_HEIGHT_REDUCTION).max(face / 2.0);
    let between_sides = inner_width - 2.0 * side_t;

    if between_sides <= 0.0 || box_depth <= back_t || box_height <= bottom_t {
        warn!(
            "Zone {}: no room for drawer box {}, fronts only",
            frame.zone_index, drawer_index
        );
        return Vec::new();
    }

    // z of the box front face, right behind the drawer front
    let box_front = frame.depth - profile.drawer_front;
    let centre_x = frame.centre_x();

    let mut parts = Vec::with_capacity(4);
    let side_xs = [
        frame.x + DRAWER_SLIDE_CLEARANCE + side_t / 2.0,
        frame.x + frame.width - DRAWER_SLIDE_CLEARANCE - side_t / 2.0,
    ];
    for (side, x) in side_xs.into_iter().enumerate() {
        parts.push(DrawerBoxPart::build_side(
            frame,
            drawer_index,
            side,
            PartSize::new(box_depth, box_height, side_t),
            Placement::new(
                x,
                bottom + box_height / 2.0,
                box_front - box_depth / 2.0,
                Orientation::Lateral,
            ),
            material,
        ));
    }

    let back_height = box_height - bottom_t;
    parts.push(DrawerBoxPart::build_back(
        frame,
        drawer_index,
        PartSize::new(between_sides, back_height, back_t),
        Placement::new(
            centre_x,
            bottom + bottom_t + back_height / 2.0,
            box_front - box_depth + back_t / 2.0,
            Orientation::Frontal,
        ),
        material,
    ));

    let bottom_depth = box_depth - back_t;
    parts.push(DrawerBottomPart::build(
        frame,
        drawer_index,
        PartSize::new(between_sides, bottom_depth, bottom_t),
        Placement::new(
            centre_x,
            bottom + bottom_t / 2.0,
            box_front - bottom_depth / 2.0,
            Orientation::Horizontal,
        ),
        material,
    ));

    parts
}
