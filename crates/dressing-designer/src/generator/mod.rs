//! Component generation.
//!
//! Components are a pure function of the project geometry: the carcass is
//! derived from the dimensions and dividers, then every zone is generated
//! from its content settings. Separations recurse once into their
//! sub-zones using the same per-content generators.

mod carcass;
mod drawers;
mod separation;
mod shelves;
mod wardrobe;

use dressing_core::MaterialId;
use tracing::debug;

use crate::dimensions::Dimensions;
use crate::error::GenerationError;
use crate::model::Component;
use crate::project::FurnitureProject;
use crate::thickness::ThicknessProfile;
use crate::zone::{SubZoneContent, Zone, ZoneContent, ZoneFrame};

pub use carcass::generate_carcass;
pub use drawers::{DRAWER_FRONT_SIDE_GAP, DRAWER_SLIDE_CLEARANCE};
pub use wardrobe::RAIL_END_CLEARANCE;

/// Generates the components of one zone.
///
/// The zone's own material, when set, replaces `material` for its panels.
pub fn generate(
    zone: &Zone,
    profile: &ThicknessProfile,
    dimensions: &Dimensions,
    has_back: bool,
    material: &MaterialId,
) -> Result<Vec<Component>, GenerationError> {
    let frame = ZoneFrame::for_zone(zone, profile, dimensions, has_back);
    let material = zone.material_id.as_ref().unwrap_or(material);

    let components = match &zone.content {
        ZoneContent::Empty => Vec::new(),
        ZoneContent::Shelves(s) => shelves::generate(s, &frame, profile, material)?,
        ZoneContent::Drawers(s) => drawers::generate(s, &frame, profile, material)?,
        ZoneContent::Wardrobe(s) => wardrobe::generate(s, &frame)?,
        ZoneContent::HorizontalSeparation(s) => {
            separation::generate(s, &frame, profile, material)?
        }
    };

    debug!(
        "Zone {} ({}): {} components",
        zone.index,
        zone.content_type(),
        components.len()
    );
    Ok(components)
}

/// Generates a sub-zone's content inside its window.
pub(crate) fn generate_sub_zone(
    content: &SubZoneContent,
    frame: &ZoneFrame,
    profile: &ThicknessProfile,
    material: &MaterialId,
) -> Result<Vec<Component>, GenerationError> {
    match content {
        SubZoneContent::Empty => Ok(Vec::new()),
        SubZoneContent::Shelves(s) => shelves::generate(s, frame, profile, material),
        SubZoneContent::Drawers(s) => drawers::generate(s, frame, profile, material),
        SubZoneContent::Wardrobe(s) => wardrobe::generate(s, frame),
    }
}

/// Regenerates the full component list of `project`: carcass, then every
/// zone in order, then per-component material overrides.
pub fn generate_project(project: &FurnitureProject) -> Result<Vec<Component>, GenerationError> {
    if project.dimensions.is_degenerate() {
        return Err(GenerationError::InvalidGeometry(format!(
            "degenerate dimensions {} x {} x {}",
            project.dimensions.width, project.dimensions.height, project.dimensions.depth
        )));
    }
    if let Some(role) = project.thickness.invalid_roles().first() {
        return Err(GenerationError::InvalidGeometry(format!(
            "thickness of {} is {}",
            role,
            project.thickness.get(*role)
        )));
    }

    let mut components = generate_carcass(
        &project.dimensions,
        &project.thickness,
        &project.dividers,
        project.has_back,
        &project.material_id,
    );

    for zone in &project.zones {
        components.extend(generate(
            zone,
            &project.thickness,
            &project.dimensions,
            project.has_back,
            &project.material_id,
        )?);
    }

    for component in &mut components {
        if let Some(material) = project.material_overrides.get(&component.id) {
            component.material_id = material.clone();
        }
    }

    debug!(
        "Generated {} components for {} zones",
        components.len(),
        project.zones.len()
    );
    Ok(components)
}

pub(crate) fn ensure_finite(
    frame: &ZoneFrame,
    setting: &str,
    value: f64,
) -> Result<(), GenerationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GenerationError::NonFiniteSetting {
            zone_index: frame.zone_index,
            sub_zone: frame.sub_zone,
            setting: setting.to_string(),
        })
    }
}
