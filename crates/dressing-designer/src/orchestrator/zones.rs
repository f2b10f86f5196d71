//! Zone content and zone flags.

use dressing_core::MaterialId;

use super::materials::check_material;
use super::{ProjectOrchestrator, Regeneration};
use crate::error::{DesignResult, Rejection, RejectionCode};
use crate::project::FurnitureProject;
use crate::zone::{ContentType, SubZoneContent, SubZoneName, Zone, ZoneContent};

fn find_zone(project: &mut FurnitureProject, index: usize) -> Result<&mut Zone, Rejection> {
    project.zone_mut(index).ok_or_else(|| {
        Rejection::new(
            RejectionCode::ZoneNotFound,
            format!("No zone with index {}", index),
        )
    })
}

fn find_unlocked_zone(project: &mut FurnitureProject, index: usize) -> Result<&mut Zone, Rejection> {
    let zone = find_zone(project, index)?;
    if zone.locked {
        return Err(Rejection::new(
            RejectionCode::ZoneLocked,
            format!("Zone {} is locked", index + 1),
        ));
    }
    Ok(zone)
}

impl ProjectOrchestrator {
    pub fn update_zone_content(&mut self, zone_index: usize, content: ZoneContent) -> DesignResult<()> {
        self.transact("Update zone content", |project| {
            let profile = project.thickness;
            let zone = find_unlocked_zone(project, zone_index)?;
            content.validate(zone.height, &profile)?;
            zone.content = content;
            Ok(Regeneration::Components)
        })
    }

    /// Switches a zone to `content_type` with default settings.
    pub fn set_zone_content_type(
        &mut self,
        zone_index: usize,
        content_type: ContentType,
    ) -> DesignResult<()> {
        self.update_zone_content(zone_index, ZoneContent::with_defaults(content_type))
    }

    /// Replaces one sub-zone of a horizontal separation.
    pub fn update_sub_zone_content(
        &mut self,
        zone_index: usize,
        sub_zone: SubZoneName,
        content: SubZoneContent,
    ) -> DesignResult<()> {
        self.transact("Update sub-zone content", |project| {
            let profile = project.thickness;
            let zone = find_unlocked_zone(project, zone_index)?;
            let height = zone.height;

            let ZoneContent::HorizontalSeparation(settings) = &mut zone.content else {
                return Err(Rejection::new(
                    RejectionCode::SubZoneNotFound,
                    format!("Zone {} has no horizontal separation", zone_index + 1),
                ));
            };
            let slot = settings.sub_zone_mut(sub_zone).ok_or_else(|| {
                Rejection::new(
                    RejectionCode::SubZoneNotFound,
                    format!(
                        "Zone {} has no {} sub-zone",
                        zone_index + 1,
                        sub_zone
                    ),
                )
            })?;
            *slot = content;

            zone.content.validate(height, &profile)?;
            Ok(Regeneration::Components)
        })
    }

    pub fn set_zone_locked(&mut self, zone_index: usize, locked: bool) -> DesignResult<()> {
        let label = if locked { "Lock zone" } else { "Unlock zone" };
        self.transact(label, |project| {
            find_zone(project, zone_index)?.locked = locked;
            Ok(Regeneration::None)
        })
    }

    pub fn set_zone_visible(&mut self, zone_index: usize, visible: bool) -> DesignResult<()> {
        let label = if visible { "Show zone" } else { "Hide zone" };
        self.transact(label, |project| {
            find_zone(project, zone_index)?.visible = visible;
            Ok(Regeneration::None)
        })
    }

    /// Sets or clears the material of a zone's content.
    pub fn set_zone_material(
        &mut self,
        zone_index: usize,
        material_id: Option<MaterialId>,
    ) -> DesignResult<()> {
        let catalog = std::sync::Arc::clone(&self.catalog);
        let strict = self.constraints.strict_materials;

        self.transact("Set zone material", |project| {
            if let Some(id) = &material_id {
                check_material(catalog.as_ref(), strict, id)?;
            }
            find_unlocked_zone(project, zone_index)?.material_id = material_id;
            Ok(Regeneration::Components)
        })
    }

    pub fn set_zone_tags(&mut self, zone_index: usize, tags: Vec<String>) -> DesignResult<()> {
        self.transact("Tag zone", |project| {
            find_zone(project, zone_index)?.tags = tags;
            Ok(Regeneration::None)
        })
    }
}
