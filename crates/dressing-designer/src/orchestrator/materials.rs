//! Project and component materials.

use dressing_core::{MaterialCatalog, MaterialId};
use std::sync::Arc;

use super::{ProjectOrchestrator, Regeneration};
use crate::error::{DesignResult, Rejection, RejectionCode};
use crate::model::ComponentId;

/// Unknown ids are refused by a strict catalog and fall back otherwise.
pub(super) fn check_material(
    catalog: &dyn MaterialCatalog,
    strict: bool,
    id: &MaterialId,
) -> Result<(), Rejection> {
    if strict && !catalog.contains(id) {
        return Err(Rejection::new(
            RejectionCode::MaterialNotFound,
            format!("Material {} is not in the catalog", id),
        ));
    }
    Ok(())
}

impl ProjectOrchestrator {
    /// Overrides the material of one component. The override survives
    /// regeneration as long as the component id does.
    pub fn update_component_material(
        &mut self,
        component_id: &ComponentId,
        material_id: MaterialId,
    ) -> DesignResult<()> {
        let catalog = Arc::clone(&self.catalog);
        let strict = self.constraints.strict_materials;

        self.transact("Change component material", |project| {
            check_material(catalog.as_ref(), strict, &material_id)?;
            let component = project.component(component_id).ok_or_else(|| {
                Rejection::new(
                    RejectionCode::ComponentNotFound,
                    format!("No component {}", component_id),
                )
            })?;

            if let Some(zone) = component.metadata.zone_index.and_then(|i| project.zone(i)) {
                if zone.locked {
                    return Err(Rejection::new(
                        RejectionCode::ZoneLocked,
                        format!("Zone {} is locked", zone.index + 1),
                    ));
                }
            }
            if component.is_structural() && !catalog.resolve(&material_id).structural {
                return Err(Rejection::new(
                    RejectionCode::MaterialIncompatible,
                    format!(
                        "Material {} is not rated for {}",
                        material_id, component.name
                    ),
                ));
            }

            project
                .material_overrides
                .insert(component_id.clone(), material_id);
            Ok(Regeneration::Components)
        })
    }

    /// Drops a per-component override.
    pub fn clear_component_material(&mut self, component_id: &ComponentId) -> DesignResult<()> {
        self.transact("Reset component material", |project| {
            if project.material_overrides.remove(component_id).is_none() {
                return Err(Rejection::new(
                    RejectionCode::ComponentNotFound,
                    format!("Component {} has no material override", component_id),
                ));
            }
            Ok(Regeneration::Components)
        })
    }

    /// Changes the project material. Structural parts always follow it, so
    /// their overrides are dropped.
    pub fn update_project_material(&mut self, material_id: MaterialId) -> DesignResult<()> {
        let catalog = Arc::clone(&self.catalog);
        let strict = self.constraints.strict_materials;

        self.transact("Change project material", |project| {
            check_material(catalog.as_ref(), strict, &material_id)?;
            if !catalog.resolve(&material_id).structural {
                return Err(Rejection::new(
                    RejectionCode::MaterialIncompatible,
                    format!("Material {} cannot be used for the carcass", material_id),
                ));
            }

            let structural: Vec<ComponentId> = project
                .components()
                .iter()
                .filter(|c| c.is_structural())
                .map(|c| c.id.clone())
                .collect();
            for id in &structural {
                project.material_overrides.remove(id);
            }

            project.material_id = material_id;
            Ok(Regeneration::Components)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::orchestrator;
    use super::*;
    use crate::model::ComponentType;
    use crate::zone::{ContentType, ShelfSettings, ZoneContent};

    #[test]
    fn test_component_override_survives_regeneration() {
        let mut orchestrator = orchestrator();
        orchestrator
            .set_zone_content_type(0, ContentType::Shelves)
            .unwrap();
        let id = ComponentId::from("shelf-z0-1");
        orchestrator
            .update_component_material(&id, MaterialId::new("plywood_birch"))
            .unwrap();

        orchestrator.update_dimensions(1800.0, 2400.0, 600.0).unwrap();
        let shelf = orchestrator.project().component(&id).unwrap();
        assert_eq!(shelf.material_id.as_str(), "plywood_birch");
    }

    #[test]
    fn test_override_of_removed_component_is_dropped() {
        let mut orchestrator = orchestrator();
        orchestrator
            .set_zone_content_type(0, ContentType::Shelves)
            .unwrap();
        let id = ComponentId::from("shelf-z0-2");
        orchestrator
            .update_component_material(&id, MaterialId::new("veneer_oak"))
            .unwrap();

        let fewer = ZoneContent::Shelves(ShelfSettings {
            shelf_count: 1,
            ..Default::default()
        });
        orchestrator.update_zone_content(0, fewer).unwrap();
        assert!(orchestrator.project().material_overrides.is_empty());

        orchestrator
            .set_zone_content_type(0, ContentType::Shelves)
            .unwrap();
        let shelf = orchestrator.project().component(&id).unwrap();
        assert_eq!(shelf.material_id.as_str(), "melamine_white");

        // undo walks back to the snapshot that still held the override
        orchestrator.undo().unwrap();
        orchestrator.undo().unwrap();
        assert_eq!(
            orchestrator.project().material_overrides.get(&id).map(|m| m.as_str()),
            Some("veneer_oak")
        );
    }

    #[test]
    fn test_unknown_component_rejected() {
        let mut orchestrator = orchestrator();
        let err = orchestrator
            .update_component_material(&ComponentId::from("shelf-z9-0"), MaterialId::default())
            .unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::ComponentNotFound));
    }

    #[test]
    fn test_project_material_drives_carcass() {
        let mut orchestrator = orchestrator();
        orchestrator
            .update_component_material(
                &ComponentId::from("side-0"),
                MaterialId::new("plywood_birch"),
            )
            .unwrap();
        orchestrator
            .update_project_material(MaterialId::new("melamine_anthracite"))
            .unwrap();

        let project = orchestrator.project();
        assert!(project.material_overrides.is_empty());
        for component in project.components().iter().filter(|c| c.is_structural()) {
            assert_eq!(component.material_id.as_str(), "melamine_anthracite");
        }
    }

    #[test]
    fn test_non_structural_project_material_rejected() {
        let mut orchestrator = orchestrator();
        let err = orchestrator
            .update_project_material(MaterialId::new("hdf_white"))
            .unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::MaterialIncompatible));
    }

    #[test]
    fn test_structural_override_needs_structural_material() {
        let mut orchestrator = orchestrator();
        let err = orchestrator
            .update_component_material(&ComponentId::from("back-0"), MaterialId::new("hdf_white"))
            .unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::MaterialIncompatible));

        orchestrator
            .set_zone_content_type(0, ContentType::Drawers)
            .unwrap();
        let front = orchestrator
            .project()
            .components()
            .iter()
            .find(|c| c.component_type == ComponentType::DrawerFront)
            .map(|c| c.id.clone())
            .unwrap();
        orchestrator
            .update_component_material(&front, MaterialId::new("mdf_raw"))
            .unwrap();
        assert_eq!(
            orchestrator.project().component(&front).unwrap().material_id.as_str(),
            "mdf_raw"
        );
    }
}
