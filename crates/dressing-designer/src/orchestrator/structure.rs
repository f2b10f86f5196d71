//! Overall dimensions, thickness profile, back panel, name and locks.

use super::{ProjectOrchestrator, Regeneration};
use crate::dimensions::Dimensions;
use crate::error::{DesignResult, Rejection, RejectionCode};
use crate::project::LockKind;
use crate::thickness::{PanelRole, ThicknessProfile};

impl ProjectOrchestrator {
    pub fn update_dimensions(&mut self, width: f64, height: f64, depth: f64) -> DesignResult<()> {
        let enforce = self.constraints.enforce_constraints;
        let bounds = self.constraints.dimensions;

        self.transact("Update dimensions", |project| {
            if project.locks.dimensions {
                return Err(Rejection::new(
                    RejectionCode::DimensionsLocked,
                    "Dimensions are locked",
                ));
            }
            if [width, height, depth]
                .iter()
                .any(|v| !v.is_finite() || *v <= 0.0)
            {
                return Err(Rejection::new(
                    RejectionCode::InvalidDimensions,
                    format!(
                        "Dimensions {} x {} x {} must be positive numbers",
                        width, height, depth
                    ),
                ));
            }

            let dimensions = Dimensions::new(width, height, depth);
            if enforce {
                let violations = dimensions.validate(&bounds);
                if !violations.is_empty() {
                    let message = violations
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join("; ");
                    return Err(Rejection::new(RejectionCode::OutOfBounds, message));
                }
                if let Some(divider) = project
                    .dividers
                    .iter()
                    .find(|d| d.end() >= dimensions.width)
                {
                    return Err(Rejection::new(
                        RejectionCode::OutOfBounds,
                        format!(
                            "Divider {} at {}mm would lie outside a {}mm cabinet",
                            divider.index, divider.position, dimensions.width
                        ),
                    ));
                }
            }

            project.dimensions = dimensions;
            Ok(Regeneration::Geometry)
        })
    }

    /// Replaces the whole thickness profile. Divider thickness follows the
    /// `vertical_dividers` role.
    pub fn update_thickness_profile(&mut self, profile: ThicknessProfile) -> DesignResult<()> {
        self.transact("Update thickness", |project| {
            if project.locks.thickness {
                return Err(Rejection::new(
                    RejectionCode::ThicknessLocked,
                    "Thickness profile is locked",
                ));
            }
            if let Some(role) = profile.invalid_roles().first() {
                return Err(Rejection::new(
                    RejectionCode::InvalidThickness,
                    format!("Thickness of {} cannot be {}mm", role, profile.get(*role)),
                ));
            }

            let geometry = profile.vertical_dividers != project.thickness.vertical_dividers;
            project.thickness = profile;
            for divider in &mut project.dividers {
                divider.thickness = profile.vertical_dividers;
            }

            Ok(if geometry {
                Regeneration::Geometry
            } else {
                Regeneration::Components
            })
        })
    }

    pub fn update_thickness(&mut self, role: PanelRole, value: f64) -> DesignResult<()> {
        let mut profile = self.project.thickness;
        profile.set(role, value);
        self.update_thickness_profile(profile)
    }

    pub fn update_has_back(&mut self, has_back: bool) -> DesignResult<()> {
        self.transact("Toggle back panel", |project| {
            project.has_back = has_back;
            Ok(Regeneration::Components)
        })
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DesignResult<()> {
        let name = name.into();
        self.transact("Rename project", |project| {
            if name.trim().is_empty() {
                return Err(Rejection::new(
                    RejectionCode::InvalidSettings,
                    "Project name cannot be empty",
                ));
            }
            project.name = name;
            Ok(Regeneration::None)
        })
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> DesignResult<()> {
        let description = description.into();
        self.transact("Edit description", |project| {
            project.metadata.description = description;
            Ok(Regeneration::None)
        })
    }

    pub fn set_lock(&mut self, kind: LockKind, locked: bool) -> DesignResult<()> {
        let label = if locked { "Lock" } else { "Unlock" };
        self.transact(label, |project| {
            project.locks.set(kind, locked);
            Ok(Regeneration::None)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::orchestrator;
    use super::*;
    use crate::model::ComponentType;
    use crate::zone::{ShelfSettings, ZoneContent};
    use dressing_core::ConstraintConfig;

    #[test]
    fn test_update_dimensions_resizes_zones() {
        let mut orchestrator = orchestrator();
        orchestrator.update_dimensions(1200.0, 2000.0, 500.0).unwrap();
        let project = orchestrator.project();
        assert_eq!(project.dimensions, Dimensions::new(1200.0, 2000.0, 500.0));
        assert_eq!(project.zones[0].width, 1200.0);
        assert_eq!(project.zones[0].height, 2000.0);
    }

    #[test]
    fn test_out_of_bounds_rejected_when_enforced() {
        let mut orchestrator = orchestrator();
        let err = orchestrator
            .update_dimensions(8000.0, 2400.0, 600.0)
            .unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::OutOfBounds));
        assert_eq!(orchestrator.project().dimensions.width, 2000.0);
    }

    #[test]
    fn test_out_of_bounds_flagged_when_not_enforced() {
        let mut orchestrator = orchestrator().with_constraints(ConstraintConfig {
            enforce_constraints: false,
            ..Default::default()
        });
        orchestrator.update_dimensions(8000.0, 2400.0, 600.0).unwrap();
        assert!(!orchestrator.project().validation.is_valid);
    }

    #[test]
    fn test_shrinking_past_a_divider_keeps_zones_inside_the_cabinet() {
        let mut orchestrator = orchestrator().with_constraints(ConstraintConfig {
            enforce_constraints: false,
            ..Default::default()
        });
        orchestrator.add_divider(1500.0).unwrap();
        orchestrator
            .update_zone_content(0, ZoneContent::Shelves(ShelfSettings::default()))
            .unwrap();

        orchestrator.update_dimensions(1000.0, 2000.0, 600.0).unwrap();
        let project = orchestrator.project();
        assert_eq!(project.zones.len(), 1);
        assert_eq!(project.zones[0].width, 1000.0);
        assert!(!project.validation.is_valid);

        let shelves: Vec<_> = project
            .components()
            .iter()
            .filter(|c| c.component_type == ComponentType::Shelf)
            .collect();
        assert!(!shelves.is_empty());
        for shelf in shelves {
            assert!(shelf.width < 1000.0 && shelf.length < 1000.0, "{:?}", shelf);
        }
        assert!(!project
            .components()
            .iter()
            .any(|c| c.component_type == ComponentType::VerticalDivider));
    }

    #[test]
    fn test_locked_dimensions() {
        let mut orchestrator = orchestrator();
        orchestrator.set_lock(LockKind::Dimensions, true).unwrap();
        let err = orchestrator
            .update_dimensions(1000.0, 2000.0, 500.0)
            .unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::DimensionsLocked));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut orchestrator = orchestrator();
        let err = orchestrator.update_dimensions(0.0, 2000.0, 500.0).unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::InvalidDimensions));
    }

    #[test]
    fn test_shelf_thickness_only_changes_shelves() {
        let mut orchestrator = orchestrator();
        orchestrator
            .update_zone_content(0, ZoneContent::Shelves(ShelfSettings::default()))
            .unwrap();
        let before = orchestrator.snapshot();

        orchestrator.update_thickness(PanelRole::Shelves, 25.0).unwrap();
        let after = orchestrator.snapshot();

        for (old, new) in before.components().iter().zip(after.components()) {
            assert_eq!(old.id, new.id);
            if new.component_type == ComponentType::Shelf {
                assert_eq!(new.thickness, 25.0);
            } else {
                assert_eq!(old.thickness, new.thickness);
            }
        }
    }

    #[test]
    fn test_divider_thickness_follows_profile() {
        let mut orchestrator = orchestrator();
        orchestrator.add_divider(1000.0).unwrap();
        orchestrator
            .update_thickness(PanelRole::VerticalDividers, 22.0)
            .unwrap();
        let project = orchestrator.project();
        assert_eq!(project.dividers[0].thickness, 22.0);
        assert_eq!(project.zones[1].position, 1022.0);
    }

    #[test]
    fn test_invalid_thickness_rejected() {
        let mut orchestrator = orchestrator();
        let err = orchestrator
            .update_thickness(PanelRole::Sides, -1.0)
            .unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::InvalidThickness));
    }

    #[test]
    fn test_removing_back_drops_back_panel() {
        let mut orchestrator = orchestrator();
        orchestrator.update_has_back(false).unwrap();
        assert!(orchestrator
            .project()
            .components()
            .iter()
            .all(|c| c.component_type != ComponentType::Back));
    }
}
