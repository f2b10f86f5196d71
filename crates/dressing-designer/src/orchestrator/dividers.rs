//! Vertical divider operations.

use super::{ProjectOrchestrator, Regeneration};
use crate::divider::{check_position, normalize, Divider};
use crate::error::{DesignResult, Rejection, RejectionCode};
use crate::project::FurnitureProject;

fn ensure_unlocked(project: &FurnitureProject) -> Result<(), Rejection> {
    if project.locks.dividers {
        return Err(Rejection::new(
            RejectionCode::DividersLocked,
            "Dividers are locked",
        ));
    }
    Ok(())
}

fn divider_not_found(index: usize) -> Rejection {
    Rejection::new(
        RejectionCode::DividerNotFound,
        format!("No divider with index {}", index),
    )
}

impl ProjectOrchestrator {
    /// Inserts a divider at `position` mm from the left outer face.
    pub fn add_divider(&mut self, position: f64) -> DesignResult<()> {
        let min_distance = self.constraints.min_divider_distance;

        self.transact("Add divider", |project| {
            ensure_unlocked(project)?;
            check_position(
                &project.dividers,
                position,
                project.dimensions.width,
                min_distance,
                None,
            )?;

            project
                .dividers
                .push(Divider::new(position, project.thickness.vertical_dividers));
            normalize(&mut project.dividers);
            Ok(Regeneration::Geometry)
        })
    }

    pub fn remove_divider(&mut self, index: usize) -> DesignResult<()> {
        self.transact("Remove divider", |project| {
            ensure_unlocked(project)?;
            let at = project
                .dividers
                .iter()
                .position(|d| d.index == index)
                .ok_or_else(|| divider_not_found(index))?;

            project.dividers.remove(at);
            normalize(&mut project.dividers);
            Ok(Regeneration::Geometry)
        })
    }

    pub fn move_divider(&mut self, index: usize, position: f64) -> DesignResult<()> {
        let min_distance = self.constraints.min_divider_distance;

        self.transact("Move divider", |project| {
            ensure_unlocked(project)?;
            if project.divider(index).is_none() {
                return Err(divider_not_found(index));
            }
            check_position(
                &project.dividers,
                position,
                project.dimensions.width,
                min_distance,
                Some(index),
            )?;

            if let Some(divider) = project.dividers.iter_mut().find(|d| d.index == index) {
                *divider = Divider::new(position, divider.thickness);
            }
            normalize(&mut project.dividers);
            Ok(Regeneration::Geometry)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::orchestrator;
    use super::*;
    use crate::model::ComponentType;
    use crate::project::LockKind;

    #[test]
    fn test_add_divider_splits_zone() {
        let mut orchestrator = orchestrator();
        orchestrator.add_divider(1000.0).unwrap();

        let project = orchestrator.project();
        assert_eq!(project.dividers.len(), 1);
        assert_eq!(project.zones.len(), 2);
        assert_eq!(project.zones[0].width, 1000.0);
        assert_eq!(project.zones[1].position, 1018.0);
        assert_eq!(project.zones[1].width, 982.0);
        assert!(project
            .components()
            .iter()
            .any(|c| c.component_type == ComponentType::VerticalDivider));
    }

    #[test]
    fn test_dividers_stay_sorted() {
        let mut orchestrator = orchestrator();
        orchestrator.add_divider(1500.0).unwrap();
        orchestrator.add_divider(500.0).unwrap();

        let positions: Vec<(usize, f64)> = orchestrator
            .project()
            .dividers
            .iter()
            .map(|d| (d.index, d.position))
            .collect();
        assert_eq!(positions, vec![(0, 500.0), (1, 1500.0)]);
    }

    #[test]
    fn test_divider_too_close_rejected() {
        let mut orchestrator = orchestrator();
        orchestrator.add_divider(1000.0).unwrap();
        let err = orchestrator.add_divider(1100.0).unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::DividerTooClose));
        assert_eq!(orchestrator.project().dividers.len(), 1);
    }

    #[test]
    fn test_divider_outside_width_rejected() {
        let mut orchestrator = orchestrator();
        let err = orchestrator.add_divider(2000.0).unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::InvalidPosition));
    }

    #[test]
    fn test_move_and_remove() {
        let mut orchestrator = orchestrator();
        orchestrator.add_divider(1000.0).unwrap();
        orchestrator.move_divider(0, 1200.0).unwrap();
        assert_eq!(orchestrator.project().zones[0].width, 1200.0);

        orchestrator.remove_divider(0).unwrap();
        assert_eq!(orchestrator.project().zones.len(), 1);

        let err = orchestrator.remove_divider(0).unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::DividerNotFound));
    }

    #[test]
    fn test_locked_dividers() {
        let mut orchestrator = orchestrator();
        orchestrator.set_lock(LockKind::Dividers, true).unwrap();
        let err = orchestrator.add_divider(1000.0).unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::DividersLocked));
    }
}
