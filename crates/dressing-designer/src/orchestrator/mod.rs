//! Project orchestrator.
//!
//! Owns the current project and runs every mutation as a transaction:
//! preconditions are checked on a working copy, the copy is re-partitioned
//! and regenerated, and only then swapped in. The previous state goes on
//! the undo stack as a shared snapshot, so undo and redo are pointer swaps.
//!
//! Submodules group the operations:
//! - `structure`: dimensions, thickness, back panel, name and locks
//! - `dividers`: divider insertion, removal and moves
//! - `zones`: zone and sub-zone content, zone flags
//! - `materials`: project and per-component materials
//! - `file_io`: templates, new, load and save

mod dividers;
mod file_io;
mod materials;
mod structure;
mod zones;

use dressing_core::{
    AppEvent, ConstraintConfig, ErrorEvent, EventBus, EventBusError, JournalEntry, MaterialCatalog,
    ProjectEvent,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

use crate::aggregates::compute_aggregates;
use crate::error::{DesignError, DesignResult, Rejection, RejectionCode};
use crate::history::{SnapshotHistory, DEFAULT_HISTORY_DEPTH};
use crate::project::FurnitureProject;
use crate::render::ProjectRenderer;
use crate::validation::validate_project;
use crate::zone::Zone;

/// What a mutation invalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Regeneration {
    /// Metadata only, components unchanged
    None,
    /// Zone content, materials or thickness
    Components,
    /// Dimensions or dividers: zones are re-partitioned first
    Geometry,
}

pub struct ProjectOrchestrator {
    project: Arc<FurnitureProject>,
    history: SnapshotHistory<Arc<FurnitureProject>>,
    catalog: Arc<dyn MaterialCatalog>,
    constraints: ConstraintConfig,
    events: Option<Arc<EventBus>>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl std::fmt::Debug for ProjectOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectOrchestrator")
            .field("project", &self.project.name)
            .field("undo_depth", &self.history.undo_depth())
            .field("redo_depth", &self.history.redo_depth())
            .field("current_file_path", &self.current_file_path)
            .field("is_modified", &self.is_modified)
            .finish()
    }
}

impl ProjectOrchestrator {
    /// Starts on a default project.
    pub fn new(catalog: Arc<dyn MaterialCatalog>) -> Self {
        Self::with_project(FurnitureProject::default(), catalog)
    }

    pub fn with_project(project: FurnitureProject, catalog: Arc<dyn MaterialCatalog>) -> Self {
        let mut orchestrator = Self {
            project: Arc::new(project),
            history: SnapshotHistory::new(DEFAULT_HISTORY_DEPTH),
            catalog,
            constraints: ConstraintConfig::default(),
            events: None,
            current_file_path: None,
            is_modified: false,
        };
        orchestrator.refresh_derived();
        orchestrator
    }

    pub fn with_constraints(mut self, constraints: ConstraintConfig) -> Self {
        self.constraints = constraints;
        self.refresh_derived();
        self
    }

    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn with_history_limit(mut self, depth: usize) -> Self {
        self.history.set_max_depth(depth);
        self
    }

    pub fn project(&self) -> &FurnitureProject {
        &self.project
    }

    /// Shared handle to the current state
    pub fn snapshot(&self) -> Arc<FurnitureProject> {
        Arc::clone(&self.project)
    }

    pub fn catalog(&self) -> &dyn MaterialCatalog {
        self.catalog.as_ref()
    }

    pub fn constraints(&self) -> &ConstraintConfig {
        &self.constraints
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_label(&self) -> Option<&str> {
        self.history.undo_label()
    }

    pub fn redo_label(&self) -> Option<&str> {
        self.history.redo_label()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Restores the state before the last committed mutation.
    pub fn undo(&mut self) -> DesignResult<()> {
        let entry = self
            .history
            .undo(Arc::clone(&self.project))
            .ok_or_else(|| DesignError::rejected(RejectionCode::NothingToUndo, "Nothing to undo"))?;

        self.project = entry.snapshot;
        self.is_modified = true;
        info!("Undo: {}", entry.label);
        self.publish(AppEvent::Project(ProjectEvent::Undone {
            project_id: self.project.id.to_string(),
            operation: entry.label,
        }));
        Ok(())
    }

    /// Re-applies the last undone mutation.
    pub fn redo(&mut self) -> DesignResult<()> {
        let entry = self
            .history
            .redo(Arc::clone(&self.project))
            .ok_or_else(|| DesignError::rejected(RejectionCode::NothingToRedo, "Nothing to redo"))?;

        self.project = entry.snapshot;
        self.is_modified = true;
        info!("Redo: {}", entry.label);
        self.publish(AppEvent::Project(ProjectEvent::Redone {
            project_id: self.project.id.to_string(),
            operation: entry.label,
        }));
        Ok(())
    }

    /// Events the attached bus journaled for the current project after
    /// sequence `after`, oldest first. Empty without a bus.
    pub fn change_log(&self, after: Option<u64>) -> Vec<JournalEntry> {
        match &self.events {
            Some(events) => events.journal(&self.project.id.to_string(), after),
            None => Vec::new(),
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Runs one renderer against the current state. Renderer failures are
    /// logged and published, never propagated.
    pub fn render(&self, renderer: &mut dyn ProjectRenderer) -> bool {
        match renderer.render(&self.project.view(), self.catalog.as_ref()) {
            Ok(()) => true,
            Err(e) => {
                error!("Renderer {} failed: {:#}", renderer.name(), e);
                self.publish(AppEvent::Error(ErrorEvent::RenderFailed {
                    renderer: renderer.name().to_string(),
                    message: format!("{:#}", e),
                }));
                false
            }
        }
    }

    /// Runs every renderer, returning how many succeeded.
    pub fn render_all(&self, renderers: &mut [Box<dyn ProjectRenderer>]) -> usize {
        let mut succeeded = 0;
        for renderer in renderers.iter_mut() {
            if self.render(renderer.as_mut()) {
                succeeded += 1;
            }
        }
        succeeded
    }

    /// Applies `apply` to a working copy and commits it.
    ///
    /// Nothing changes unless `apply` accepts the request and the
    /// regeneration succeeds.
    pub(crate) fn transact<F>(&mut self, label: &str, apply: F) -> DesignResult<()>
    where
        F: FnOnce(&mut FurnitureProject) -> Result<Regeneration, Rejection>,
    {
        let mut working = (*self.project).clone();

        let regeneration = match apply(&mut working) {
            Ok(r) => r,
            Err(rejection) => return Err(self.reject(rejection)),
        };

        if regeneration == Regeneration::Geometry {
            working.repartition(self.constraints.min_zone_width);
        }
        if regeneration != Regeneration::None {
            if let Err(e) = working.regenerate() {
                error!("{} failed: {}", label, e);
                self.publish(AppEvent::Error(ErrorEvent::Generation {
                    project_id: self.project.id.to_string(),
                    message: e.to_string(),
                }));
                return Err(DesignError::Generation(e));
            }
        }

        if let Err(rejection) = check_locked_zones(&self.project.zones, &working.zones) {
            return Err(self.reject(rejection));
        }

        working.touch();
        working.validation = validate_project(&working, &self.constraints, self.catalog.as_ref());
        working.aggregates =
            compute_aggregates(working.components(), &working.zones, self.catalog.as_ref());

        let was_valid = self.project.validation.is_valid;
        let previous = std::mem::replace(&mut self.project, Arc::new(working));
        self.history.record(label, previous);
        self.is_modified = true;

        let project = &self.project;
        info!(
            "{}: {} zones, {} components",
            label,
            project.zones.len(),
            project.components().len()
        );
        for warning in &project.validation.warnings {
            debug!("Validation warning: {}", warning);
        }

        self.publish(AppEvent::Project(ProjectEvent::Changed {
            project_id: project.id.to_string(),
            operation: label.to_string(),
            component_count: project.components().len(),
        }));
        if was_valid != project.validation.is_valid {
            self.publish(AppEvent::Project(ProjectEvent::ValidationChanged {
                project_id: project.id.to_string(),
                is_valid: project.validation.is_valid,
                issue_count: project.validation.issues.len(),
            }));
        }

        Ok(())
    }

    fn reject(&self, rejection: Rejection) -> DesignError {
        warn!("Rejected: {}", rejection);
        self.publish(AppEvent::Project(ProjectEvent::MutationRejected {
            project_id: self.project.id.to_string(),
            code: rejection.code.as_str().to_string(),
            message: rejection.message.clone(),
        }));
        DesignError::Rejected(rejection)
    }

    /// Recomputes validation and aggregates of the current state in place,
    /// outside of history.
    fn refresh_derived(&mut self) {
        let validation =
            validate_project(&self.project, &self.constraints, self.catalog.as_ref());
        let aggregates = compute_aggregates(
            self.project.components(),
            &self.project.zones,
            self.catalog.as_ref(),
        );
        let project = Arc::make_mut(&mut self.project);
        project.validation = validation;
        project.aggregates = aggregates;
    }

    fn publish(&self, event: AppEvent) {
        let Some(events) = &self.events else {
            return;
        };
        match events.publish(event) {
            Ok(receivers) => trace!("Event delivered to {} receivers", receivers),
            Err(EventBusError::NoSubscribers) => trace!("No event subscribers"),
        }
    }
}

/// A locked zone must come out of a mutation with the same geometry and
/// content.
fn check_locked_zones(before: &[Zone], after: &[Zone]) -> Result<(), Rejection> {
    for locked in before.iter().filter(|z| z.locked) {
        let kept = after.iter().any(|z| {
            z.position == locked.position
                && z.width == locked.width
                && z.height == locked.height
                && z.content == locked.content
                && z.material_id == locked.material_id
        });
        if !kept {
            return Err(Rejection::new(
                RejectionCode::ZoneLocked,
                format!("Zone {} is locked", locked.index + 1),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dressing_core::init_standard_library;

    pub(super) fn orchestrator() -> ProjectOrchestrator {
        ProjectOrchestrator::new(Arc::new(init_standard_library()))
    }

    #[test]
    fn test_new_orchestrator_has_derived_state() {
        let orchestrator = orchestrator();
        assert!(orchestrator.project().validation.is_valid);
        assert_eq!(orchestrator.project().aggregates.component_count, 5);
        assert!(!orchestrator.can_undo());
    }

    #[test]
    fn test_undo_on_empty_history_is_an_error() {
        let mut orchestrator = orchestrator();
        let err = orchestrator.undo().unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::NothingToUndo));
        let err = orchestrator.redo().unwrap_err();
        assert_eq!(err.code(), Some(RejectionCode::NothingToRedo));
    }

    #[test]
    fn test_rejected_transaction_leaves_state() {
        let mut orchestrator = orchestrator();
        let before = orchestrator.snapshot();
        let result = orchestrator.transact("noop", |_| {
            Err(Rejection::new(RejectionCode::InvalidSettings, "no"))
        });
        assert!(result.unwrap_err().is_rejection());
        assert!(Arc::ptr_eq(&before, &orchestrator.snapshot()));
        assert!(!orchestrator.can_undo());
    }

    #[test]
    fn test_generation_failure_leaves_state() {
        let mut orchestrator = orchestrator();
        let before = orchestrator.snapshot();
        let result = orchestrator.transact("break", |p| {
            p.dimensions.depth = f64::NAN;
            Ok(Regeneration::Components)
        });
        assert!(matches!(result, Err(DesignError::Generation(_))));
        assert!(Arc::ptr_eq(&before, &orchestrator.snapshot()));
        assert!(!orchestrator.can_undo());
    }

    #[test]
    fn test_change_log_without_bus_is_empty() {
        let mut orchestrator = orchestrator();
        orchestrator.rename("Renamed").unwrap();
        assert!(orchestrator.change_log(None).is_empty());
    }

    #[test]
    fn test_undo_restores_the_same_snapshot() {
        let mut orchestrator = orchestrator();
        let before = orchestrator.snapshot();
        orchestrator.rename("Renamed").unwrap();
        orchestrator.undo().unwrap();
        assert!(Arc::ptr_eq(&before, &orchestrator.snapshot()));
    }
}
