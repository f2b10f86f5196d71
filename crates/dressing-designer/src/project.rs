//! The furniture project: canonical parameters plus the derived
//! component list.

use chrono::{DateTime, Utc};
use dressing_core::MaterialId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::aggregates::ProjectAggregates;
use crate::dimensions::Dimensions;
use crate::divider::Divider;
use crate::error::GenerationError;
use crate::generator;
use crate::history::SnapshotHistory;
use crate::model::{Component, ComponentId};
use crate::partition::{partition, reconcile};
use crate::render::ProjectView;
use crate::thickness::ThicknessProfile;
use crate::validation::ValidationStatus;
use crate::zone::Zone;

/// Default number of internal project revisions kept
pub const DEFAULT_REVISION_DEPTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// Template the project was created from
    #[serde(default)]
    pub template: Option<String>,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            modified_at: now,
            description: String::new(),
            author: String::new(),
            template: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLocks {
    pub dimensions: bool,
    pub dividers: bool,
    pub thickness: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockKind {
    Dimensions,
    Dividers,
    Thickness,
}

impl ProjectLocks {
    pub fn get(&self, kind: LockKind) -> bool {
        match kind {
            LockKind::Dimensions => self.dimensions,
            LockKind::Dividers => self.dividers,
            LockKind::Thickness => self.thickness,
        }
    }

    pub fn set(&mut self, kind: LockKind, locked: bool) {
        match kind {
            LockKind::Dimensions => self.dimensions = locked,
            LockKind::Dividers => self.dividers = locked,
            LockKind::Thickness => self.thickness = locked,
        }
    }
}

fn default_revisions() -> SnapshotHistory<Arc<FurnitureProject>> {
    SnapshotHistory::new(DEFAULT_REVISION_DEPTH)
}

/// Aggregate root of a cabinet design.
///
/// `components` is derived from the other parameters and only replaced
/// wholesale by [`FurnitureProject::regenerate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureProject {
    pub id: Uuid,
    pub name: String,
    pub dimensions: Dimensions,
    pub material_id: MaterialId,
    pub has_back: bool,
    pub thickness: ThicknessProfile,
    pub dividers: Vec<Divider>,
    pub zones: Vec<Zone>,
    components: Arc<[Component]>,
    #[serde(default)]
    pub material_overrides: BTreeMap<ComponentId, MaterialId>,
    #[serde(default)]
    pub locks: ProjectLocks,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub validation: ValidationStatus,
    #[serde(default)]
    pub aggregates: ProjectAggregates,
    #[serde(skip, default = "default_revisions")]
    revisions: SnapshotHistory<Arc<FurnitureProject>>,
}

impl PartialEq for FurnitureProject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.dimensions == other.dimensions
            && self.material_id == other.material_id
            && self.has_back == other.has_back
            && self.thickness == other.thickness
            && self.dividers == other.dividers
            && self.zones == other.zones
            && self.components == other.components
            && self.material_overrides == other.material_overrides
            && self.locks == other.locks
            && self.metadata == other.metadata
            && self.validation == other.validation
            && self.aggregates == other.aggregates
    }
}

impl Default for FurnitureProject {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl FurnitureProject {
    /// Default-sized project with a single empty zone and its carcass.
    pub fn new(name: impl Into<String>) -> Self {
        let mut project = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dimensions: Dimensions::default(),
            material_id: MaterialId::default(),
            has_back: true,
            thickness: ThicknessProfile::default(),
            dividers: Vec::new(),
            zones: Vec::new(),
            components: Arc::from(Vec::new()),
            material_overrides: BTreeMap::new(),
            locks: ProjectLocks::default(),
            metadata: ProjectMetadata::default(),
            validation: ValidationStatus::default(),
            aggregates: ProjectAggregates::default(),
            revisions: default_revisions(),
        };
        project.repartition(crate::partition::DEFAULT_MIN_ZONE_WIDTH);
        project.components = Arc::from(generator::generate_carcass(
            &project.dimensions,
            &project.thickness,
            &project.dividers,
            project.has_back,
            &project.material_id,
        ));
        project
    }

    /// Recomputes the zones from dimensions and dividers, carrying zone
    /// content across.
    pub fn repartition(&mut self, min_zone_width: f64) {
        let bounds = partition(
            self.dimensions.width,
            &self.dividers,
            self.thickness.vertical_dividers,
            min_zone_width,
        );
        self.zones = reconcile(&bounds, &self.zones, self.dimensions.height);
    }

    /// Replaces the component list with a fresh generation. On error the
    /// previous list is kept.
    ///
    /// Material overrides of components that no longer exist are dropped,
    /// so a part recreated later under the same id starts from the default
    /// material.
    pub fn regenerate(&mut self) -> Result<(), GenerationError> {
        let components = generator::generate_project(self)?;
        self.material_overrides.retain(|id, _| {
            let present = components.iter().any(|c| &c.id == id);
            if !present {
                debug!("Dropping material override of removed component {}", id);
            }
            present
        });
        self.components = Arc::from(components);
        Ok(())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Shared handle to the component list
    pub fn shared_components(&self) -> Arc<[Component]> {
        Arc::clone(&self.components)
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| &c.id == id)
    }

    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.zones.iter().find(|z| z.index == index)
    }

    pub fn zone_mut(&mut self, index: usize) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.index == index)
    }

    pub fn divider(&self, index: usize) -> Option<&Divider> {
        self.dividers.iter().find(|d| d.index == index)
    }

    /// Marks the project as modified now.
    pub fn touch(&mut self) {
        self.metadata.modified_at = Utc::now();
    }

    /// Read-only view handed to renderers
    pub fn view(&self) -> ProjectView<'_> {
        ProjectView {
            id: self.id,
            name: &self.name,
            dimensions: &self.dimensions,
            thickness: &self.thickness,
            has_back: self.has_back,
            material_id: &self.material_id,
            dividers: &self.dividers,
            zones: &self.zones,
            components: &self.components,
            validation: &self.validation,
            aggregates: &self.aggregates,
        }
    }

    fn without_revisions(&self) -> FurnitureProject {
        FurnitureProject {
            revisions: SnapshotHistory::new(1),
            ..self.clone()
        }
    }

    /// Saves the current state as a revision.
    pub fn checkpoint(&mut self, label: impl Into<String>) {
        let snapshot = Arc::new(self.without_revisions());
        self.revisions.record(label, snapshot);
    }

    /// Restores the last revision. Returns false when there is none.
    pub fn rollback(&mut self) -> bool {
        let current = Arc::new(self.without_revisions());
        match self.revisions.undo(current) {
            Some(entry) => {
                self.restore_revision(&entry.snapshot);
                true
            }
            None => false,
        }
    }

    /// Re-applies a rolled back revision. Returns false when there is none.
    pub fn roll_forward(&mut self) -> bool {
        let current = Arc::new(self.without_revisions());
        match self.revisions.redo(current) {
            Some(entry) => {
                self.restore_revision(&entry.snapshot);
                true
            }
            None => false,
        }
    }

    fn restore_revision(&mut self, snapshot: &FurnitureProject) {
        let revisions = std::mem::take(&mut self.revisions);
        *self = snapshot.clone();
        self.revisions = revisions;
    }

    pub fn revision_count(&self) -> usize {
        self.revisions.undo_depth()
    }

    pub fn set_revision_depth(&mut self, depth: usize) {
        self.revisions.set_max_depth(depth);
    }
}
