//! # Dressing Designer
//!
//! Parametric layout and component generation for modular wardrobe and
//! dressing cabinets.
//!
//! A [`FurnitureProject`] holds a handful of parameters: overall
//! dimensions, a thickness profile, vertical divider positions and the
//! content of every zone between them. Everything else (zones, panels,
//! shelves, drawer parts, rails, separators) is derived from those
//! parameters by a deterministic regeneration.
//!
//! ## Architecture
//!
//! ```text
//! ProjectOrchestrator (transactions, undo/redo, events)
//!   └── FurnitureProject
//!         ├── Dimensions, ThicknessProfile, Dividers
//!         ├── Zones (partition + reconcile)
//!         └── Components (generator: carcass, shelves, drawers,
//!                         wardrobe rails, horizontal separations)
//!
//! Validation, aggregates, bill of materials, project files
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dressing_core::init_standard_library;
//! use dressing_designer::{ContentType, ProjectOrchestrator};
//! use std::sync::Arc;
//!
//! let mut orchestrator = ProjectOrchestrator::new(Arc::new(init_standard_library()));
//! orchestrator.add_divider(1000.0)?;
//! orchestrator.set_zone_content_type(0, ContentType::Shelves)?;
//! orchestrator.set_zone_content_type(1, ContentType::Wardrobe)?;
//! println!("{} components", orchestrator.project().components().len());
//! ```

pub mod aggregates;
pub mod dimensions;
pub mod divider;
pub mod error;
pub mod export;
pub mod generator;
pub mod history;
pub mod model;
pub mod orchestrator;
pub mod partition;
pub mod project;
pub mod render;
pub mod serialization;
pub mod templates;
pub mod thickness;
pub mod validation;
pub mod zone;

pub use aggregates::{compute_aggregates, ComplexityRating, ProjectAggregates};
pub use dimensions::Dimensions;
pub use divider::Divider;
pub use error::{DesignError, DesignResult, GenerationError, Rejection, RejectionCode};
pub use export::{aggregate_bill_of_materials, bill_of_materials, bom_to_json, format_bom_table, BomLine};
pub use generator::{generate, generate_carcass, generate_project};
pub use history::{HistoryEntry, SnapshotHistory, DEFAULT_HISTORY_DEPTH};
pub use model::{Component, ComponentId, ComponentKind, ComponentMetadata, ComponentType};
pub use orchestrator::ProjectOrchestrator;
pub use partition::{partition, reconcile, ZoneBounds, DEFAULT_MIN_ZONE_WIDTH};
pub use project::{FurnitureProject, LockKind, ProjectLocks, ProjectMetadata};
pub use render::{ProjectRenderer, ProjectView};
pub use serialization::ProjectFile;
pub use templates::ProjectTemplate;
pub use thickness::{PanelRole, ThicknessProfile};
pub use validation::{validate_project, ValidationStatus};
pub use zone::{
    ContentType, DrawerSettings, DrawerType, HandlePosition, HandleType, RailType,
    SeparationSettings, ShelfSettings, ShelfSpacing, SubZoneContent, SubZoneName,
    WardrobeSettings, Zone, ZoneContent, ZoneFrame,
};
