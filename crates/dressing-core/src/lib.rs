//! # Dressing Core
//!
//! Core types shared by the Dressing crates: error types, unit conversion,
//! the materials catalog, dimensional constraint configuration and the
//! event bus used to announce project changes.

pub mod constraints;
pub mod data;
pub mod error;
pub mod event_bus;
pub mod units;

pub use constraints::{Bounds, ConstraintConfig, DimensionBounds};

pub use data::{
    init_standard_library, Material, MaterialCatalog, MaterialCategory, MaterialId,
    MaterialLibrary, ResolvedMaterial, DEFAULT_MATERIAL_ID, RAIL_MATERIAL_ID,
};

pub use error::{ConstraintError, Error, MaterialError, Result};

pub use event_bus::{
    AppEvent, ErrorEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter,
    FileEvent, JournalEntry, ProjectEvent, SettingsEvent, SubscriptionId,
};

pub use units::MeasurementSystem;
