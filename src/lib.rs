//! # Dressing
//!
//! Parametric generator for modular wardrobe and dressing cabinets.
//!
//! ## Architecture
//!
//! Dressing is organized as a workspace with multiple crates:
//!
//! 1. **dressing-core** - Errors, units, material catalog, event bus, constraints
//! 2. **dressing-designer** - Zones, component generation, project orchestration
//! 3. **dressing-settings** - Configuration files
//! 4. **dressing** - This crate: re-exports, logging setup and the `dressing` binary

pub mod cli;

pub use dressing_core;
pub use dressing_designer as designer;
pub use dressing_settings as settings;

pub use dressing_core::{
    init_standard_library, AppEvent, ConstraintConfig, Error, EventBus, MaterialCatalog,
    MaterialId, MaterialLibrary, MeasurementSystem, Result,
};

pub use dressing_designer::{
    Component, ComponentType, ContentType, DesignError, FurnitureProject, ProjectFile,
    ProjectOrchestrator, ProjectTemplate, Zone, ZoneContent,
};

pub use dressing_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so command output on stdout stays clean.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
