//! Data models shared across the workspace.

pub mod materials;

pub use materials::{
    init_standard_library, Material, MaterialCatalog, MaterialCategory, MaterialId,
    MaterialLibrary, ResolvedMaterial, DEFAULT_MATERIAL_ID, RAIL_MATERIAL_ID,
};
