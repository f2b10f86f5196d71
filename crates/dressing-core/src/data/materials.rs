//! Materials catalog module
//!
//! This module provides:
//! - Material categories and sheet/linear stock definitions
//! - Pricing and density used for cost and weight estimation
//! - The [`MaterialCatalog`] trait the designer resolves ids through
//! - A standard library of common cabinet materials

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::MaterialError;

/// Id of the material every unresolvable reference falls back to
pub const DEFAULT_MATERIAL_ID: &str = "melamine_white";

/// Id of the material used for hanging rails
pub const RAIL_MATERIAL_ID: &str = "steel_chrome";

/// Material categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum MaterialCategory {
    /// Melamine-faced chipboard
    Melamine,
    /// Medium density fibreboard
    Mdf,
    /// Plywood
    Plywood,
    /// Solid timber
    SolidWood,
    /// Veneered board
    Veneer,
    /// Thin hardboard (HDF), backs and drawer bottoms
    Hardboard,
    /// Metal profiles and tubes
    Metal,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Melamine => write!(f, "Melamine"),
            Self::Mdf => write!(f, "MDF"),
            Self::Plywood => write!(f, "Plywood"),
            Self::SolidWood => write!(f, "Solid Wood"),
            Self::Veneer => write!(f, "Veneer"),
            Self::Hardboard => write!(f, "Hardboard"),
            Self::Metal => write!(f, "Metal"),
        }
    }
}

/// Material identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub struct MaterialId(pub String);

impl MaterialId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MaterialId {
    fn default() -> Self {
        Self(DEFAULT_MATERIAL_ID.to_string())
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MaterialId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Complete material definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique material identifier
    pub id: MaterialId,
    /// Display name
    pub name: String,
    /// Material category
    pub category: MaterialCategory,
    /// Brief description
    pub description: String,

    /// Density in kg/m³
    pub density: f64,
    /// Price per square metre of sheet
    pub price_per_m2: f64,
    /// Price per linear metre, for rails and profiles
    #[serde(default)]
    pub price_per_linear_m: Option<f64>,

    /// Whether the material may be used for load-bearing carcass panels
    pub structural: bool,
    /// Thinnest stock available in mm
    pub min_thickness: f64,
    /// Thickest stock available in mm
    pub max_thickness: f64,
    /// Display colour as `#rrggbb`
    pub color: String,

    /// Whether this is a user-defined custom material
    pub custom: bool,
    /// Notes and tips
    pub notes: String,
}

impl Material {
    /// Create a new material with basic properties
    pub fn new(id: MaterialId, name: String, category: MaterialCategory) -> Self {
        Self {
            id,
            name,
            category,
            description: String::new(),
            density: 650.0,
            price_per_m2: 20.0,
            price_per_linear_m: None,
            structural: true,
            min_thickness: 8.0,
            max_thickness: 38.0,
            color: "#f5f5f0".to_string(),
            custom: false,
            notes: String::new(),
        }
    }

    /// Check that a panel of `thickness` mm can be cut from this material
    pub fn check_thickness(&self, thickness: f64) -> Result<(), MaterialError> {
        if thickness < self.min_thickness || thickness > self.max_thickness {
            return Err(MaterialError::ThicknessOutOfRange {
                id: self.id.to_string(),
                thickness,
                min: self.min_thickness,
                max: self.max_thickness,
            });
        }
        Ok(())
    }
}

/// Resolved pricing and physical data for a material reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMaterial {
    pub id: MaterialId,
    pub name: String,
    pub price_per_m2: f64,
    pub price_per_linear_m: Option<f64>,
    /// kg/m³
    pub density: f64,
    pub structural: bool,
    pub min_thickness: f64,
    pub max_thickness: f64,
    /// True when the requested id was unknown and the default was used
    pub is_fallback: bool,
}

impl ResolvedMaterial {
    /// Built-in fallback used when even the default material is missing
    pub fn builtin_default() -> Self {
        Self {
            id: MaterialId::default(),
            name: "White Melamine".to_string(),
            price_per_m2: 18.5,
            price_per_linear_m: None,
            density: 650.0,
            structural: true,
            min_thickness: 8.0,
            max_thickness: 38.0,
            is_fallback: true,
        }
    }
}

impl From<&Material> for ResolvedMaterial {
    fn from(material: &Material) -> Self {
        Self {
            id: material.id.clone(),
            name: material.name.clone(),
            price_per_m2: material.price_per_m2,
            price_per_linear_m: material.price_per_linear_m,
            density: material.density,
            structural: material.structural,
            min_thickness: material.min_thickness,
            max_thickness: material.max_thickness,
            is_fallback: false,
        }
    }
}

/// Resolves material ids to pricing and physical properties
///
/// Unknown ids never fail: they resolve to the default material with
/// `is_fallback` set.
pub trait MaterialCatalog: Send + Sync {
    /// Resolve `id`, falling back to the default material
    fn resolve(&self, id: &MaterialId) -> ResolvedMaterial;

    /// Whether `id` is known to the catalog
    fn contains(&self, id: &MaterialId) -> bool;

    /// Human readable name for `id`
    fn display_name(&self, id: &MaterialId) -> String {
        self.resolve(id).name
    }
}

/// Materials library - manages collection of materials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialLibrary {
    /// Collection of materials by ID
    materials: HashMap<MaterialId, Material>,
}

impl MaterialLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Add a material to the library
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.id.clone(), material);
    }

    /// Get a material by ID
    pub fn get_material(&self, id: &MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Get a mutable reference to a material
    pub fn get_material_mut(&mut self, id: &MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    /// Remove a material from the library
    pub fn remove_material(&mut self, id: &MaterialId) -> Option<Material> {
        self.materials.remove(id)
    }

    /// Get all materials
    pub fn get_all_materials(&self) -> Vec<&Material> {
        self.materials.values().collect()
    }

    /// Get all materials in a specific category
    pub fn get_materials_by_category(&self, category: MaterialCategory) -> Vec<&Material> {
        self.materials
            .values()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Get all materials rated for carcass panels
    pub fn structural_materials(&self) -> Vec<&Material> {
        self.materials.values().filter(|m| m.structural).collect()
    }

    /// Search materials by name (partial match, case-insensitive)
    pub fn search_by_name(&self, query: &str) -> Vec<&Material> {
        let query_lower = query.to_lowercase();
        self.materials
            .values()
            .filter(|m| m.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Get the number of materials in the library
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialCatalog for MaterialLibrary {
    fn resolve(&self, id: &MaterialId) -> ResolvedMaterial {
        if let Some(material) = self.materials.get(id) {
            return material.into();
        }

        tracing::debug!("Material {} not in catalog, using default", id);
        let mut fallback = self
            .materials
            .get(&MaterialId::default())
            .map(ResolvedMaterial::from)
            .unwrap_or_else(ResolvedMaterial::builtin_default);
        fallback.is_fallback = true;
        fallback
    }

    fn contains(&self, id: &MaterialId) -> bool {
        self.materials.contains_key(id)
    }
}

/// Initialize the standard materials library with common materials
pub fn init_standard_library() -> MaterialLibrary {
    let mut library = MaterialLibrary::new();

    let mut melamine = Material::new(
        MaterialId(DEFAULT_MATERIAL_ID.to_string()),
        "White Melamine".to_string(),
        MaterialCategory::Melamine,
    );
    melamine.description = "Melamine-faced chipboard, the standard carcass board".to_string();
    melamine.density = 650.0;
    melamine.price_per_m2 = 18.5;
    melamine.min_thickness = 8.0;
    melamine.max_thickness = 38.0;
    library.add_material(melamine);

    let mut anthracite = Material::new(
        MaterialId("melamine_anthracite".to_string()),
        "Anthracite Melamine".to_string(),
        MaterialCategory::Melamine,
    );
    anthracite.density = 650.0;
    anthracite.price_per_m2 = 21.0;
    anthracite.color = "#3a3d40".to_string();
    library.add_material(anthracite);

    let mut mdf = Material::new(
        MaterialId("mdf_raw".to_string()),
        "Raw MDF".to_string(),
        MaterialCategory::Mdf,
    );
    mdf.description = "Paintable fibreboard, good for fronts".to_string();
    mdf.density = 750.0;
    mdf.price_per_m2 = 14.0;
    mdf.min_thickness = 3.0;
    mdf.max_thickness = 30.0;
    mdf.color = "#c8b49a".to_string();
    library.add_material(mdf);

    let mut plywood = Material::new(
        MaterialId("plywood_birch".to_string()),
        "Birch Plywood".to_string(),
        MaterialCategory::Plywood,
    );
    plywood.density = 680.0;
    plywood.price_per_m2 = 42.0;
    plywood.min_thickness = 4.0;
    plywood.max_thickness = 30.0;
    plywood.color = "#e3cfa4".to_string();
    library.add_material(plywood);

    let mut oak = Material::new(
        MaterialId("veneer_oak".to_string()),
        "Oak Veneer".to_string(),
        MaterialCategory::Veneer,
    );
    oak.description = "Oak veneered chipboard".to_string();
    oak.density = 680.0;
    oak.price_per_m2 = 55.0;
    oak.min_thickness = 16.0;
    oak.max_thickness = 25.0;
    oak.color = "#b8864b".to_string();
    library.add_material(oak);

    let mut hdf = Material::new(
        MaterialId("hdf_white".to_string()),
        "White HDF".to_string(),
        MaterialCategory::Hardboard,
    );
    hdf.description = "Thin hardboard for backs and drawer bottoms".to_string();
    hdf.density = 900.0;
    hdf.price_per_m2 = 6.5;
    hdf.structural = false;
    hdf.min_thickness = 2.5;
    hdf.max_thickness = 8.0;
    library.add_material(hdf);

    let mut chrome = Material::new(
        MaterialId(RAIL_MATERIAL_ID.to_string()),
        "Chrome Steel".to_string(),
        MaterialCategory::Metal,
    );
    chrome.description = "Chromed steel tube for hanging rails".to_string();
    chrome.density = 7850.0;
    chrome.price_per_m2 = 0.0;
    chrome.price_per_linear_m = Some(9.0);
    chrome.structural = false;
    chrome.min_thickness = 0.8;
    chrome.max_thickness = 2.0;
    chrome.color = "#d9dde0".to_string();
    library.add_material(chrome);

    library
}
