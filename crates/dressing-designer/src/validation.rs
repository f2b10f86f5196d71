//! Project validation.
//!
//! Issues make a project invalid; warnings are advice only.

use dressing_core::{ConstraintConfig, MaterialCatalog, MaterialId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::project::FurnitureProject;
use crate::zone::ZoneContent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationStatus {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationStatus {
    fn default() -> Self {
        Self {
            is_valid: true,
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationStatus {
    fn from_findings(issues: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
            warnings,
        }
    }
}

pub fn validate_project(
    project: &FurnitureProject,
    constraints: &ConstraintConfig,
    catalog: &dyn MaterialCatalog,
) -> ValidationStatus {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    issues.extend(
        project
            .dimensions
            .validate(&constraints.dimensions)
            .into_iter()
            .map(|e| e.to_string()),
    );

    for divider in &project.dividers {
        if divider.end() >= project.dimensions.width {
            issues.push(format!(
                "Divider {} at {}mm lies outside the {}mm cabinet",
                divider.index, divider.position, project.dimensions.width
            ));
        }
    }

    if project.zones.is_empty() {
        issues.push(format!(
            "No zone is at least {}mm wide",
            constraints.min_zone_width
        ));
    }
    if project.components().is_empty() {
        issues.push("No components generated".to_string());
    }

    warnings.extend(project.thickness.advisories());

    for zone in &project.zones {
        if let ZoneContent::HorizontalSeparation(s) = &zone.content {
            if s.separators_overlap(project.thickness.horizontal_dividers) {
                warnings.push(format!(
                    "Zone {}: second separator ({}mm) does not clear the first ({}mm) and is ignored",
                    zone.index + 1,
                    s.second_separation_height,
                    s.separation_height
                ));
            }
        }
    }

    warnings.extend(material_warnings(project, catalog));

    ValidationStatus::from_findings(issues, warnings)
}

fn material_warnings(project: &FurnitureProject, catalog: &dyn MaterialCatalog) -> Vec<String> {
    let mut warnings = Vec::new();

    let project_material = catalog.resolve(&project.material_id);
    if !project_material.structural {
        warnings.push(format!(
            "Project material {} is not rated for carcass panels",
            project.material_id
        ));
    }

    let used: BTreeSet<&MaterialId> = project
        .components()
        .iter()
        .map(|c| &c.material_id)
        .collect();
    for id in used {
        if !catalog.contains(id) {
            warnings.push(format!(
                "Material {} is not in the catalog, priced as {}",
                id,
                catalog.resolve(id).name
            ));
        }
    }

    let mut out_of_range: BTreeSet<(String, String)> = BTreeSet::new();
    for component in project.components().iter().filter(|c| c.is_panel()) {
        let material = catalog.resolve(&component.material_id);
        if material.is_fallback {
            continue;
        }
        if component.thickness < material.min_thickness
            || component.thickness > material.max_thickness
        {
            out_of_range.insert((
                component.material_id.to_string(),
                format!("{}", component.thickness),
            ));
        }
    }
    for (material, thickness) in out_of_range {
        warnings.push(format!(
            "Material {} is not available in {}mm",
            material, thickness
        ));
    }

    warnings
}
