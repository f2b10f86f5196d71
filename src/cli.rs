//! Operations behind the `dressing` command line.

use anyhow::{anyhow, Context};
use dressing_core::units::{format_length, get_unit_label, parse_length};
use dressing_core::{init_standard_library, MaterialCatalog, MaterialId, MeasurementSystem};
use dressing_designer::{
    aggregate_bill_of_materials, bill_of_materials, bom_to_json, format_bom_table, Dimensions,
    FurnitureProject, ProjectOrchestrator, ProjectTemplate,
};
use dressing_settings::Config;
use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Parameters of `dressing new`. Lengths are given in the configured
/// measurement system.
#[derive(Debug, Clone, Default)]
pub struct NewProjectOptions {
    pub name: String,
    pub template: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub depth: Option<String>,
    pub material: Option<String>,
}

fn orchestrator_for(config: &Config, project: FurnitureProject) -> ProjectOrchestrator {
    ProjectOrchestrator::with_project(project, Arc::new(init_standard_library()))
        .with_constraints(config.constraints.clone())
        .with_history_limit(config.history.undo_depth)
}

fn parse_dimension(
    name: &str,
    value: Option<&str>,
    system: MeasurementSystem,
) -> anyhow::Result<Option<f64>> {
    value
        .map(|v| parse_length(v, system).map_err(|e| anyhow!("Invalid {} '{}': {}", name, v, e)))
        .transpose()
}

/// Builds a new project from the configuration defaults, an optional
/// template and explicit overrides.
pub fn create_project(
    config: &Config,
    options: &NewProjectOptions,
) -> anyhow::Result<ProjectOrchestrator> {
    let system = config.defaults.measurement_system;
    let template_name = options
        .template
        .as_deref()
        .or(config.defaults.template.as_deref());

    let mut project = match template_name {
        Some(name) => {
            let template: ProjectTemplate = name.parse().map_err(|e: String| anyhow!(e))?;
            template.build()?
        }
        None => FurnitureProject::default(),
    };
    if !options.name.is_empty() {
        project.name = options.name.clone();
    }
    project.set_revision_depth(config.history.revision_depth);

    let mut orchestrator = orchestrator_for(config, project);

    // Templates bring their own size; defaults only apply to blank projects.
    let base = if template_name.is_some() {
        orchestrator.project().dimensions
    } else {
        Dimensions::new(
            config.defaults.width,
            config.defaults.height,
            config.defaults.depth,
        )
    };
    let width = parse_dimension("width", options.width.as_deref(), system)?.unwrap_or(base.width);
    let height =
        parse_dimension("height", options.height.as_deref(), system)?.unwrap_or(base.height);
    let depth = parse_dimension("depth", options.depth.as_deref(), system)?.unwrap_or(base.depth);

    if Dimensions::new(width, height, depth) != orchestrator.project().dimensions {
        orchestrator.update_dimensions(width, height, depth)?;
    }

    let material = MaterialId::new(
        options
            .material
            .as_deref()
            .unwrap_or(&config.defaults.material_id),
    );
    if material != orchestrator.project().material_id {
        orchestrator.update_project_material(material)?;
    }

    orchestrator.clear_history();
    info!(
        "Created project {} with {} components",
        orchestrator.project().name,
        orchestrator.project().components().len()
    );
    Ok(orchestrator)
}

/// Opens a saved project under the configured constraints.
pub fn open_project(config: &Config, path: &Path) -> anyhow::Result<ProjectOrchestrator> {
    let mut orchestrator = orchestrator_for(config, FurnitureProject::default());
    orchestrator
        .load_from_file(path)
        .with_context(|| format!("Cannot open {}", path.display()))?;
    Ok(orchestrator)
}

/// Bill of materials as a text table or JSON.
pub fn render_bom(project: &FurnitureProject, aggregate: bool, json: bool) -> anyhow::Result<String> {
    let lines = if aggregate {
        aggregate_bill_of_materials(project.components())
    } else {
        bill_of_materials(project.components())
    };

    if json {
        bom_to_json(&lines)
    } else {
        Ok(format_bom_table(&lines))
    }
}

/// Human readable overview: size, zones, aggregates and validation.
pub fn format_summary(
    project: &FurnitureProject,
    catalog: &dyn MaterialCatalog,
    system: MeasurementSystem,
) -> String {
    let unit = get_unit_label(system);
    let length = |mm: f64| format!("{} {}", format_length(mm, system), unit);
    let mut out = String::new();

    let _ = writeln!(out, "{}", project.name);
    let _ = writeln!(
        out,
        "  Size:        {} x {} x {}",
        length(project.dimensions.width),
        length(project.dimensions.height),
        length(project.dimensions.depth)
    );
    let _ = writeln!(
        out,
        "  Material:    {}",
        catalog.display_name(&project.material_id)
    );

    let _ = writeln!(out, "  Zones:");
    for zone in &project.zones {
        let _ = writeln!(
            out,
            "    {:>2}. {:<22} {}{}",
            zone.index + 1,
            zone.content_type().as_str(),
            length(zone.width),
            if zone.locked { " (locked)" } else { "" }
        );
    }

    let aggregates = &project.aggregates;
    let _ = writeln!(out, "  Components:  {}", aggregates.component_count);
    let _ = writeln!(out, "  Panel area:  {:.2} m²", aggregates.panel_area_m2);
    let _ = writeln!(out, "  Weight:      {:.1} kg", aggregates.total_weight_kg);
    let _ = writeln!(out, "  Cost:        {:.2}", aggregates.total_cost);
    let _ = writeln!(out, "  Complexity:  {}", aggregates.complexity);

    let validation = &project.validation;
    let _ = writeln!(
        out,
        "  Valid:       {}",
        if validation.is_valid { "yes" } else { "no" }
    );
    for issue in &validation.issues {
        let _ = writeln!(out, "    error: {}", issue);
    }
    for warning in &validation.warnings {
        let _ = writeln!(out, "    warning: {}", warning);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_blank_project_uses_defaults() {
        let mut config = Config::default();
        config.defaults.width = 1500.0;
        let orchestrator = create_project(
            &config,
            &NewProjectOptions {
                name: "Hall".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

        let project = orchestrator.project();
        assert_eq!(project.name, "Hall");
        assert_eq!(project.dimensions.width, 1500.0);
        assert!(!orchestrator.can_undo());
    }

    #[test]
    fn test_create_from_template_with_override() {
        let orchestrator = create_project(
            &Config::default(),
            &NewProjectOptions {
                template: Some("shelving-unit".to_string()),
                height: Some("1800".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let project = orchestrator.project();
        assert_eq!(project.dimensions.width, 800.0);
        assert_eq!(project.dimensions.height, 1800.0);
        assert_eq!(project.metadata.template.as_deref(), Some("shelving_unit"));
    }

    #[test]
    fn test_lengths_follow_measurement_system() {
        let mut config = Config::default();
        config.defaults.measurement_system = MeasurementSystem::Centimetric;
        let orchestrator = create_project(
            &config,
            &NewProjectOptions {
                width: Some("120".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(orchestrator.project().dimensions.width, 1200.0);
    }

    #[test]
    fn test_unknown_template() {
        let result = create_project(
            &Config::default(),
            &NewProjectOptions {
                template: Some("igloo".to_string()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_bounds_size_refused() {
        let result = create_project(
            &Config::default(),
            &NewProjectOptions {
                width: Some("9000".to_string()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_lists_zones() {
        let orchestrator = create_project(
            &Config::default(),
            &NewProjectOptions {
                template: Some("dressing_three_zones".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        let summary = format_summary(
            orchestrator.project(),
            orchestrator.catalog(),
            MeasurementSystem::Metric,
        );
        assert!(summary.contains("2400.0 mm x 2400.0 mm x 600.0 mm"));
        assert!(summary.contains(" 1. horizontal_separation"));
        assert!(summary.contains(" 2. wardrobe"));
        assert!(summary.contains("Valid:       yes"));
    }
}
