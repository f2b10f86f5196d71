//! Cost, weight and complexity totals derived from the component list.

use dressing_core::units::round2;
use dressing_core::MaterialCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Component;
use crate::zone::{DrawerType, SubZoneContent, Zone, ZoneContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityRating {
    #[default]
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ComplexityRating {
    pub fn from_score(score: f64) -> Self {
        if score < 6.0 {
            ComplexityRating::Low
        } else if score < 12.0 {
            ComplexityRating::Medium
        } else if score < 20.0 {
            ComplexityRating::High
        } else {
            ComplexityRating::VeryHigh
        }
    }
}

impl fmt::Display for ComplexityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplexityRating::Low => "low",
            ComplexityRating::Medium => "medium",
            ComplexityRating::High => "high",
            ComplexityRating::VeryHigh => "very_high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectAggregates {
    pub total_cost: f64,
    pub total_weight_kg: f64,
    /// Number of pieces, quantities included
    pub component_count: usize,
    /// Net face area of all panels, m²
    pub panel_area_m2: f64,
    pub complexity: ComplexityRating,
}

pub fn compute_aggregates(
    components: &[Component],
    zones: &[Zone],
    catalog: &dyn MaterialCatalog,
) -> ProjectAggregates {
    let mut total_cost = 0.0;
    let mut total_weight = 0.0;
    let mut panel_area = 0.0;
    let mut count = 0usize;

    for component in components {
        let material = catalog.resolve(&component.material_id);
        total_cost += component.cost(&material);
        total_weight += component.weight_kg(&material);
        if component.is_panel() {
            panel_area += component.surface_area_m2() * component.quantity as f64;
        }
        count += component.quantity as usize;
    }

    ProjectAggregates {
        total_cost: round2(total_cost),
        total_weight_kg: round2(total_weight),
        component_count: count,
        panel_area_m2: round2(panel_area),
        complexity: ComplexityRating::from_score(complexity_score(count, zones)),
    }
}

/// One point per ten pieces and per zone, three per zone with custom
/// drawer boxes, two per horizontal separation.
pub fn complexity_score(component_count: usize, zones: &[Zone]) -> f64 {
    let mut score = component_count as f64 / 10.0 + zones.len() as f64;

    for zone in zones {
        match &zone.content {
            ZoneContent::Drawers(d) if d.drawer_type == DrawerType::Custom => score += 3.0,
            ZoneContent::HorizontalSeparation(s) => {
                score += 2.0;
                let custom_drawers = s.sub_zones().iter().any(|(_, content)| {
                    matches!(content, SubZoneContent::Drawers(d) if d.drawer_type == DrawerType::Custom)
                });
                if custom_drawers {
                    score += 3.0;
                }
            }
            _ => {}
        }
    }

    score
}
