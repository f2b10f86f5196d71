//! Bill of materials.

use anyhow::{Context, Result};
use dressing_core::MaterialId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::model::{Component, ComponentType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub component_type: ComponentType,
    pub name: String,
    pub material_id: MaterialId,
    pub width: f64,
    pub length: f64,
    pub thickness: f64,
    pub quantity: u32,
}

impl From<&Component> for BomLine {
    fn from(component: &Component) -> Self {
        Self {
            component_type: component.component_type,
            name: component.name.clone(),
            material_id: component.material_id.clone(),
            width: component.width,
            length: component.length,
            thickness: component.thickness,
            quantity: component.quantity,
        }
    }
}

/// One line per component, in generation order.
pub fn bill_of_materials(components: &[Component]) -> Vec<BomLine> {
    components.iter().map(BomLine::from).collect()
}

/// Merges parts of the same type, material and size into one line.
///
/// Lengths are compared at 0.01mm, the model's storage precision.
pub fn aggregate_bill_of_materials(components: &[Component]) -> Vec<BomLine> {
    let mut merged: BTreeMap<(ComponentType, String, i64, i64, i64), BomLine> = BTreeMap::new();

    for component in components {
        let key = (
            component.component_type,
            component.material_id.to_string(),
            hundredths(component.width),
            hundredths(component.length),
            hundredths(component.thickness),
        );
        merged
            .entry(key)
            .and_modify(|line| line.quantity += component.quantity)
            .or_insert_with(|| BomLine {
                name: component.component_type.label().to_string(),
                ..BomLine::from(component)
            });
    }

    merged.into_values().collect()
}

fn hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

pub fn bom_to_json(lines: &[BomLine]) -> Result<String> {
    serde_json::to_string_pretty(lines).context("Failed to serialize bill of materials")
}

/// Plain text table, lengths in millimetres.
pub fn format_bom_table(lines: &[BomLine]) -> String {
    let name_width = lines
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(0)
        .max("Part".len());
    let material_width = lines
        .iter()
        .map(|l| l.material_id.as_str().len())
        .max()
        .unwrap_or(0)
        .max("Material".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<nw$}  {:<mw$}  {:>9}  {:>9}  {:>7}  {:>4}",
        "Part",
        "Material",
        "Width",
        "Length",
        "Thick",
        "Qty",
        nw = name_width,
        mw = material_width
    );
    for line in lines {
        let _ = writeln!(
            out,
            "{:<nw$}  {:<mw$}  {:>9.1}  {:>9.1}  {:>7.1}  {:>4}",
            line.name,
            line.material_id.as_str(),
            line.width,
            line.length,
            line.thickness,
            line.quantity,
            nw = name_width,
            mw = material_width
        );
    }
    out
}
