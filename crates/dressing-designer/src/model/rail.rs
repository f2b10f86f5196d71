use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{
    Component, ComponentKind, ComponentMetadata, ComponentType, Orientation, PartSize, Placement,
    Property,
};
use crate::zone::{RailType, ZoneFrame};
use dressing_core::MaterialId;

/// Tube wall used for weight estimates
pub const RAIL_WALL_THICKNESS: f64 = 1.5;

/// kg per (mm² section / m span)
const RAIL_LOAD_FACTOR: f64 = 0.08;

/// Hanging rail. Not a panel: only length and section matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailPart {
    pub rail_type: RailType,
    pub diameter: f64,
    pub placement: Placement,
    pub capacity_kg: f64,
}

impl RailPart {
    /// Rail of `length` spanning `frame`, centred at height `y`.
    pub fn build(
        frame: &ZoneFrame,
        y: f64,
        length: f64,
        rail_type: RailType,
        material: &MaterialId,
    ) -> Component {
        let diameter = rail_type.diameter();
        let placement = Placement::new(
            frame.centre_x(),
            y,
            frame.back + frame.interior_depth() / 2.0,
            Orientation::AxisX,
        );
        let capacity_kg = if length > 0.0 {
            (RAIL_LOAD_FACTOR * diameter * diameter * 1000.0 / length).round()
        } else {
            0.0
        };

        let part = RailPart {
            rail_type,
            diameter,
            placement,
            capacity_kg,
        };

        Component::new(
            ComponentType::WardrobeRail,
            material.clone(),
            PartSize::new(diameter, length, diameter),
            ComponentKind::WardrobeRail(part),
            ComponentMetadata::for_frame(frame, 0),
        )
    }

    pub fn surface_area_m2(&self, length: f64) -> f64 {
        PI * self.diameter * length / 1e6
    }

    pub fn volume_m3(&self, length: f64) -> f64 {
        let inner = (self.diameter - 2.0 * RAIL_WALL_THICKNESS).max(0.0);
        PI / 4.0 * (self.diameter * self.diameter - inner * inner) * length / 1e9
    }

    pub fn properties(&self) -> Vec<Property> {
        vec![
            Property::text("rail_type", format!("{:?}", self.rail_type).to_lowercase()),
            Property::number("diameter", self.diameter),
            Property::number("capacity_kg", self.capacity_kg),
        ]
    }
}
