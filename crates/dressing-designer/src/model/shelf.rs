use dressing_core::MaterialId;
use serde::{Deserialize, Serialize};

use super::{
    estimate_load_capacity, Component, ComponentKind, ComponentMetadata, ComponentType,
    EdgeBanding, Orientation, PanelFeatures, PanelPart, PartSize, Placement, Property,
};
use crate::thickness::PanelRole;
use crate::zone::ZoneFrame;

/// Gap left on each side of a shelf
pub const SHELF_SIDE_CLEARANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfPart {
    pub panel: PanelFeatures,
    pub retraction: f64,
    pub adjustable: bool,
    pub load_capacity_kg: f64,
}

impl ShelfPart {
    pub fn default_edge_banding() -> EdgeBanding {
        EdgeBanding::front_and_left()
    }

    /// Shelf `local_index` of `frame`, centred at height `y`.
    pub fn build(
        frame: &ZoneFrame,
        local_index: usize,
        y: f64,
        retraction: f64,
        adjustable: bool,
        thickness: f64,
        material: &MaterialId,
    ) -> Component {
        let width = frame.width - 2.0 * SHELF_SIDE_CLEARANCE;
        let depth = frame.interior_depth() - retraction;
        let placement = Placement::new(
            frame.centre_x(),
            y,
            frame.back + depth / 2.0,
            Orientation::Horizontal,
        );

        let part = ShelfPart {
            panel: PanelFeatures::new(placement, Self::default_edge_banding()),
            retraction,
            adjustable,
            load_capacity_kg: estimate_load_capacity(thickness, width, depth),
        };

        Component::new(
            ComponentType::Shelf,
            material.clone(),
            PartSize::new(width, depth, thickness),
            ComponentKind::Shelf(part),
            ComponentMetadata::for_frame(frame, local_index),
        )
    }
}

impl PanelPart for ShelfPart {
    fn features(&self) -> &PanelFeatures {
        &self.panel
    }

    fn features_mut(&mut self) -> &mut PanelFeatures {
        &mut self.panel
    }

    fn role(&self) -> PanelRole {
        PanelRole::Shelves
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            Property::number("retraction", self.retraction),
            Property::flag("adjustable", self.adjustable),
            Property::number("load_capacity_kg", self.load_capacity_kg),
        ];
        props.extend(self.panel.common_properties());
        props
    }
}
