use dressing_core::MaterialId;
use serde::{Deserialize, Serialize};

use super::{
    Component, ComponentKind, ComponentMetadata, ComponentType, EdgeBanding, Orientation,
    PanelFeatures, PanelPart, PartSize, Placement, Property,
};
use crate::thickness::PanelRole;
use crate::zone::ZoneFrame;

/// Horizontal panel splitting a zone into sub-zones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorPart {
    pub panel: PanelFeatures,
    /// 1 for the first separator, 2 for the second
    pub separation_index: u8,
    /// Clear height of the window below the separator
    pub window_below: f64,
    /// Clear height of the window above the separator
    pub window_above: f64,
}

impl SeparatorPart {
    pub fn default_edge_banding() -> EdgeBanding {
        EdgeBanding::front_only()
    }

    /// Separator centred at height `y` across the whole zone width.
    pub fn build(
        frame: &ZoneFrame,
        separation_index: u8,
        y: f64,
        windows: (f64, f64),
        thickness: f64,
        material: &MaterialId,
    ) -> Component {
        let depth = frame.interior_depth();
        let placement = Placement::new(
            frame.centre_x(),
            y,
            frame.back + depth / 2.0,
            Orientation::Horizontal,
        );
        let part = SeparatorPart {
            panel: PanelFeatures::new(placement, Self::default_edge_banding()),
            separation_index,
            window_below: windows.0,
            window_above: windows.1,
        };

        Component::new(
            ComponentType::HorizontalSeparator,
            material.clone(),
            PartSize::new(frame.width, depth, thickness),
            ComponentKind::HorizontalSeparator(part),
            ComponentMetadata::for_frame(frame, usize::from(separation_index.saturating_sub(1))),
        )
    }
}

impl PanelPart for SeparatorPart {
    fn features(&self) -> &PanelFeatures {
        &self.panel
    }

    fn features_mut(&mut self) -> &mut PanelFeatures {
        &mut self.panel
    }

    fn role(&self) -> PanelRole {
        PanelRole::HorizontalDividers
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            Property::number("separation_index", self.separation_index as f64),
            Property::number("window_below", self.window_below),
            Property::number("window_above", self.window_above),
        ];
        props.extend(self.panel.common_properties());
        props
    }
}
