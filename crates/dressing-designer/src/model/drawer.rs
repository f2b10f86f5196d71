use dressing_core::MaterialId;
use serde::{Deserialize, Serialize};

use super::{
    estimate_load_capacity, Component, ComponentId, ComponentKind, ComponentMetadata,
    ComponentType, Cutout, DrillHole, EdgeBanding, FixationKind, Orientation, PanelFeatures,
    PanelPart, PartSize, Placement, Property,
};
use crate::thickness::PanelRole;
use crate::zone::{HandlePosition, HandleType, ZoneFrame};

/// Centre distance of the two screw holes of a bar handle
const BAR_HANDLE_SPACING: f64 = 128.0;
const HANDLE_HOLE_DIAMETER: f64 = 5.0;
/// Handle axis distance from the top edge when mounted at the top
const HANDLE_TOP_OFFSET: f64 = 40.0;
const GRIP_CUTOUT_WIDTH: f64 = 120.0;
const GRIP_CUTOUT_HEIGHT: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerFrontPart {
    pub panel: PanelFeatures,
    pub drawer_index: usize,
    pub handle_type: HandleType,
    pub handle_position: HandlePosition,
}

impl DrawerFrontPart {
    pub fn default_edge_banding() -> EdgeBanding {
        EdgeBanding::all()
    }

    /// Front of drawer `drawer_index`, its lower edge at `bottom`.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        frame: &ZoneFrame,
        drawer_index: usize,
        bottom: f64,
        width: f64,
        face_height: f64,
        thickness: f64,
        handle: (HandleType, HandlePosition),
        material: &MaterialId,
    ) -> Component {
        let (handle_type, handle_position) = handle;
        let placement = Placement::new(
            frame.centre_x(),
            bottom + face_height / 2.0,
            frame.depth - thickness / 2.0,
            Orientation::Frontal,
        );

        let mut part = DrawerFrontPart {
            panel: PanelFeatures::new(placement, Self::default_edge_banding()),
            drawer_index,
            handle_type,
            handle_position,
        };
        part.add_handle(width, face_height, thickness);

        Component::new(
            ComponentType::DrawerFront,
            material.clone(),
            PartSize::new(width, face_height, thickness),
            ComponentKind::DrawerFront(part),
            ComponentMetadata::for_frame(frame, drawer_index),
        )
    }

    fn add_handle(&mut self, width: f64, face_height: f64, thickness: f64) {
        let axis_y = match self.handle_position {
            HandlePosition::Top if face_height > 2.0 * HANDLE_TOP_OFFSET => {
                face_height - HANDLE_TOP_OFFSET
            }
            _ => face_height / 2.0,
        };
        let centre_x = width / 2.0;
        let hole = |x: f64| DrillHole {
            x,
            y: axis_y,
            diameter: HANDLE_HOLE_DIAMETER,
            depth: thickness,
            purpose: "handle".to_string(),
        };

        match self.handle_type {
            HandleType::Bar => {
                self.panel.add_drill_hole(hole(centre_x - BAR_HANDLE_SPACING / 2.0));
                self.panel.add_drill_hole(hole(centre_x + BAR_HANDLE_SPACING / 2.0));
            }
            HandleType::Knob => self.panel.add_drill_hole(hole(centre_x)),
            HandleType::Integrated => self.panel.add_cutout(Cutout::Rectangular {
                x: centre_x - GRIP_CUTOUT_WIDTH / 2.0,
                y: face_height - GRIP_CUTOUT_HEIGHT,
                width: GRIP_CUTOUT_WIDTH.min(width),
                height: GRIP_CUTOUT_HEIGHT.min(face_height),
            }),
            HandleType::None | HandleType::PushToOpen => {}
        }
    }
}

impl PanelPart for DrawerFrontPart {
    fn features(&self) -> &PanelFeatures {
        &self.panel
    }

    fn features_mut(&mut self) -> &mut PanelFeatures {
        &mut self.panel
    }

    fn role(&self) -> PanelRole {
        PanelRole::DrawerFront
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            Property::number("drawer_index", self.drawer_index as f64),
            Property::text("handle_type", format!("{:?}", self.handle_type)),
            Property::text("handle_position", format!("{:?}", self.handle_position)),
        ];
        props.extend(self.panel.common_properties());
        props
    }
}

/// Drawer box side or back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerBoxPart {
    pub panel: PanelFeatures,
    pub drawer_index: usize,
    pub role: PanelRole,
}

impl DrawerBoxPart {
    /// Only the top edge is banded; it is the `front` edge of the part
    pub fn default_edge_banding() -> EdgeBanding {
        EdgeBanding::front_only()
    }

    /// Side `side` (0 left, 1 right) of drawer `drawer_index`
    pub fn build_side(
        frame: &ZoneFrame,
        drawer_index: usize,
        side: usize,
        size: PartSize,
        placement: Placement,
        material: &MaterialId,
    ) -> Component {
        let mut part = DrawerBoxPart {
            panel: PanelFeatures::new(placement, Self::default_edge_banding()),
            drawer_index,
            role: PanelRole::DrawerSide,
        };
        let front = ComponentId::in_zone(
            ComponentType::DrawerFront,
            frame.zone_index,
            frame.sub_zone,
            drawer_index,
        );
        part.panel
            .add_fixation(front, FixationKind::Screw, size.width, size.length / 2.0);

        Component::new(
            ComponentType::DrawerSide,
            material.clone(),
            size,
            ComponentKind::DrawerSide(part),
            ComponentMetadata::for_frame(frame, drawer_index * 2 + side),
        )
    }

    /// Back of drawer `drawer_index`, joined to both sides
    pub fn build_back(
        frame: &ZoneFrame,
        drawer_index: usize,
        size: PartSize,
        placement: Placement,
        material: &MaterialId,
    ) -> Component {
        let mut part = DrawerBoxPart {
            panel: PanelFeatures::new(placement, Self::default_edge_banding()),
            drawer_index,
            role: PanelRole::DrawerBack,
        };
        for (side, x) in [(0, 0.0), (1, size.width)] {
            let target = ComponentId::in_zone(
                ComponentType::DrawerSide,
                frame.zone_index,
                frame.sub_zone,
                drawer_index * 2 + side,
            );
            part.panel
                .add_fixation(target, FixationKind::Dowel, x, size.length / 2.0);
        }

        Component::new(
            ComponentType::DrawerBack,
            material.clone(),
            size,
            ComponentKind::DrawerBack(part),
            ComponentMetadata::for_frame(frame, drawer_index),
        )
    }
}

impl PanelPart for DrawerBoxPart {
    fn features(&self) -> &PanelFeatures {
        &self.panel
    }

    fn features_mut(&mut self) -> &mut PanelFeatures {
        &mut self.panel
    }

    fn role(&self) -> PanelRole {
        self.role
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = vec![Property::number("drawer_index", self.drawer_index as f64)];
        props.extend(self.panel.common_properties());
        props
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerBottomPart {
    pub panel: PanelFeatures,
    pub drawer_index: usize,
    pub load_capacity_kg: f64,
}

impl DrawerBottomPart {
    /// Same as the box sides: the top face edge at the drawer front
    pub fn default_edge_banding() -> EdgeBanding {
        EdgeBanding::front_only()
    }

    pub fn build(
        frame: &ZoneFrame,
        drawer_index: usize,
        size: PartSize,
        placement: Placement,
        material: &MaterialId,
    ) -> Component {
        let part = DrawerBottomPart {
            panel: PanelFeatures::new(placement, Self::default_edge_banding()),
            drawer_index,
            load_capacity_kg: estimate_load_capacity(size.thickness, size.width, size.length),
        };

        Component::new(
            ComponentType::DrawerBottom,
            material.clone(),
            size,
            ComponentKind::DrawerBottom(part),
            ComponentMetadata::for_frame(frame, drawer_index),
        )
    }
}

impl PanelPart for DrawerBottomPart {
    fn features(&self) -> &PanelFeatures {
        &self.panel
    }

    fn features_mut(&mut self) -> &mut PanelFeatures {
        &mut self.panel
    }

    fn role(&self) -> PanelRole {
        PanelRole::DrawerBottom
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            Property::number("drawer_index", self.drawer_index as f64),
            Property::number("load_capacity_kg", self.load_capacity_kg),
        ];
        props.extend(self.panel.common_properties());
        props
    }
}
