//! Generated furniture components.
//!
//! Every component shares the base fields of [`Component`]; the
//! type-specific data lives in [`ComponentKind`]. All kinds except the
//! wardrobe rail are flat panels and expose [`PanelFeatures`] through the
//! [`PanelPart`] trait.

use dressing_core::units::round2;
use dressing_core::{MaterialId, ResolvedMaterial};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::thickness::PanelRole;
use crate::zone::{SubZoneName, ZoneFrame};

mod drawer;
mod panel;
mod rail;
mod separator;
mod shelf;

pub use drawer::{DrawerBottomPart, DrawerBoxPart, DrawerFrontPart};
pub use panel::{
    CarcassPanel, Cutout, DrillHole, EdgeBanding, FixationKind, FixationPoint, Orientation,
    PanelFeatures, Placement,
};
pub use rail::{RailPart, RAIL_WALL_THICKNESS};
pub use separator::SeparatorPart;
pub use shelf::{ShelfPart, SHELF_SIDE_CLEARANCE};

/// Load capacity constant, kg per (mm² thickness × mm depth / mm span)
const PANEL_LOAD_FACTOR: f64 = 0.2;

/// Stable identifier derived from the component's position in the layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    /// Id of a carcass part, e.g. `side-1`
    pub fn structural(component_type: ComponentType, local_index: usize) -> Self {
        Self(format!("{}-{}", component_type.as_str(), local_index))
    }

    /// Id of a part generated inside a zone, e.g. `shelf-z0-2` or
    /// `drawer_front-z1-lower-0`
    pub fn in_zone(
        component_type: ComponentType,
        zone_index: usize,
        sub_zone: Option<SubZoneName>,
        local_index: usize,
    ) -> Self {
        match sub_zone {
            Some(sub) => Self(format!(
                "{}-z{}-{}-{}",
                component_type.as_str(),
                zone_index,
                sub,
                local_index
            )),
            None => Self(format!(
                "{}-z{}-{}",
                component_type.as_str(),
                zone_index,
                local_index
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Side,
    Top,
    Bottom,
    Back,
    VerticalDivider,
    Shelf,
    DrawerFront,
    DrawerSide,
    DrawerBack,
    DrawerBottom,
    HorizontalSeparator,
    WardrobeRail,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Side => "side",
            ComponentType::Top => "top",
            ComponentType::Bottom => "bottom",
            ComponentType::Back => "back",
            ComponentType::VerticalDivider => "vertical_divider",
            ComponentType::Shelf => "shelf",
            ComponentType::DrawerFront => "drawer_front",
            ComponentType::DrawerSide => "drawer_side",
            ComponentType::DrawerBack => "drawer_back",
            ComponentType::DrawerBottom => "drawer_bottom",
            ComponentType::HorizontalSeparator => "horizontal_separator",
            ComponentType::WardrobeRail => "wardrobe_rail",
        }
    }

    /// Label used in component names and bills of materials
    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Side => "Side panel",
            ComponentType::Top => "Top panel",
            ComponentType::Bottom => "Bottom panel",
            ComponentType::Back => "Back panel",
            ComponentType::VerticalDivider => "Vertical divider",
            ComponentType::Shelf => "Shelf",
            ComponentType::DrawerFront => "Drawer front",
            ComponentType::DrawerSide => "Drawer side",
            ComponentType::DrawerBack => "Drawer back",
            ComponentType::DrawerBottom => "Drawer bottom",
            ComponentType::HorizontalSeparator => "Horizontal separator",
            ComponentType::WardrobeRail => "Wardrobe rail",
        }
    }

    /// Carcass parts follow the project material
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ComponentType::Side
                | ComponentType::Top
                | ComponentType::Bottom
                | ComponentType::Back
                | ComponentType::VerticalDivider
        )
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentMetadata {
    pub zone_index: Option<usize>,
    pub sub_zone: Option<SubZoneName>,
    pub local_index: usize,
    pub structural: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ComponentMetadata {
    /// Metadata of a part generated in `frame`. Sub-zone parts are tagged
    /// with the sub-zone name.
    pub fn for_frame(frame: &ZoneFrame, local_index: usize) -> Self {
        Self {
            zone_index: Some(frame.zone_index),
            sub_zone: frame.sub_zone,
            local_index,
            structural: false,
            tags: frame
                .sub_zone
                .map(|sub| vec![sub.to_string()])
                .unwrap_or_default(),
        }
    }

    /// Metadata of a carcass part
    pub fn structural(local_index: usize) -> Self {
        Self {
            zone_index: None,
            sub_zone: None,
            local_index,
            structural: true,
            tags: Vec::new(),
        }
    }
}

/// Display property for inspectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn number(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::Number(value),
        }
    }

    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::String(value.into()),
        }
    }

    pub fn flag(name: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::Bool(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    String(String),
    Bool(bool),
}

/// Behaviour shared by every flat panel part
pub trait PanelPart {
    fn features(&self) -> &PanelFeatures;
    fn features_mut(&mut self) -> &mut PanelFeatures;
    /// Thickness role the panel is cut from
    fn role(&self) -> PanelRole;
    /// Type-specific properties for inspectors
    fn properties(&self) -> Vec<Property>;
}

/// Type-specific component data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentKind {
    Panel(CarcassPanel),
    Shelf(ShelfPart),
    DrawerFront(DrawerFrontPart),
    DrawerSide(DrawerBoxPart),
    DrawerBack(DrawerBoxPart),
    DrawerBottom(DrawerBottomPart),
    HorizontalSeparator(SeparatorPart),
    WardrobeRail(RailPart),
}

impl ComponentKind {
    pub fn as_panel(&self) -> Option<&dyn PanelPart> {
        match self {
            ComponentKind::Panel(p) => Some(p),
            ComponentKind::Shelf(p) => Some(p),
            ComponentKind::DrawerFront(p) => Some(p),
            ComponentKind::DrawerSide(p) => Some(p),
            ComponentKind::DrawerBack(p) => Some(p),
            ComponentKind::DrawerBottom(p) => Some(p),
            ComponentKind::HorizontalSeparator(p) => Some(p),
            ComponentKind::WardrobeRail(_) => None,
        }
    }

    pub fn as_panel_mut(&mut self) -> Option<&mut dyn PanelPart> {
        match self {
            ComponentKind::Panel(p) => Some(p),
            ComponentKind::Shelf(p) => Some(p),
            ComponentKind::DrawerFront(p) => Some(p),
            ComponentKind::DrawerSide(p) => Some(p),
            ComponentKind::DrawerBack(p) => Some(p),
            ComponentKind::DrawerBottom(p) => Some(p),
            ComponentKind::HorizontalSeparator(p) => Some(p),
            ComponentKind::WardrobeRail(_) => None,
        }
    }
}

/// Cut dimensions of a part. For panels `width` runs along the front
/// edge and `length` across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSize {
    pub width: f64,
    pub length: f64,
    pub thickness: f64,
}

impl PartSize {
    pub fn new(width: f64, length: f64, thickness: f64) -> Self {
        Self {
            width,
            length,
            thickness,
        }
    }
}

/// A generated physical part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub component_type: ComponentType,
    pub material_id: MaterialId,
    pub width: f64,
    pub length: f64,
    pub thickness: f64,
    pub quantity: u32,
    pub kind: ComponentKind,
    pub metadata: ComponentMetadata,
}

impl Component {
    pub fn new(
        component_type: ComponentType,
        material_id: MaterialId,
        size: PartSize,
        kind: ComponentKind,
        metadata: ComponentMetadata,
    ) -> Self {
        let id = match metadata.zone_index {
            Some(zone) => ComponentId::in_zone(
                component_type,
                zone,
                metadata.sub_zone,
                metadata.local_index,
            ),
            None => ComponentId::structural(component_type, metadata.local_index),
        };
        let name = match (metadata.zone_index, metadata.sub_zone) {
            (Some(zone), Some(sub)) => format!(
                "{} {} (zone {}, {})",
                component_type.label(),
                metadata.local_index + 1,
                zone + 1,
                sub
            ),
            (Some(zone), None) => format!(
                "{} {} (zone {})",
                component_type.label(),
                metadata.local_index + 1,
                zone + 1
            ),
            (None, _) => format!("{} {}", component_type.label(), metadata.local_index + 1),
        };

        Self {
            id,
            name,
            component_type,
            material_id,
            width: round2(size.width.max(0.0)),
            length: round2(size.length.max(0.0)),
            thickness: round2(size.thickness.max(0.0)),
            quantity: 1,
            kind,
            metadata,
        }
    }

    pub fn panel(&self) -> Option<&PanelFeatures> {
        self.kind.as_panel().map(|p| p.features())
    }

    pub fn panel_mut(&mut self) -> Option<&mut PanelFeatures> {
        self.kind.as_panel_mut().map(|p| p.features_mut())
    }

    /// Thickness role, `None` for rails
    pub fn role(&self) -> Option<PanelRole> {
        self.kind.as_panel().map(|p| p.role())
    }

    pub fn placement(&self) -> Placement {
        match &self.kind {
            ComponentKind::WardrobeRail(rail) => rail.placement,
            kind => kind
                .as_panel()
                .map(|p| p.features().placement)
                .unwrap_or_default(),
        }
    }

    pub fn is_structural(&self) -> bool {
        self.metadata.structural
    }

    pub fn is_panel(&self) -> bool {
        self.kind.as_panel().is_some()
    }

    /// Face area before cutouts, m²
    pub fn gross_area_m2(&self) -> f64 {
        self.width * self.length / 1e6
    }

    /// Face area net of cutouts, m². Rails report their outer surface.
    pub fn surface_area_m2(&self) -> f64 {
        match &self.kind {
            ComponentKind::WardrobeRail(rail) => rail.surface_area_m2(self.length),
            _ => {
                let cutouts = self.panel().map(|p| p.cutout_area_mm2()).unwrap_or(0.0);
                ((self.width * self.length - cutouts) / 1e6).max(0.0)
            }
        }
    }

    /// Material volume of one piece, m³
    pub fn volume_m3(&self) -> f64 {
        match &self.kind {
            ComponentKind::WardrobeRail(rail) => rail.volume_m3(self.length),
            _ => self.surface_area_m2() * self.thickness / 1000.0,
        }
    }

    /// Weight of all pieces, kg
    pub fn weight_kg(&self, material: &ResolvedMaterial) -> f64 {
        self.volume_m3() * material.density * self.quantity as f64
    }

    /// Material cost of all pieces. Rails are priced per linear metre when
    /// the material has a linear price.
    pub fn cost(&self, material: &ResolvedMaterial) -> f64 {
        let unit = match (&self.kind, material.price_per_linear_m) {
            (ComponentKind::WardrobeRail(_), Some(per_metre)) => self.length / 1000.0 * per_metre,
            _ => self.surface_area_m2() * material.price_per_m2,
        };
        unit * self.quantity as f64
    }

    /// Advisory load estimate in kg for load bearing parts
    pub fn load_capacity_kg(&self) -> Option<f64> {
        match &self.kind {
            ComponentKind::Shelf(s) => Some(s.load_capacity_kg),
            ComponentKind::DrawerBottom(b) => Some(b.load_capacity_kg),
            ComponentKind::WardrobeRail(r) => Some(r.capacity_kg),
            _ => None,
        }
    }

    /// Base and type-specific properties for inspectors
    pub fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            Property::text("id", self.id.as_str()),
            Property::text("type", self.component_type.as_str()),
            Property::text("material", self.material_id.as_str()),
            Property::number("width", self.width),
            Property::number("length", self.length),
            Property::number("thickness", self.thickness),
        ];
        match &self.kind {
            ComponentKind::WardrobeRail(rail) => props.extend(rail.properties()),
            kind => {
                if let Some(panel) = kind.as_panel() {
                    props.extend(panel.properties());
                }
            }
        }
        props
    }
}

/// Advisory panel load capacity, proportional to thickness² / span
pub fn estimate_load_capacity(thickness: f64, span: f64, depth: f64) -> f64 {
    if span <= 0.0 || thickness <= 0.0 || depth <= 0.0 {
        return 0.0;
    }
    (PANEL_LOAD_FACTOR * thickness * thickness * depth / span * 10.0).round() / 10.0
}
