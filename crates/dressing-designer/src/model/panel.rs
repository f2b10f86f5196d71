use serde::{Deserialize, Serialize};

use super::{ComponentId, PanelPart, Property};
use crate::thickness::PanelRole;

/// Plane a panel lies in once assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// XZ plane: tops, bottoms, shelves, separators, drawer bottoms
    #[default]
    Horizontal,
    /// YZ plane: sides, dividers, drawer sides
    Lateral,
    /// XY plane: backs, drawer fronts and backs
    Frontal,
    /// Long axis along X (rails)
    AxisX,
}

/// Centre of a part in cabinet coordinates (mm).
///
/// x from the left outer face, y from the floor, z from the rear outer face.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(x: f64, y: f64, z: f64, orientation: Orientation) -> Self {
        Self {
            x,
            y,
            z,
            orientation,
        }
    }
}

/// Edge banding flags. Front and back edges run along the panel width,
/// left and right edges along its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeBanding {
    pub front: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeBanding {
    pub const fn none() -> Self {
        Self {
            front: false,
            back: false,
            left: false,
            right: false,
        }
    }

    pub const fn front_only() -> Self {
        Self {
            front: true,
            back: false,
            left: false,
            right: false,
        }
    }

    pub const fn front_and_left() -> Self {
        Self {
            front: true,
            back: false,
            left: true,
            right: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            front: true,
            back: true,
            left: true,
            right: true,
        }
    }

    pub fn count(&self) -> usize {
        [self.front, self.back, self.left, self.right]
            .iter()
            .filter(|b| **b)
            .count()
    }

    /// Banded edge length in mm for a panel of the given face size
    pub fn banded_length(&self, width: f64, length: f64) -> f64 {
        let along_width = (self.front as u8 + self.back as u8) as f64;
        let along_length = (self.left as u8 + self.right as u8) as f64;
        along_width * width + along_length * length
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillHole {
    /// Position on the panel face, from its front-left corner
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub depth: f64,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Cutout {
    Rectangular {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circular {
        x: f64,
        y: f64,
        diameter: f64,
    },
    Polygon {
        points: Vec<(f64, f64)>,
    },
    /// Free-form cutout described elsewhere; only its area is known
    Custom { description: String, area: f64 },
}

impl Cutout {
    /// Removed area in mm²
    pub fn area(&self) -> f64 {
        match self {
            Cutout::Rectangular { width, height, .. } => (width * height).max(0.0),
            Cutout::Circular { diameter, .. } => std::f64::consts::PI * diameter * diameter / 4.0,
            Cutout::Polygon { points } => {
                if points.len() < 3 {
                    return 0.0;
                }
                // shoelace
                let twice: f64 = points
                    .iter()
                    .zip(points.iter().cycle().skip(1))
                    .map(|(a, b)| a.0 * b.1 - b.0 * a.1)
                    .sum();
                twice.abs() / 2.0
            }
            Cutout::Custom { area, .. } => area.max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixationKind {
    Cam,
    Dowel,
    Screw,
    Nail,
    Slide,
}

/// Joint with another component. Descriptive only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixationPoint {
    pub target: ComponentId,
    pub kind: FixationKind,
    pub x: f64,
    pub y: f64,
}

/// Features common to every flat panel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelFeatures {
    pub edge_banding: EdgeBanding,
    pub cut_angle: Option<f64>,
    pub corner_radius: Option<f64>,
    pub placement: Placement,
    #[serde(default)]
    pub drill_holes: Vec<DrillHole>,
    #[serde(default)]
    pub cutouts: Vec<Cutout>,
    #[serde(default)]
    pub fixations: Vec<FixationPoint>,
}

impl PanelFeatures {
    pub fn new(placement: Placement, edge_banding: EdgeBanding) -> Self {
        Self {
            edge_banding,
            placement,
            ..Default::default()
        }
    }

    pub fn add_drill_hole(&mut self, hole: DrillHole) {
        self.drill_holes.push(hole);
    }

    pub fn add_cutout(&mut self, cutout: Cutout) {
        self.cutouts.push(cutout);
    }

    pub fn add_fixation(&mut self, target: ComponentId, kind: FixationKind, x: f64, y: f64) {
        self.fixations.push(FixationPoint { target, kind, x, y });
    }

    pub fn cutout_area_mm2(&self) -> f64 {
        self.cutouts.iter().map(Cutout::area).sum()
    }

    pub(crate) fn common_properties(&self) -> Vec<Property> {
        vec![
            Property::number("edge_banding", self.edge_banding.count() as f64),
            Property::number("drill_holes", self.drill_holes.len() as f64),
            Property::number("cutouts", self.cutouts.len() as f64),
        ]
    }
}

/// Carcass panel: side, top, bottom, back or vertical divider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarcassPanel {
    pub role: PanelRole,
    pub panel: PanelFeatures,
}

impl CarcassPanel {
    pub fn new(role: PanelRole, placement: Placement) -> Self {
        let banding = if role == PanelRole::Back {
            EdgeBanding::none()
        } else {
            Self::default_edge_banding()
        };
        Self {
            role,
            panel: PanelFeatures::new(placement, banding),
        }
    }

    pub fn default_edge_banding() -> EdgeBanding {
        EdgeBanding::front_only()
    }
}

impl PanelPart for CarcassPanel {
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
        let mut props = vec![Property::text("role", self.role.as_str())];
        props.extend(self.panel.common_properties());
        props
    }
}
