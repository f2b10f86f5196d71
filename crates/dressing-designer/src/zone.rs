//! Zones, their content settings and the geometric frame they are
//! generated in.

use dressing_core::MaterialId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dimensions::Dimensions;
use crate::error::{Rejection, RejectionCode};
use crate::thickness::ThicknessProfile;

pub const MAX_SHELVES_PER_ZONE: u32 = 50;
pub const MAX_DRAWERS_PER_ZONE: u32 = 20;

/// Discriminant of [`ZoneContent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Empty,
    Shelves,
    Drawers,
    Wardrobe,
    HorizontalSeparation,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Empty => "empty",
            ContentType::Shelves => "shelves",
            ContentType::Drawers => "drawers",
            ContentType::Wardrobe => "wardrobe",
            ContentType::HorizontalSeparation => "horizontal_separation",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfSpacing {
    #[default]
    Even,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfSettings {
    pub shelf_count: u32,
    pub spacing: ShelfSpacing,
    /// Shelf centre heights measured from the zone floor. Used only when
    /// `spacing` is `Custom` and there is one entry per shelf.
    pub custom_positions: Vec<f64>,
    /// Setback from the cabinet front
    pub retraction: f64,
    pub adjustable: bool,
}

impl Default for ShelfSettings {
    fn default() -> Self {
        Self {
            shelf_count: 3,
            spacing: ShelfSpacing::Even,
            custom_positions: Vec::new(),
            retraction: 20.0,
            adjustable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawerType {
    /// Fronts only, boxes bought in
    #[default]
    Standard,
    /// Fronts only, supplier slide-and-box system
    Supplier,
    /// Fronts plus a cut drawer box
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleType {
    None,
    #[default]
    Bar,
    Knob,
    Integrated,
    PushToOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlePosition {
    #[default]
    Top,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerSettings {
    pub drawer_count: u32,
    pub face_height: f64,
    /// Vertical gap between two fronts
    pub operational_gap: f64,
    pub drawer_type: DrawerType,
    pub handle_type: HandleType,
    pub handle_position: HandlePosition,
    /// Box depth for custom drawers; derived from the cabinet depth when unset
    pub box_depth: Option<f64>,
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            drawer_count: 3,
            face_height: 150.0,
            operational_gap: 3.0,
            drawer_type: DrawerType::Standard,
            handle_type: HandleType::Bar,
            handle_position: HandlePosition::Top,
            box_depth: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RailType {
    #[default]
    Round,
    Oval,
    Flat,
}

impl RailType {
    /// Rail section in millimetres
    pub fn diameter(&self) -> f64 {
        match self {
            RailType::Round => 25.0,
            RailType::Oval => 30.0,
            RailType::Flat => 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardrobeSettings {
    /// Distance from the underside of the ceiling panel to the rail centre
    pub rail_height: f64,
    pub rail_type: RailType,
}

impl Default for WardrobeSettings {
    fn default() -> Self {
        Self {
            rail_height: 50.0,
            rail_type: RailType::Round,
        }
    }
}

/// Content allowed inside a sub-zone of a horizontal separation.
///
/// Separations do not nest, so there is no separation variant here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "content_type", content = "settings", rename_all = "snake_case")]
pub enum SubZoneContent {
    #[default]
    Empty,
    Shelves(ShelfSettings),
    Drawers(DrawerSettings),
    Wardrobe(WardrobeSettings),
}

impl SubZoneContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            SubZoneContent::Empty => ContentType::Empty,
            SubZoneContent::Shelves(_) => ContentType::Shelves,
            SubZoneContent::Drawers(_) => ContentType::Drawers,
            SubZoneContent::Wardrobe(_) => ContentType::Wardrobe,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SubZoneContent::Empty)
    }
}

impl From<SubZoneContent> for ZoneContent {
    fn from(content: SubZoneContent) -> Self {
        match content {
            SubZoneContent::Empty => ZoneContent::Empty,
            SubZoneContent::Shelves(s) => ZoneContent::Shelves(s),
            SubZoneContent::Drawers(s) => ZoneContent::Drawers(s),
            SubZoneContent::Wardrobe(s) => ZoneContent::Wardrobe(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubZoneName {
    Lower,
    Middle,
    Upper,
}

impl SubZoneName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubZoneName::Lower => "lower",
            SubZoneName::Middle => "middle",
            SubZoneName::Upper => "upper",
        }
    }
}

impl fmt::Display for SubZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparationSettings {
    /// Height of the first separator centre above the zone floor
    pub separation_height: f64,
    pub second_separation_enabled: bool,
    /// Height of the second separator centre above the zone floor
    pub second_separation_height: f64,
    pub lower: SubZoneContent,
    /// Ignored unless the second separator is enabled
    pub middle: SubZoneContent,
    pub upper: SubZoneContent,
}

impl Default for SeparationSettings {
    fn default() -> Self {
        Self {
            separation_height: 1000.0,
            second_separation_enabled: false,
            second_separation_height: 1600.0,
            lower: SubZoneContent::Empty,
            middle: SubZoneContent::Empty,
            upper: SubZoneContent::Empty,
        }
    }
}

impl SeparationSettings {
    /// Active sub-zones, bottom to top
    pub fn sub_zones(&self) -> Vec<(SubZoneName, &SubZoneContent)> {
        let mut zones = vec![(SubZoneName::Lower, &self.lower)];
        if self.second_separation_enabled {
            zones.push((SubZoneName::Middle, &self.middle));
        }
        zones.push((SubZoneName::Upper, &self.upper));
        zones
    }

    pub fn sub_zone(&self, name: SubZoneName) -> Option<&SubZoneContent> {
        match name {
            SubZoneName::Lower => Some(&self.lower),
            SubZoneName::Middle if self.second_separation_enabled => Some(&self.middle),
            SubZoneName::Middle => None,
            SubZoneName::Upper => Some(&self.upper),
        }
    }

    pub fn sub_zone_mut(&mut self, name: SubZoneName) -> Option<&mut SubZoneContent> {
        match name {
            SubZoneName::Lower => Some(&mut self.lower),
            SubZoneName::Middle if self.second_separation_enabled => Some(&mut self.middle),
            SubZoneName::Middle => None,
            SubZoneName::Upper => Some(&mut self.upper),
        }
    }

    /// True when the second separator is enabled but does not clear the
    /// first by at least one `separator_thickness`. Such a pair leaves no
    /// room for the middle sub-zone, so the generator drops the second
    /// separator.
    pub fn separators_overlap(&self, separator_thickness: f64) -> bool {
        self.second_separation_enabled
            && self.second_separation_height < self.separation_height + separator_thickness
    }
}

/// What a zone contains
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "content_type", content = "settings", rename_all = "snake_case")]
pub enum ZoneContent {
    #[default]
    Empty,
    Shelves(ShelfSettings),
    Drawers(DrawerSettings),
    Wardrobe(WardrobeSettings),
    HorizontalSeparation(SeparationSettings),
}

impl ZoneContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            ZoneContent::Empty => ContentType::Empty,
            ZoneContent::Shelves(_) => ContentType::Shelves,
            ZoneContent::Drawers(_) => ContentType::Drawers,
            ZoneContent::Wardrobe(_) => ContentType::Wardrobe,
            ZoneContent::HorizontalSeparation(_) => ContentType::HorizontalSeparation,
        }
    }

    /// Default settings for a content type
    pub fn with_defaults(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Empty => ZoneContent::Empty,
            ContentType::Shelves => ZoneContent::Shelves(ShelfSettings::default()),
            ContentType::Drawers => ZoneContent::Drawers(DrawerSettings::default()),
            ContentType::Wardrobe => ZoneContent::Wardrobe(WardrobeSettings::default()),
            ContentType::HorizontalSeparation => {
                ZoneContent::HorizontalSeparation(SeparationSettings::default())
            }
        }
    }

    /// Checks settings before they are accepted into a zone of
    /// `zone_height` built with `profile`.
    pub fn validate(&self, zone_height: f64, profile: &ThicknessProfile) -> Result<(), Rejection> {
        match self {
            ZoneContent::Empty => Ok(()),
            ZoneContent::Shelves(s) => validate_shelves(s),
            ZoneContent::Drawers(s) => validate_drawers(s),
            ZoneContent::Wardrobe(s) => validate_wardrobe(s),
            ZoneContent::HorizontalSeparation(s) => {
                if !s.separation_height.is_finite() || !s.second_separation_height.is_finite() {
                    return Err(invalid_separation("separation heights must be finite"));
                }
                if s.separation_height <= 0.0 || s.separation_height >= zone_height {
                    return Err(invalid_separation(format!(
                        "separation height {}mm must lie inside the {}mm zone",
                        s.separation_height, zone_height
                    )));
                }
                if s.second_separation_enabled {
                    let t = profile.horizontal_dividers;
                    if s.separators_overlap(t) {
                        return Err(invalid_separation(format!(
                            "second separator ({}mm) must be at least {}mm above the first ({}mm)",
                            s.second_separation_height, t, s.separation_height
                        )));
                    }
                    if s.second_separation_height >= zone_height {
                        return Err(invalid_separation(format!(
                            "second separation height {}mm must lie inside the {}mm zone",
                            s.second_separation_height, zone_height
                        )));
                    }
                }
                for (_, sub) in s.sub_zones() {
                    ZoneContent::from(sub.clone()).validate(zone_height, profile)?;
                }
                Ok(())
            }
        }
    }
}

fn invalid_settings(message: impl Into<String>) -> Rejection {
    Rejection::new(RejectionCode::InvalidSettings, message)
}

fn invalid_separation(message: impl Into<String>) -> Rejection {
    Rejection::new(RejectionCode::InvalidSeparation, message)
}

fn validate_shelves(s: &ShelfSettings) -> Result<(), Rejection> {
    if s.shelf_count > MAX_SHELVES_PER_ZONE {
        return Err(invalid_settings(format!(
            "at most {} shelves per zone",
            MAX_SHELVES_PER_ZONE
        )));
    }
    if !s.retraction.is_finite() || s.retraction < 0.0 {
        return Err(invalid_settings("shelf retraction must be a non-negative number"));
    }
    if s.custom_positions.iter().any(|p| !p.is_finite()) {
        return Err(invalid_settings("custom shelf positions must be finite"));
    }
    Ok(())
}

fn validate_drawers(s: &DrawerSettings) -> Result<(), Rejection> {
    if s.drawer_count > MAX_DRAWERS_PER_ZONE {
        return Err(invalid_settings(format!(
            "at most {} drawers per zone",
            MAX_DRAWERS_PER_ZONE
        )));
    }
    if !s.face_height.is_finite() || s.face_height <= 0.0 {
        return Err(invalid_settings("drawer face height must be positive"));
    }
    if !s.operational_gap.is_finite() || s.operational_gap < 0.0 {
        return Err(invalid_settings("drawer gap must be a non-negative number"));
    }
    if let Some(depth) = s.box_depth {
        if !depth.is_finite() || depth <= 0.0 {
            return Err(invalid_settings("drawer box depth must be positive"));
        }
    }
    Ok(())
}

fn validate_wardrobe(s: &WardrobeSettings) -> Result<(), Rejection> {
    if !s.rail_height.is_finite() || s.rail_height < 0.0 {
        return Err(invalid_settings("rail height must be a non-negative number"));
    }
    Ok(())
}

/// A vertical interval of the cabinet between two cuts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub index: usize,
    /// x coordinate of the zone start
    pub position: f64,
    pub width: f64,
    pub height: f64,
    pub content: ZoneContent,
    /// Overrides the project material for this zone's content
    #[serde(default)]
    pub material_id: Option<MaterialId>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_visible() -> bool {
    true
}

impl Zone {
    pub fn new(index: usize, position: f64, width: f64, height: f64) -> Self {
        Self {
            index,
            position,
            width,
            height,
            content: ZoneContent::Empty,
            material_id: None,
            visible: true,
            locked: false,
            tags: Vec::new(),
        }
    }

    pub fn end(&self) -> f64 {
        self.position + self.width
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }
}

/// Geometric window a zone or sub-zone is generated in.
///
/// Coordinates: x from the left outer face, y from the floor, z from the
/// rear outer face. `floor` and `ceiling` are the thicknesses of the
/// structural panels occupying the bottom and top of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneFrame {
    pub zone_index: usize,
    pub sub_zone: Option<SubZoneName>,
    pub x: f64,
    pub width: f64,
    pub y: f64,
    pub height: f64,
    pub floor: f64,
    pub ceiling: f64,
    /// Overall cabinet depth
    pub depth: f64,
    /// Back panel thickness, zero without a back
    pub back: f64,
}

impl ZoneFrame {
    /// Full-height frame of a top-level zone
    pub fn for_zone(
        zone: &Zone,
        profile: &ThicknessProfile,
        dimensions: &Dimensions,
        has_back: bool,
    ) -> Self {
        Self {
            zone_index: zone.index,
            sub_zone: None,
            x: zone.position,
            width: zone.width,
            y: 0.0,
            height: zone.height,
            floor: profile.bottom,
            ceiling: profile.top,
            depth: dimensions.depth,
            back: if has_back { profile.back } else { 0.0 },
        }
    }

    /// Window between `bottom` and `top` of this frame, tagged `name`
    pub fn sub_frame(
        &self,
        name: SubZoneName,
        bottom: f64,
        top: f64,
        floor: f64,
        ceiling: f64,
    ) -> Self {
        Self {
            sub_zone: Some(name),
            y: bottom,
            height: (top - bottom).max(0.0),
            floor,
            ceiling,
            ..*self
        }
    }

    pub fn usable_height(&self) -> f64 {
        (self.height - self.floor - self.ceiling).max(0.0)
    }

    pub fn interior_bottom(&self) -> f64 {
        self.y + self.floor
    }

    pub fn interior_top(&self) -> f64 {
        self.y + self.height - self.ceiling
    }

    /// Depth available in front of the back panel
    pub fn interior_depth(&self) -> f64 {
        (self.depth - self.back).max(0.0)
    }

    pub fn centre_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}
