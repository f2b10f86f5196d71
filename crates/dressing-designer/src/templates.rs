//! Built-in starting layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dimensions::Dimensions;
use crate::divider::{normalize, Divider};
use crate::error::GenerationError;
use crate::partition::DEFAULT_MIN_ZONE_WIDTH;
use crate::project::FurnitureProject;
use crate::zone::{
    DrawerSettings, DrawerType, SeparationSettings, ShelfSettings, SubZoneContent,
    WardrobeSettings, ZoneContent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTemplate {
    /// 1000mm single hanging section
    SingleWardrobe,
    /// 2400mm walk-in style unit: drawers under shelves, hanging, shelving
    DressingThreeZones,
    /// Shallow open shelving
    ShelvingUnit,
    /// Chest of custom drawer boxes
    DrawerChest,
}

impl ProjectTemplate {
    pub fn all() -> &'static [ProjectTemplate] {
        &[
            ProjectTemplate::SingleWardrobe,
            ProjectTemplate::DressingThreeZones,
            ProjectTemplate::ShelvingUnit,
            ProjectTemplate::DrawerChest,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectTemplate::SingleWardrobe => "single_wardrobe",
            ProjectTemplate::DressingThreeZones => "dressing_three_zones",
            ProjectTemplate::ShelvingUnit => "shelving_unit",
            ProjectTemplate::DrawerChest => "drawer_chest",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProjectTemplate::SingleWardrobe => "Single wardrobe",
            ProjectTemplate::DressingThreeZones => "Three-zone dressing",
            ProjectTemplate::ShelvingUnit => "Shelving unit",
            ProjectTemplate::DrawerChest => "Drawer chest",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProjectTemplate::SingleWardrobe => "1000 x 2400 x 600 with one hanging rail",
            ProjectTemplate::DressingThreeZones => {
                "2400 x 2400 x 600: drawers below shelves, a hanging section and shelving"
            }
            ProjectTemplate::ShelvingUnit => "800 x 2000 x 350 with five adjustable shelves",
            ProjectTemplate::DrawerChest => "900 x 1000 x 500 with five custom drawer boxes",
        }
    }

    fn dimensions(&self) -> Dimensions {
        match self {
            ProjectTemplate::SingleWardrobe => Dimensions::new(1000.0, 2400.0, 600.0),
            ProjectTemplate::DressingThreeZones => Dimensions::new(2400.0, 2400.0, 600.0),
            ProjectTemplate::ShelvingUnit => Dimensions::new(800.0, 2000.0, 350.0),
            ProjectTemplate::DrawerChest => Dimensions::new(900.0, 1000.0, 500.0),
        }
    }

    fn divider_positions(&self) -> &'static [f64] {
        match self {
            ProjectTemplate::DressingThreeZones => &[800.0, 1600.0],
            _ => &[],
        }
    }

    fn contents(&self) -> Vec<ZoneContent> {
        match self {
            ProjectTemplate::SingleWardrobe => {
                vec![ZoneContent::Wardrobe(WardrobeSettings::default())]
            }
            ProjectTemplate::DressingThreeZones => vec![
                ZoneContent::HorizontalSeparation(SeparationSettings {
                    separation_height: 800.0,
                    lower: SubZoneContent::Drawers(DrawerSettings::default()),
                    upper: SubZoneContent::Shelves(ShelfSettings::default()),
                    ..Default::default()
                }),
                ZoneContent::Wardrobe(WardrobeSettings::default()),
                ZoneContent::Shelves(ShelfSettings {
                    shelf_count: 5,
                    ..Default::default()
                }),
            ],
            ProjectTemplate::ShelvingUnit => vec![ZoneContent::Shelves(ShelfSettings {
                shelf_count: 5,
                retraction: 10.0,
                ..Default::default()
            })],
            ProjectTemplate::DrawerChest => vec![ZoneContent::Drawers(DrawerSettings {
                drawer_count: 5,
                face_height: 180.0,
                drawer_type: DrawerType::Custom,
                ..Default::default()
            })],
        }
    }

    /// Builds a fully generated project from the template.
    pub fn build(&self) -> Result<FurnitureProject, GenerationError> {
        let mut project = FurnitureProject::new(self.name());
        project.dimensions = self.dimensions();
        project.dividers = self
            .divider_positions()
            .iter()
            .map(|&p| Divider::new(p, project.thickness.vertical_dividers))
            .collect();
        normalize(&mut project.dividers);
        project.repartition(DEFAULT_MIN_ZONE_WIDTH);

        for (zone, content) in project.zones.iter_mut().zip(self.contents()) {
            zone.content = content;
        }
        project.metadata.description = self.description().to_string();
        project.metadata.template = Some(self.as_str().to_string());

        project.regenerate()?;
        Ok(project)
    }
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| format!("Unknown template: {}", s))
    }
}
