//! Renderer boundary.
//!
//! Renderers (3D scene, technical drawing) live outside this crate. They
//! receive a read-only [`ProjectView`] and the material catalog on every
//! call and never hold on to project state.

use dressing_core::{MaterialCatalog, MaterialId};
use uuid::Uuid;

use crate::aggregates::ProjectAggregates;
use crate::dimensions::Dimensions;
use crate::divider::Divider;
use crate::model::Component;
use crate::thickness::ThicknessProfile;
use crate::validation::ValidationStatus;
use crate::zone::Zone;

/// Borrowed snapshot of a project
#[derive(Debug, Clone, Copy)]
pub struct ProjectView<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub dimensions: &'a Dimensions,
    pub thickness: &'a ThicknessProfile,
    pub has_back: bool,
    pub material_id: &'a MaterialId,
    pub dividers: &'a [Divider],
    pub zones: &'a [Zone],
    pub components: &'a [Component],
    pub validation: &'a ValidationStatus,
    pub aggregates: &'a ProjectAggregates,
}

impl<'a> ProjectView<'a> {
    /// Components of a visible zone, plus every structural part
    pub fn visible_components(&self) -> impl Iterator<Item = &'a Component> + 'a {
        let zones = self.zones;
        self.components.iter().filter(move |c| {
            c.is_structural()
                || c.metadata
                    .zone_index
                    .and_then(|i| zones.iter().find(|z| z.index == i))
                    .map_or(true, |z| z.visible)
        })
    }
}

pub trait ProjectRenderer {
    fn name(&self) -> &str;

    fn render(
        &mut self,
        view: &ProjectView<'_>,
        materials: &dyn MaterialCatalog,
    ) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FurnitureProject;
    use crate::zone::{ShelfSettings, ZoneContent};

    #[test]
    fn test_hidden_zone_keeps_carcass() {
        let mut project = FurnitureProject::new("Test");
        project.zones[0].content = ZoneContent::Shelves(ShelfSettings::default());
        project.regenerate().unwrap();
        assert_eq!(project.view().visible_components().count(), 8);

        project.zones[0].visible = false;
        assert_eq!(project.view().visible_components().count(), 5);
    }
}
