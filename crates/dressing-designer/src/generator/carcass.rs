use dressing_core::MaterialId;
use tracing::warn;

use crate::dimensions::Dimensions;
use crate::divider::Divider;
use crate::model::{
    CarcassPanel, Component, ComponentId, ComponentKind, ComponentMetadata, ComponentType,
    FixationKind, Orientation, PartSize, Placement,
};
use crate::thickness::{PanelRole, ThicknessProfile};

/// Carcass panels: two sides, top, bottom, the back when present and one
/// panel per divider. Every part is structural and uses `material`.
pub fn generate_carcass(
    dimensions: &Dimensions,
    profile: &ThicknessProfile,
    dividers: &[Divider],
    has_back: bool,
    material: &MaterialId,
) -> Vec<Component> {
    let Dimensions {
        width,
        height,
        depth,
    } = *dimensions;
    let back = if has_back { profile.back } else { 0.0 };
    let inner_depth = (depth - back).max(0.0);
    let z = back + inner_depth / 2.0;

    let side_ids = [
        ComponentId::structural(ComponentType::Side, 0),
        ComponentId::structural(ComponentType::Side, 1),
    ];
    let top_id = ComponentId::structural(ComponentType::Top, 0);
    let bottom_id = ComponentId::structural(ComponentType::Bottom, 0);

    let panel = |component_type: ComponentType,
                 role: PanelRole,
                 local_index: usize,
                 size: PartSize,
                 placement: Placement| {
        Component::new(
            component_type,
            material.clone(),
            size,
            ComponentKind::Panel(CarcassPanel::new(role, placement)),
            ComponentMetadata::structural(local_index),
        )
    };

    let mut components = Vec::with_capacity(5 + dividers.len());

    for (local, x) in [(0, profile.sides / 2.0), (1, width - profile.sides / 2.0)] {
        components.push(panel(
            ComponentType::Side,
            PanelRole::Sides,
            local,
            PartSize::new(height, inner_depth, profile.sides),
            Placement::new(x, height / 2.0, z, Orientation::Lateral),
        ));
    }

    let span = width - 2.0 * profile.sides;
    let mut top = panel(
        ComponentType::Top,
        PanelRole::Top,
        0,
        PartSize::new(span, inner_depth, profile.top),
        Placement::new(width / 2.0, height - profile.top / 2.0, z, Orientation::Horizontal),
    );
    let mut bottom = panel(
        ComponentType::Bottom,
        PanelRole::Bottom,
        0,
        PartSize::new(span, inner_depth, profile.bottom),
        Placement::new(width / 2.0, profile.bottom / 2.0, z, Orientation::Horizontal),
    );
    for part in [&mut top, &mut bottom] {
        if let Some(features) = part.panel_mut() {
            features.add_fixation(side_ids[0].clone(), FixationKind::Cam, 0.0, inner_depth / 2.0);
            features.add_fixation(side_ids[1].clone(), FixationKind::Cam, span, inner_depth / 2.0);
        }
    }
    components.push(top);
    components.push(bottom);

    if has_back {
        let mut back_panel = panel(
            ComponentType::Back,
            PanelRole::Back,
            0,
            PartSize::new(width, height, profile.back),
            Placement::new(width / 2.0, height / 2.0, profile.back / 2.0, Orientation::Frontal),
        );
        if let Some(features) = back_panel.panel_mut() {
            for (id, x) in side_ids.iter().zip([0.0, width]) {
                features.add_fixation(id.clone(), FixationKind::Nail, x, height / 2.0);
            }
        }
        components.push(back_panel);
    }

    let divider_height = height - profile.top - profile.bottom;
    let t = profile.vertical_dividers;
    for divider in dividers {
        if divider.position < 0.0 || divider.position + t > width {
            warn!(
                "Divider {} at {}mm does not fit inside the {}mm carcass, skipping its panel",
                divider.index, divider.position, width
            );
            continue;
        }
        let mut part = panel(
            ComponentType::VerticalDivider,
            PanelRole::VerticalDividers,
            divider.index,
            PartSize::new(divider_height, inner_depth, t),
            Placement::new(
                divider.position + t / 2.0,
                profile.bottom + divider_height / 2.0,
                z,
                Orientation::Lateral,
            ),
        );
        if let Some(features) = part.panel_mut() {
            features.add_fixation(top_id.clone(), FixationKind::Dowel, divider_height, inner_depth / 2.0);
            features.add_fixation(bottom_id.clone(), FixationKind::Dowel, 0.0, inner_depth / 2.0);
        }
        components.push(part);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider::normalize;

    #[test]
    fn test_carcass_parts() {
        let mut dividers = vec![Divider::new(1000.0, 18.0)];
        normalize(&mut dividers);
        let parts = generate_carcass(
            &Dimensions::new(2000.0, 2400.0, 600.0),
            &ThicknessProfile::default(),
            &dividers,
            true,
            &MaterialId::default(),
        );

        let ids: Vec<&str> = parts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["side-0", "side-1", "top-0", "bottom-0", "back-0", "vertical_divider-0"]
        );
        assert!(parts.iter().all(|c| c.is_structural()));

        let top = &parts[2];
        assert_eq!(top.width, 1964.0);
        assert_eq!(top.length, 592.0);

        let divider = &parts[5];
        assert_eq!(divider.width, 2364.0);
        assert_eq!(divider.placement().x, 1009.0);
    }

    #[test]
    fn test_divider_outside_carcass_has_no_panel() {
        let mut dividers = vec![Divider::new(400.0, 18.0), Divider::new(1500.0, 18.0)];
        normalize(&mut dividers);
        let parts = generate_carcass(
            &Dimensions::new(1000.0, 2000.0, 600.0),
            &ThicknessProfile::default(),
            &dividers,
            true,
            &MaterialId::default(),
        );
        let panels: Vec<&Component> = parts
            .iter()
            .filter(|c| c.component_type == ComponentType::VerticalDivider)
            .collect();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].placement().x, 409.0);
    }

    #[test]
    fn test_no_back() {
        let parts = generate_carcass(
            &Dimensions::new(1000.0, 2000.0, 600.0),
            &ThicknessProfile::default(),
            &[],
            false,
            &MaterialId::default(),
        );
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].length, 600.0);
    }
}
