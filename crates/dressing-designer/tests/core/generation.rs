//! Regeneration scenarios on whole projects

use dressing_designer::{
    generate_project, Component, ComponentType, Dimensions, DrawerSettings, FurnitureProject,
    SeparationSettings, ShelfSettings, SubZoneContent, SubZoneName, ZoneContent,
};

fn of_type(project: &FurnitureProject, component_type: ComponentType) -> Vec<&Component> {
    project
        .components()
        .iter()
        .filter(|c| c.component_type == component_type)
        .collect()
}

fn project(width: f64, height: f64, depth: f64, content: ZoneContent) -> FurnitureProject {
    let mut project = FurnitureProject::new("Scenario");
    project.dimensions = Dimensions::new(width, height, depth);
    project.repartition(100.0);
    project.zones[0].content = content;
    project.regenerate().unwrap();
    project
}

#[test]
fn test_even_shelving() {
    let project = project(
        600.0,
        2000.0,
        600.0,
        ZoneContent::Shelves(ShelfSettings {
            shelf_count: 3,
            ..Default::default()
        }),
    );

    let heights: Vec<f64> = of_type(&project, ComponentType::Shelf)
        .iter()
        .map(|c| c.placement().y)
        .collect();
    assert_eq!(heights.len(), 3);
    for (actual, expected) in heights.iter().zip([500.0, 1000.0, 1500.0]) {
        assert!((actual - expected).abs() < 10.0, "{} vs {}", actual, expected);
    }
    assert_eq!(heights[1], 1000.0);

    let shelf = of_type(&project, ComponentType::Shelf)[0];
    // 600 - 2 x 1mm clearance, 600 - 20 retraction - 8 back
    assert_eq!(shelf.width, 598.0);
    assert_eq!(shelf.length, 572.0);
}

#[test]
fn test_custom_positions_need_matching_count() {
    let project = project(
        600.0,
        2000.0,
        600.0,
        ZoneContent::Shelves(ShelfSettings {
            shelf_count: 3,
            spacing: dressing_designer::ShelfSpacing::Custom,
            custom_positions: vec![300.0, 900.0],
            ..Default::default()
        }),
    );
    let heights: Vec<f64> = of_type(&project, ComponentType::Shelf)
        .iter()
        .map(|c| c.placement().y)
        .collect();
    assert_eq!(heights, vec![509.0, 1000.0, 1491.0]);
}

#[test]
fn test_separation_with_lower_drawers() {
    let project = project(
        800.0,
        2400.0,
        600.0,
        ZoneContent::HorizontalSeparation(SeparationSettings {
            separation_height: 900.0,
            lower: SubZoneContent::Drawers(DrawerSettings {
                drawer_count: 2,
                ..Default::default()
            }),
            ..Default::default()
        }),
    );

    let fronts = of_type(&project, ComponentType::DrawerFront);
    assert_eq!(fronts.len(), 2);
    for front in &fronts {
        assert_eq!(front.metadata.sub_zone, Some(SubZoneName::Lower));
        assert!(front.metadata.tags.iter().any(|t| t == "lower"));
        assert!(front.placement().y < 900.0);
    }
    assert_eq!(of_type(&project, ComponentType::HorizontalSeparator).len(), 1);
}

#[test]
fn test_oversized_drawer_pack() {
    let project = project(
        600.0,
        400.0,
        500.0,
        ZoneContent::Drawers(DrawerSettings {
            drawer_count: 4,
            face_height: 150.0,
            ..Default::default()
        }),
    );

    let fronts = of_type(&project, ComponentType::DrawerFront);
    assert_eq!(fronts.len(), 4);
    let total: f64 = fronts.iter().map(|c| c.length).sum::<f64>() + 3.0 * 3.0;
    assert!(total <= 364.0 + 0.01);
    for front in fronts {
        assert!(front.length < 150.0);
        // (400 - 2 x 18 - 3 x 3) / 4
        assert_eq!(front.length, 88.75);
    }
}

#[test]
fn test_regeneration_is_deterministic() {
    let mut project = dressing_designer::ProjectTemplate::DressingThreeZones
        .build()
        .unwrap();
    let first = generate_project(&project).unwrap();
    let second = generate_project(&project).unwrap();
    assert_eq!(first, second);

    project.regenerate().unwrap();
    assert_eq!(project.components(), first.as_slice());
}

#[test]
fn test_ids_are_stable_across_unrelated_edits() {
    let mut project = dressing_designer::ProjectTemplate::DressingThreeZones
        .build()
        .unwrap();
    let zone0: Vec<_> = project
        .components()
        .iter()
        .filter(|c| c.metadata.zone_index == Some(0))
        .map(|c| c.id.clone())
        .collect();

    project.zones[2].content = ZoneContent::Empty;
    project.regenerate().unwrap();

    let after: Vec<_> = project
        .components()
        .iter()
        .filter(|c| c.metadata.zone_index == Some(0))
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(zone0, after);
}

#[test]
fn test_every_component_has_positive_size() {
    for template in dressing_designer::ProjectTemplate::all() {
        let project = template.build().unwrap();
        for component in project.components() {
            assert!(component.width > 0.0, "{}", component.id);
            assert!(component.length > 0.0, "{}", component.id);
            assert!(component.thickness > 0.0, "{}", component.id);
        }
    }
}
