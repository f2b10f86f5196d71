//! Bill of materials export

use dressing_designer::{
    aggregate_bill_of_materials, bill_of_materials, bom_to_json, ComponentType, ProjectTemplate,
};

#[test]
fn test_drawer_chest_bom() {
    let project = ProjectTemplate::DrawerChest.build().unwrap();
    let lines = aggregate_bill_of_materials(project.components());

    let sides = lines
        .iter()
        .find(|l| l.component_type == ComponentType::DrawerSide)
        .unwrap();
    assert_eq!(sides.quantity, 10);
    assert_eq!(sides.thickness, 15.0);

    let total: u32 = lines.iter().map(|l| l.quantity).sum();
    assert_eq!(total as usize, project.components().len());
}

#[test]
fn test_rail_is_listed_in_steel() {
    let project = ProjectTemplate::SingleWardrobe.build().unwrap();
    let lines = bill_of_materials(project.components());
    let rail = lines
        .iter()
        .find(|l| l.component_type == ComponentType::WardrobeRail)
        .unwrap();
    assert_eq!(rail.material_id.as_str(), "steel_chrome");
    assert_eq!(rail.length, 940.0);
}

#[test]
fn test_bom_json_uses_snake_case_types() {
    let project = ProjectTemplate::ShelvingUnit.build().unwrap();
    let json = bom_to_json(&aggregate_bill_of_materials(project.components())).unwrap();
    assert!(json.contains("\"component_type\": \"shelf\""));
}
