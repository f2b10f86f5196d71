use dressing_core::data::materials::*;

#[test]
fn test_material_id_display() {
    let id = MaterialId("melamine_white".to_string());
    assert_eq!(id.to_string(), "melamine_white");
    assert_eq!(MaterialId::default().as_str(), DEFAULT_MATERIAL_ID);
}

#[test]
fn test_material_creation() {
    let material = Material::new(
        MaterialId("test".to_string()),
        "Test Board".to_string(),
        MaterialCategory::Plywood,
    );

    assert_eq!(material.id.0, "test");
    assert_eq!(material.name, "Test Board");
    assert_eq!(material.category, MaterialCategory::Plywood);
    assert!(material.structural);
    assert!(material.price_per_linear_m.is_none());
}

#[test]
fn test_custom_material_resolves() {
    let mut library = init_standard_library();
    let mut walnut = Material::new(
        MaterialId::from("veneer_walnut"),
        "Walnut Veneer".to_string(),
        MaterialCategory::Veneer,
    );
    walnut.price_per_m2 = 80.0;
    walnut.density = 700.0;
    walnut.custom = true;
    library.add_material(walnut);

    let resolved = library.resolve(&MaterialId::from("veneer_walnut"));
    assert!(!resolved.is_fallback);
    assert_eq!(resolved.price_per_m2, 80.0);
    assert_eq!(library.display_name(&MaterialId::from("veneer_walnut")), "Walnut Veneer");
}

#[test]
fn test_remove_material_then_fallback() {
    let mut library = init_standard_library();
    let id = MaterialId::from("mdf_raw");
    assert!(library.remove_material(&id).is_some());
    assert!(!library.contains(&id));
    assert!(library.resolve(&id).is_fallback);
}

#[test]
fn test_rail_material_is_linear() {
    let library = init_standard_library();
    let rail = library.resolve(&MaterialId::from(RAIL_MATERIAL_ID));
    assert_eq!(rail.price_per_linear_m, Some(9.0));
    assert!(!rail.structural);
}

#[test]
fn test_structural_materials_exclude_hardboard() {
    let library = init_standard_library();
    assert!(library
        .structural_materials()
        .iter()
        .all(|m| m.category != MaterialCategory::Hardboard));
}

#[test]
fn test_library_serialization() {
    let library = init_standard_library();
    let json = serde_json::to_string(&library).unwrap();
    let restored: MaterialLibrary = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.len(), library.len());
}
