//! Project file round trips

use dressing_designer::serialization::{from_json, to_json};
use dressing_designer::{ProjectFile, ProjectTemplate};
use tempfile::TempDir;

#[test]
fn test_every_template_round_trips_through_json() {
    for template in ProjectTemplate::all() {
        let project = template.build().unwrap();
        let json = to_json(&project).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, project, "{}", template);
    }
}

#[test]
fn test_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dressing.dressing");

    let mut project = ProjectTemplate::DressingThreeZones.build().unwrap();
    project.metadata.author = "Workshop".to_string();
    ProjectFile::new(project.clone()).save_to_file(&path).unwrap();

    let file = ProjectFile::load_from_file(&path).unwrap();
    assert_eq!(file.version, "1.0");
    assert_eq!(file.project, project);
    assert_eq!(file.project.components().len(), project.components().len());
}

#[test]
fn test_missing_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.dressing");
    let err = ProjectFile::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.dressing"));
}

#[test]
fn test_nested_separation_is_refused() {
    let project = ProjectTemplate::DressingThreeZones.build().unwrap();
    let json = to_json(&project).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let lower = &mut value["project"]["zones"][0]["content"]["settings"]["lower"];
    *lower = serde_json::json!({
        "content_type": "horizontal_separation",
        "settings": {}
    });
    assert!(from_json(&value.to_string()).is_err());
}
