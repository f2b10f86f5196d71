//! Undo/redo laws

use dressing_core::init_standard_library;
use dressing_designer::{
    ContentType, PanelRole, ProjectOrchestrator, RejectionCode, SnapshotHistory,
};
use proptest::prelude::*;
use std::sync::Arc;

fn orchestrator() -> ProjectOrchestrator {
    ProjectOrchestrator::new(Arc::new(init_standard_library()))
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut orchestrator = orchestrator();
    let initial = orchestrator.snapshot();

    orchestrator.update_dimensions(2400.0, 2300.0, 580.0).unwrap();
    orchestrator.add_divider(1200.0).unwrap();
    orchestrator
        .set_zone_content_type(0, ContentType::Drawers)
        .unwrap();
    orchestrator
        .set_zone_content_type(1, ContentType::Wardrobe)
        .unwrap();
    orchestrator.update_thickness(PanelRole::Shelves, 22.0).unwrap();
    let last = orchestrator.snapshot();
    assert_eq!(orchestrator.undo_depth(), 5);

    while orchestrator.can_undo() {
        orchestrator.undo().unwrap();
    }
    assert_eq!(orchestrator.project(), initial.as_ref());

    while orchestrator.can_redo() {
        orchestrator.redo().unwrap();
    }
    assert_eq!(orchestrator.project(), last.as_ref());
}

#[test]
fn test_redo_on_empty_stack_is_an_error() {
    let mut orchestrator = orchestrator();
    let err = orchestrator.redo().unwrap_err();
    assert_eq!(err.code(), Some(RejectionCode::NothingToRedo));
}

#[test]
fn test_new_mutation_clears_redo() {
    let mut orchestrator = orchestrator();
    orchestrator.add_divider(1000.0).unwrap();
    orchestrator.undo().unwrap();
    assert!(orchestrator.can_redo());

    orchestrator.add_divider(800.0).unwrap();
    assert!(!orchestrator.can_redo());
}

#[test]
fn test_rejection_does_not_touch_history() {
    let mut orchestrator = orchestrator();
    orchestrator.add_divider(1000.0).unwrap();
    orchestrator.undo().unwrap();

    assert!(orchestrator.add_divider(-5.0).is_err());
    assert!(orchestrator.can_redo());
    assert_eq!(orchestrator.undo_depth(), 0);
}

#[test]
fn test_history_limit() {
    let mut orchestrator = orchestrator().with_history_limit(3);
    for i in 0..6 {
        orchestrator.rename(format!("Name {}", i)).unwrap();
    }
    assert_eq!(orchestrator.undo_depth(), 3);
    for _ in 0..3 {
        orchestrator.undo().unwrap();
    }
    assert_eq!(orchestrator.project().name, "Name 2");
    assert!(orchestrator.undo().is_err());
}

proptest! {
    #[test]
    fn undo_then_redo_is_identity(values in prop::collection::vec(0u32..1000, 1..20), steps in 0usize..20) {
        let mut history = SnapshotHistory::new(100);
        let mut current = 0u32;
        for value in &values {
            history.record("set", current);
            current = *value;
        }
        let last = current;

        let steps = steps.min(values.len());
        for _ in 0..steps {
            current = history.undo(current).unwrap().snapshot;
        }
        for _ in 0..steps {
            current = history.redo(current).unwrap().snapshot;
        }
        prop_assert_eq!(current, last);
        prop_assert!(!history.can_redo());
    }
}
