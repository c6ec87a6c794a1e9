//! Unit tests for settings persistence.

use guidedrag::{DragError, DragOptions, DragSettings, Modifier};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drag.json");

    let settings = DragSettings {
        snap_threshold: 12.0,
        axis_lock_modifier: Modifier::Control,
        scale: 1.5,
        move_budget_ms: 8.0,
    };
    settings.save(&path).unwrap();

    let loaded = DragSettings::load(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_empty_object_is_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drag.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(DragSettings::load(&path).unwrap(), DragSettings::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = DragSettings::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(DragError::Io(_))));
}

#[test]
fn test_invalid_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("drag.json");
    fs::write(&path, r#"{"move_budget_ms": 0}"#).unwrap();

    assert!(matches!(
        DragSettings::load(&path),
        Err(DragError::InvalidSetting(_))
    ));
}

#[test]
fn test_settings_seed_options() {
    let settings = DragSettings::from_json(r#"{"snap_threshold": 4, "axis_lock_modifier": "platform"}"#)
        .unwrap();
    let options = DragOptions::from_settings(&settings);

    assert_eq!(options.snap_threshold_value(), 4.0);
    assert_eq!(options.axis_lock_modifier_value(), Modifier::Platform);
}
