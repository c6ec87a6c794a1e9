//! Unit tests for guide descriptors and snapshots.

use guidedrag::{Axis, DragError, Guide, GuideKind, GuideRole, GuideSet};

#[test]
fn test_descriptor_array_from_json() {
    let json = r#"[
        {"x": 0, "type": "left"},
        {"x": 120.5, "type": "right"},
        {"y": 40, "type": "center_y"},
        {"type": "top"}
    ]"#;
    let guides: Vec<Guide> = serde_json::from_str(json).unwrap();
    let set = GuideSet::from_guides(GuideRole::Static, guides);

    assert_eq!(set.len(), 3);
    assert_eq!(set.rejected(), 1);
    assert_eq!(set.on_axis(Axis::X).count(), 2);

    let center = set.on_axis(Axis::Y).next().unwrap();
    assert_eq!(center.coord, 40.0);
    assert_eq!(center.kind, Some(GuideKind::CenterY));
}

#[test]
fn test_zero_coordinate_is_a_valid_guide() {
    // A guide at 0 still has an orientation
    assert_eq!(Guide::at_x(0.0).line().unwrap(), (Axis::X, 0.0));
}

#[test]
fn test_malformed_error_message() {
    let err = Guide::default().line().unwrap_err();
    assert!(matches!(err, DragError::MalformedGuide { x: None, y: None }));
    assert!(err.to_string().contains("exactly one of x/y"));
}

#[test]
fn test_serialization_omits_unset_fields() {
    let json = serde_json::to_string(&Guide::at_y(3.0)).unwrap();
    assert_eq!(json, r#"{"y":3.0}"#);
}
