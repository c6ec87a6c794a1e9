//! Guide snapping through full sessions.

use crate::helpers::{assert_point_eq, DragHarness, DragHarnessBuilder};
use guidedrag::{Axis, Guide, GuideKind, Point};

fn coincident_x_guides() -> DragHarness {
    DragHarnessBuilder::new()
        .at(100.0, 100.0)
        .with_static_guides(vec![Guide::at_x(100.0)])
        .with_target_guides(vec![Guide::at_x(100.0).with_kind(GuideKind::Left)])
        .build()
}

#[test]
fn test_coincident_guides_pin_axis() {
    let mut harness = coincident_x_guides();
    harness.press(0.0, 0.0);
    assert_eq!(harness.dragger.guide_lock(Axis::X).map(|l| l.value), Some(0.0));

    for (x, y) in [(5.0, 10.0), (-20.0, 30.0), (20.0, -5.0)] {
        harness.move_to(x, y);
        assert_eq!(harness.position().x, 100.0);
        assert_eq!(harness.position().y, 100.0 + y);
    }
}

#[test]
fn test_leaving_window_unlocks_then_relocks() {
    let mut harness = coincident_x_guides();
    harness.press(0.0, 0.0);

    // Outside [-20, 20]: the lock drops and the raw delta shows through
    harness.move_to(21.0, 0.0);
    assert_eq!(harness.dragger.guide_lock(Axis::X), None);
    assert_point_eq(harness.position(), Point::new(121.0, 100.0));

    // The frozen pair is still in range, so the next move locks anew
    harness.move_to(26.0, 0.0);
    assert_eq!(harness.dragger.guide_lock(Axis::X).map(|l| l.value), Some(26.0));

    // And holds within the new window
    harness.move_to(40.0, 0.0);
    assert_point_eq(harness.position(), Point::new(126.0, 100.0));
    harness.move_to(6.0, 0.0);
    assert_point_eq(harness.position(), Point::new(126.0, 100.0));
}

#[test]
fn test_gap_between_guides_snaps_on_press() {
    let mut harness = DragHarnessBuilder::new()
        .at(0.0, 0.0)
        .with_static_guides(vec![Guide::at_y(212.0)])
        .with_target_guides(vec![Guide::at_y(200.0).with_kind(GuideKind::Bottom)])
        .build();

    harness.press(0.0, 0.0);
    // Moves the target edge onto the static line
    assert_point_eq(harness.position(), Point::new(0.0, 12.0));

    harness.move_to(3.0, 25.0);
    assert_point_eq(harness.position(), Point::new(3.0, 12.0));
}

#[test]
fn test_out_of_range_pairs_never_lock() {
    let mut harness = DragHarnessBuilder::new()
        .with_static_guides(vec![Guide::at_x(0.0)])
        .with_target_guides(vec![Guide::at_x(20.5)])
        .build();

    harness.press(0.0, 0.0);
    harness.move_to(7.0, 7.0);
    assert_eq!(harness.dragger.guide_lock(Axis::X), None);
    assert_point_eq(harness.position(), Point::new(7.0, 7.0));
}

#[test]
fn test_active_flag_tracks_lock_holder() {
    let mut harness = coincident_x_guides();
    harness.press(0.0, 0.0);

    let id = harness.dragger.target_guides().iter().next().unwrap().id;
    assert!(harness.dragger.is_guide_active(id));

    harness.move_to(50.0, 0.0);
    assert!(!harness.dragger.is_guide_active(id));

    harness.move_to(51.0, 0.0);
    harness.release(51.0, 0.0);
    // Locks never outlive the session
    assert!(!harness.dragger.is_guide_active(id));
}

#[test]
fn test_static_guides_never_report_active() {
    let mut harness = coincident_x_guides();
    harness.press(0.0, 0.0);

    let target = harness.dragger.target_guides().iter().next().unwrap().id;
    let fixed = harness.dragger.static_guides().iter().next().unwrap().id;
    assert_eq!(target.index(), fixed.index());
    assert_ne!(target, fixed);

    assert!(harness.dragger.is_guide_active(target));
    assert!(!harness.dragger.is_guide_active(fixed));
    assert!(harness.dragger.target_guides().get(fixed).is_none());
}

#[test]
fn test_axis_lock_applies_before_snapping() {
    let mut harness = coincident_x_guides();
    harness.press(50.0, 0.0);
    assert_eq!(harness.dragger.guide_lock(Axis::X).map(|l| l.value), Some(0.0));

    // Axis lock freezes delta.x at 50, outside the guide window around 0
    harness.move_constrained(52.0, 40.0);
    assert_eq!(harness.dragger.locked_axis(), Some(Axis::X));
    assert_eq!(harness.dragger.guide_lock(Axis::X), None);
    assert_eq!(harness.dragger.delta().x, 50.0);
}

#[test]
fn test_malformed_guides_are_skipped() {
    let mut harness = DragHarnessBuilder::new()
        .with_static_guides(vec![
            Guide::default(),
            Guide {
                x: Some(1.0),
                y: Some(1.0),
                kind: None,
            },
            Guide::at_x(10.0),
        ])
        .with_target_guides(vec![Guide::at_x(0.0)])
        .build();

    harness.press(0.0, 0.0);
    assert_eq!(harness.dragger.static_guides().len(), 1);
    assert_eq!(harness.dragger.static_guides().rejected(), 2);
    assert_eq!(harness.dragger.guide_lock(Axis::X).map(|l| l.value), Some(10.0));
}

#[test]
fn test_at_most_one_lock_per_axis() {
    let statics: Vec<Guide> = (0..6)
        .flat_map(|i| [Guide::at_x(i as f32 * 15.0), Guide::at_y(i as f32 * 12.0)])
        .collect();
    let targets: Vec<Guide> = (0..4)
        .flat_map(|i| [Guide::at_x(5.0 + i as f32 * 9.0), Guide::at_y(3.0 + i as f32 * 7.0)])
        .collect();

    let mut harness = DragHarnessBuilder::new()
        .with_static_guides(statics)
        .with_target_guides(targets)
        .build();
    harness.press(0.0, 0.0);

    // Deterministic wandering path
    let mut seed: u32 = 12345;
    let mut next = || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((seed >> 16) % 120) as f32 - 60.0
    };

    for _ in 0..200 {
        let (x, y) = (next(), next());
        harness.move_to(x, y);

        let dragger = &harness.dragger;
        for axis in Axis::BOTH {
            let active = dragger
                .target_guides()
                .on_axis(axis)
                .filter(|line| dragger.is_guide_active(line.id))
                .count();
            assert!(active <= 1, "{} guides active on {}", active, axis);
            assert_eq!(active == 1, dragger.guide_lock(axis).is_some());
        }
    }
}
