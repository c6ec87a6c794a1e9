//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `DragHarnessBuilder` - Builder pattern for a `Dragger` wired to recorders
//! - `DragHarness` - Press/move/release helpers plus what the host observed
//! - Assertion helpers for positions

use guidedrag::input::SharedScope;
use guidedrag::{
    Document, DragOptions, Dragger, Guide, Modifiers, Point, PointerEvent, Position,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Recorder - what the host sees through hooks and the sink
// ============================================================================

/// Everything the hooks and the position sink received.
#[derive(Debug, Default)]
pub struct Recorder {
    pub starts: usize,
    pub drags: usize,
    pub ends: usize,
    /// Every position written to the sink, in order
    pub writes: Vec<Position>,
    /// Position visible to the end hook
    pub end_position: Option<Position>,
}

// ============================================================================
// DragHarnessBuilder
// ============================================================================

/// Builder for a recorded drag controller.
///
/// # Example
/// ```ignore
/// let mut harness = DragHarnessBuilder::new()
///     .at(100.0, 100.0)
///     .with_static_guides(vec![Guide::at_x(100.0)])
///     .with_target_guides(vec![Guide::at_x(100.0)])
///     .build();
/// ```
pub struct DragHarnessBuilder {
    start_position: Point,
    static_guides: Vec<Guide>,
    target_guides: Vec<Guide>,
    scale: f32,
    document: Option<Arc<Document>>,
}

impl Default for DragHarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DragHarnessBuilder {
    pub fn new() -> Self {
        Self {
            start_position: Point::default(),
            static_guides: Vec::new(),
            target_guides: Vec::new(),
            scale: 1.0,
            document: None,
        }
    }

    /// Baseline position returned by the position source.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.start_position = Point::new(x, y);
        self
    }

    pub fn with_static_guides(mut self, guides: Vec<Guide>) -> Self {
        self.static_guides = guides;
        self
    }

    pub fn with_target_guides(mut self, guides: Vec<Guide>) -> Self {
        self.target_guides = guides;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_document(mut self, document: Arc<Document>) -> Self {
        self.document = Some(document);
        self
    }

    pub fn build(self) -> DragHarness {
        let log = Rc::new(RefCell::new(Recorder::default()));
        let start_position = self.start_position;
        let static_guides = self.static_guides;
        let target_guides = self.target_guides;

        let on_start = log.clone();
        let on_drag = log.clone();
        let on_end = log.clone();
        let sink = log.clone();

        let options = DragOptions::new()
            .with_position_source(move || start_position)
            .with_static_guides(move || static_guides.clone())
            .with_target_guides(move || target_guides.clone())
            .with_scale(self.scale)
            .with_position_sink(move |pos| sink.borrow_mut().writes.push(pos))
            .on_start(move |_, _| on_start.borrow_mut().starts += 1)
            .on_drag(move |_, _| on_drag.borrow_mut().drags += 1)
            .on_end(move |_, view| {
                let mut log = on_end.borrow_mut();
                log.ends += 1;
                log.end_position = view.position();
            });

        let mut dragger = Dragger::new(options);
        if let Some(document) = self.document {
            dragger = dragger.with_document(document as SharedScope);
        }

        DragHarness { dragger, log }
    }
}

// ============================================================================
// DragHarness
// ============================================================================

pub struct DragHarness {
    pub dragger: Dragger,
    pub log: Rc<RefCell<Recorder>>,
}

impl DragHarness {
    pub fn press(&mut self, x: f32, y: f32) {
        self.dragger.start(&PointerEvent::down(x, y));
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.dragger.drag(&PointerEvent::moved(x, y))
    }

    /// Move with the axis-lock modifier held
    pub fn move_constrained(&mut self, x: f32, y: f32) -> bool {
        self.dragger
            .drag(&PointerEvent::moved(x, y).with_modifiers(Modifiers::shift()))
    }

    pub fn release(&mut self, x: f32, y: f32) -> bool {
        self.dragger.stop(&PointerEvent::up(x, y))
    }

    /// Last position written, as a point
    pub fn position(&self) -> Point {
        self.dragger
            .position()
            .map(|p| p.point())
            .expect("no position written yet")
    }

    pub fn ends(&self) -> usize {
        self.log.borrow().ends
    }

    pub fn writes(&self) -> Vec<Position> {
        self.log.borrow().writes.clone()
    }
}

/// Harness with a baseline at (x, y) and no guides
pub fn harness_at(x: f32, y: f32) -> DragHarness {
    DragHarnessBuilder::new().at(x, y).build()
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two points are equal within float tolerance.
pub fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-4 && (actual.y - expected.y).abs() < 1e-4,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
