//! Pointer-drag controller for direct-manipulation editing surfaces.
//!
//! Tracks a pointer from press to release, turns its movement into a
//! positional delta, and optionally snaps that delta to alignment guides
//! or locks it to a single axis while a modifier is held.
//!
//! ```ignore
//! use guidedrag::{DragOptions, Dragger, Guide, PointerEvent, Point};
//!
//! let mut dragger = Dragger::new(
//!     DragOptions::new()
//!         .with_position_source(|| Point::new(100.0, 100.0))
//!         .with_static_guides(|| vec![Guide::at_x(240.0)])
//!         .with_target_guides(|| vec![Guide::at_x(100.0)])
//!         .on_end(|_, view| println!("dropped at {:?}", view.position())),
//! );
//!
//! dragger.start(&PointerEvent::down(0.0, 0.0));
//! dragger.drag(&PointerEvent::moved(50.0, -10.0));
//! dragger.stop(&PointerEvent::up(50.0, -10.0));
//! ```

pub mod constants;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod guides;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;

pub use drag::{DragOptions, DragView, Dragger, Scale};
pub use error::{DragError, DragResult};
pub use geometry::{Axis, Delta, Point, Position};
pub use guides::{Guide, GuideId, GuideKind, GuideLock, GuideRole, GuideSet};
pub use input::{Document, Modifier, Modifiers, PointerEvent, PointerEventKind, StyledElement};
pub use settings::DragSettings;
