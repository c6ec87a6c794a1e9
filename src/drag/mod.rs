//! Drag session control.
//!
//! ## Modules
//!
//! - `options` - Configuration slots, scale, merge between sessions
//! - `session` - Per-session state, delta pipeline, read-only view
//! - `controller` - `Dragger`: start/drag/stop lifecycle

mod controller;
mod options;
mod session;

pub use controller::Dragger;
pub use options::{DragHook, DragOptions, GuideSupplier, PositionSink, PositionSource, Scale};
pub use session::DragView;
