//! Pointer input plumbing for the drag controller.
//!
//! Everything between the host's event stream and the session logic:
//! event values, coordinate reading, listener scopes and the dragged
//! element's positional style.
//!
//! ## Architecture
//!
//! The controller tracks its phase with an explicit state machine
//! (`DragState`). Listener registration is a scoped resource
//! (`ListenerSet`) acquired on start and released on every exit path.
//!
//! ## Modules
//!
//! - `event` - Pointer events, modifiers, pressed-button state
//! - `coords` - Pointer reading with host override, CSS number parsing
//! - `scope` - Listener scopes and the per-session listener guard
//! - `target` - Directly addressable elements (style read/write)
//! - `state` - Drag state machine enum

pub mod coords;
mod event;
mod scope;
mod state;
mod target;

pub use coords::{PointerReader, read_pointer};
pub use event::{Modifier, Modifiers, PointerEvent, PointerEventKind};
pub use scope::{Document, ListenerScope, ListenerSet, SESSION_EVENTS, ScopeId, SharedScope};
pub use state::DragState;
pub use target::{DragTarget, InlineStyle, SharedTarget, StyledElement};
