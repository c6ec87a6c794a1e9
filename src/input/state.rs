//! Drag session state machine.
//!
//! A single explicit enum instead of scattered optional fields, so a
//! half-started session can't be represented.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (start: press captured, listeners attached)
//! Dragging -> Idle     (stop: explicit release or zero-buttons move)
//! Dragging -> Dragging (start while active: previous session stopped first)
//! ```

use crate::geometry::{Axis, Point};

/// Phase of the drag controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No session running
    #[default]
    Idle,

    /// Between start and stop
    Dragging {
        /// Pointer captured from the press event
        start_pointer: Point,
        /// Baseline position of the dragged entity, unset until the
        /// start hook has run
        start_position: Option<Point>,
        /// Whole-drag axis constraint while the modifier is held
        locked_axis: Option<Axis>,
    },
}

impl DragState {
    /// Enter `Dragging` with the given press pointer
    pub fn begin(&mut self, start_pointer: Point) {
        *self = Self::Dragging {
            start_pointer,
            start_position: None,
            locked_axis: None,
        };
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn start_pointer(&self) -> Option<Point> {
        match self {
            Self::Dragging { start_pointer, .. } => Some(*start_pointer),
            Self::Idle => None,
        }
    }

    pub fn start_position(&self) -> Option<Point> {
        match self {
            Self::Dragging { start_position, .. } => *start_position,
            Self::Idle => None,
        }
    }

    pub fn locked_axis(&self) -> Option<Axis> {
        match self {
            Self::Dragging { locked_axis, .. } => *locked_axis,
            Self::Idle => None,
        }
    }

    /// Record the baseline position once it has been resolved
    pub fn set_start_position(&mut self, position: Point) {
        if let Self::Dragging { start_position, .. } = self {
            *start_position = Some(position);
        }
    }

    pub fn set_locked_axis(&mut self, axis: Option<Axis>) {
        if let Self::Dragging { locked_axis, .. } = self {
            *locked_axis = axis;
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
