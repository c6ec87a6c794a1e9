//! Pointer events as delivered by the host.
//!
//! The controller only needs coordinates, modifier state and the pressed
//! button mask; everything else about the host's input model stays outside.

use crate::constants::{NO_BUTTONS, PRIMARY_BUTTON};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Which pointer transition an event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Modifier keys that can constrain a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    Shift,
    Control,
    Alt,
    /// Command on macOS, Windows key elsewhere
    Platform,
}

/// Modifier key state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub platform: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Whether the given modifier is held
    pub fn is_held(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::Control => self.control,
            Modifier::Alt => self.alt,
            Modifier::Platform => self.platform,
        }
    }
}

/// A pointer event: raw client coordinates, modifiers and pressed buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Raw device coordinates in the host's space
    pub client: Point,
    pub modifiers: Modifiers,
    /// Bitmask of pressed buttons; zero means none
    pub buttons: u16,
}

impl PointerEvent {
    /// Primary-button press
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Down,
            client: Point::new(x, y),
            modifiers: Modifiers::default(),
            buttons: PRIMARY_BUTTON,
        }
    }

    /// Move with the primary button still held
    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Move,
            ..Self::down(x, y)
        }
    }

    /// Button release
    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Up,
            buttons: NO_BUTTONS,
            ..Self::down(x, y)
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_shift(self) -> Self {
        self.with_modifiers(Modifiers::shift())
    }

    pub fn with_buttons(mut self, buttons: u16) -> Self {
        self.buttons = buttons;
        self
    }

    /// True when no button is reported as pressed.
    ///
    /// On a move this means the release happened where no up event
    /// reached us.
    #[inline]
    pub fn no_buttons_pressed(&self) -> bool {
        self.buttons == NO_BUTTONS
    }
}
