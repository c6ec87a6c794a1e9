//! Directly addressable drag targets.
//!
//! When the host hands the controller the dragged element itself, the
//! element's positional style doubles as the baseline source (when no
//! position getter is configured) and receives every position write
//! alongside the host's sink.

use crate::geometry::Point;
use crate::input::coords::parse_css_number;
use crate::input::scope::SharedScope;
use parking_lot::Mutex;
use std::sync::Arc;

/// An element whose `left`/`top` style the controller can read and write.
pub trait DragTarget: Send + Sync {
    /// Current `left`/`top` as numbers, per axis `None` when unparseable
    fn style_offset(&self) -> (Option<f32>, Option<f32>);

    /// Write `left`/`top`
    fn write_style_offset(&self, position: Point);

    /// Document owning the element, if it differs from the controller's
    fn owner_scope(&self) -> Option<SharedScope> {
        None
    }
}

/// Shared handle to a target
pub type SharedTarget = Arc<dyn DragTarget>;

/// Positional inline style, stored as CSS strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub left: String,
    pub top: String,
}

/// A simple element carrying an inline positional style.
pub struct StyledElement {
    style: Mutex<InlineStyle>,
    owner: Option<SharedScope>,
}

impl StyledElement {
    pub fn new() -> Self {
        Self {
            style: Mutex::new(InlineStyle::default()),
            owner: None,
        }
    }

    /// Element with `left`/`top` set to pixel values
    pub fn at(x: f32, y: f32) -> Self {
        let element = Self::new();
        element.write_style_offset(Point::new(x, y));
        element
    }

    pub fn with_owner(mut self, owner: SharedScope) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn set_style(&self, left: impl Into<String>, top: impl Into<String>) {
        let mut style = self.style.lock();
        style.left = left.into();
        style.top = top.into();
    }

    pub fn style(&self) -> InlineStyle {
        self.style.lock().clone()
    }
}

impl Default for StyledElement {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTarget for StyledElement {
    fn style_offset(&self) -> (Option<f32>, Option<f32>) {
        let style = self.style.lock();
        (parse_css_number(&style.left), parse_css_number(&style.top))
    }

    fn write_style_offset(&self, position: Point) {
        let mut style = self.style.lock();
        style.left = format!("{}px", position.x);
        style.top = format!("{}px", position.y);
    }

    fn owner_scope(&self) -> Option<SharedScope> {
        self.owner.clone()
    }
}
