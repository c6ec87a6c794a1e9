//! Alignment guides and their per-session snapshots.
//!
//! Hosts describe guides with [`Guide`] descriptors: a line with exactly one
//! of `x`/`y` set. At session start the controller validates both supplier
//! outputs into [`GuideSet`] arenas; snapping then refers to guides by
//! [`GuideId`] and keeps lock state in the [`GuideLockRegistry`] side-table
//! instead of on the descriptors themselves.
//!
//! ## Modules
//!
//! - `registry` - Per-axis "currently snapped guide" state

mod registry;

pub use registry::{GuideLock, GuideLockRegistry};

use crate::error::{DragError, DragResult};
use crate::geometry::Axis;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Which edge or center of an element a guide was derived from.
///
/// Only used for logging and inspection; snapping ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideKind {
    Top,
    Bottom,
    Left,
    Right,
    CenterX,
    CenterY,
}

impl fmt::Display for GuideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuideKind::Top => "top",
            GuideKind::Bottom => "bottom",
            GuideKind::Left => "left",
            GuideKind::Right => "right",
            GuideKind::CenterX => "center-x",
            GuideKind::CenterY => "center-y",
        };
        f.write_str(label)
    }
}

/// A host-supplied guide descriptor.
///
/// `x` set means a vertical line at that x, `y` set a horizontal line at
/// that y. Descriptors with neither or both are rejected at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Guide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<GuideKind>,
}

impl Guide {
    /// Vertical line at `x`
    pub fn at_x(x: f32) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    /// Horizontal line at `y`
    pub fn at_y(y: f32) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: GuideKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Resolve the guide's orientation and coordinate.
    pub fn line(&self) -> DragResult<(Axis, f32)> {
        match (self.x, self.y) {
            (Some(x), None) => Ok((Axis::X, x)),
            (None, Some(y)) => Ok((Axis::Y, y)),
            (x, y) => Err(DragError::MalformedGuide { x, y }),
        }
    }
}

/// Which supplier a [`GuideSet`] was snapshotted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum GuideRole {
    /// Snap sources that stay put
    #[default]
    Static,
    /// Guides that move with the dragged entity
    Target,
}

/// A guide within one session's [`GuideSet`]: the set's role plus an index.
///
/// Ids from the static and target sets never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuideId {
    role: GuideRole,
    index: usize,
}

impl GuideId {
    pub(crate) fn new(role: GuideRole, index: usize) -> Self {
        Self { role, index }
    }

    pub fn role(self) -> GuideRole {
        self.role
    }

    pub fn index(self) -> usize {
        self.index
    }
}

/// A validated guide: one orientation, one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapLine {
    pub id: GuideId,
    pub axis: Axis,
    pub coord: f32,
    pub kind: Option<GuideKind>,
}

/// A frozen, validated snapshot of one guide supplier's output.
#[derive(Debug, Clone, Default)]
pub struct GuideSet {
    role: GuideRole,
    lines: Vec<SnapLine>,
    rejected: usize,
}

impl GuideSet {
    pub fn new(role: GuideRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Validate descriptors, skipping malformed ones with a warning.
    ///
    /// Ids are assigned in input order over the accepted guides.
    pub fn from_guides<I>(role: GuideRole, guides: I) -> Self
    where
        I: IntoIterator<Item = Guide>,
    {
        let mut set = Self::new(role);
        for guide in guides {
            match guide.line() {
                Ok((axis, coord)) => {
                    let id = GuideId::new(role, set.lines.len());
                    set.lines.push(SnapLine {
                        id,
                        axis,
                        coord,
                        kind: guide.kind,
                    });
                }
                Err(e) => {
                    warn!(error = %e, ?role, "Skipping guide");
                    set.rejected += 1;
                }
            }
        }
        set
    }

    pub fn role(&self) -> GuideRole {
        self.role
    }

    /// Look up a guide; ids from the other set resolve to `None`
    pub fn get(&self, id: GuideId) -> Option<&SnapLine> {
        if id.role != self.role {
            return None;
        }
        self.lines.get(id.index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnapLine> {
        self.lines.iter()
    }

    /// Guides sharing the given orientation
    pub fn on_axis(&self, axis: Axis) -> impl Iterator<Item = &SnapLine> {
        self.lines.iter().filter(move |line| line.axis == axis)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of descriptors dropped during validation
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
