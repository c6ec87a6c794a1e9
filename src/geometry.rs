//! Geometry primitives shared by the drag pipeline.
//!
//! Pure value types and the two numeric tests the controller is built on:
//! the proximity window used by guide snapping, and the dominance test
//! that picks which axis a constrained drag freezes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    /// Index into per-axis arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// A point in the host's coordinate space.
///
/// Used for pointer snapshots as well as for deltas (offsets from the
/// pointer captured at session start).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Offset from the start pointer after lock, snap and scale transforms
pub type Delta = Point;

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Read one component
    #[inline]
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Overwrite one component
    #[inline]
    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    /// Multiply both components
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Absolute coordinates of the dragged entity.
///
/// `end` is set only on the final write of a session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub end: bool,
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, end: false }
    }

    /// Baseline plus delta, optionally marked terminal
    #[inline]
    pub fn offset(base: Point, delta: Delta, end: bool) -> Self {
        Self {
            x: base.x + delta.x,
            y: base.y + delta.y,
            end,
        }
    }

    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Returns true when `src` lies within `offset` of `trg`, inclusive on both sides.
///
/// NaN on either side never matches.
#[inline]
pub fn is_point_in(src: f32, trg: f32, offset: f32) -> bool {
    (src >= trg && src <= trg + offset) || (src <= trg && src >= trg - offset)
}

/// Pick the axis a constrained drag should freeze, from the raw delta.
///
/// Vertical movement that dominates or ties freezes the horizontal axis
/// (`Axis::X`); strictly dominant horizontal movement freezes `Axis::Y`.
/// Returns `None` only when neither test holds, which the caller treats as
/// "retry on the next move".
pub fn detect_axis_lock(rel_x: f32, rel_y: f32) -> Option<Axis> {
    let abs_x = rel_x.abs();
    let abs_y = rel_y.abs();

    if rel_y >= abs_x || rel_y <= -abs_x {
        Some(Axis::X)
    } else if rel_x > abs_y || rel_x < -abs_y {
        Some(Axis::Y)
    } else {
        None
    }
}
