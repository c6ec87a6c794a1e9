//! Per-session state and the delta pipeline.
//!
//! One [`Session`] lives inside the controller and is reset on every
//! start. The pipeline runs in a fixed order on each move: user axis lock,
//! guide lock refresh, guide snap overwrite, then scale.

use tracing::{debug, trace};

use crate::geometry::{Axis, Delta, Point, Position, detect_axis_lock, is_point_in};
use crate::guides::{GuideId, GuideLock, GuideLockRegistry, GuideRole, GuideSet};
use crate::input::{DragState, Modifier};

/// Everything the controller tracks between start and stop.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) state: DragState,
    pub(crate) delta: Delta,
    pub(crate) position: Option<Position>,
    pub(crate) current_pointer: Option<Point>,
    pub(crate) guides_static: GuideSet,
    pub(crate) guides_target: GuideSet,
    pub(crate) locks: GuideLockRegistry,
    pub(crate) snap_threshold: f32,
    pub(crate) axis_lock_modifier: Modifier,
}

impl Session {
    /// Reset for a new session starting at `start_pointer`
    pub(crate) fn begin(&mut self, start_pointer: Point, snap_threshold: f32, modifier: Modifier) {
        self.state.begin(start_pointer);
        self.delta = Delta::default();
        self.position = None;
        self.current_pointer = None;
        self.guides_static = GuideSet::new(GuideRole::Static);
        self.guides_target = GuideSet::new(GuideRole::Target);
        self.locks.clear_all();
        self.snap_threshold = snap_threshold;
        self.axis_lock_modifier = modifier;
    }

    /// Back to idle; last delta/position stay readable
    pub(crate) fn finish(&mut self) {
        self.state.reset();
        self.locks.clear_all();
    }

    /// Run the full pipeline for a pointer at `current`.
    ///
    /// Stores the chosen axis lock; the caller stores the returned delta.
    pub(crate) fn resolve_delta(&mut self, current: Point, modifier_held: bool, scale: f32) -> Delta {
        let Some(start_pointer) = self.state.start_pointer() else {
            return Delta::default();
        };
        let mut delta = current - start_pointer;

        let locked_axis = if modifier_held {
            self.state.locked_axis().or_else(|| detect_axis_lock(delta.x, delta.y))
        } else {
            None
        };
        if let Some(axis) = locked_axis {
            // Freeze at the start pointer's coordinate, not at zero
            delta.set(axis, start_pointer.get(axis));
        }

        self.refresh_guide_locks(delta);
        let delta = self.apply_guide_locks(delta).scaled(scale);

        self.state.set_locked_axis(locked_axis);
        delta
    }

    /// Lock any unlocked axis whose target guide sits near a static guide.
    fn refresh_guide_locks(&mut self, delta: Delta) {
        let threshold = self.snap_threshold;

        for target in self.guides_target.iter() {
            // One lock per axis, whichever guide holds it
            if self.locks.is_locked(target.axis) {
                continue;
            }

            for fixed in self.guides_static.on_axis(target.axis) {
                if !is_point_in(target.coord, fixed.coord, threshold) {
                    continue;
                }
                let value = delta.get(target.axis) - (target.coord - fixed.coord);
                self.locks.set(target.axis, target.id, value);
                debug!(
                    axis = %target.axis,
                    lock = value,
                    kind = ?target.kind,
                    delta = delta.get(target.axis),
                    range = ?(value - threshold, value + threshold),
                    "Guide locked"
                );
                break;
            }
        }
    }

    /// Drop locks the delta drifted away from, pin the axes still locked.
    fn apply_guide_locks(&mut self, mut delta: Delta) -> Delta {
        for axis in Axis::BOTH {
            let Some(lock) = self.locks.get(axis) else {
                continue;
            };
            if is_point_in(delta.get(axis), lock.value, self.snap_threshold) {
                trace!(axis = %axis, lock = lock.value, delta = delta.get(axis), "Snapped");
                delta.set(axis, lock.value);
            } else {
                self.locks.clear(axis);
                debug!(axis = %axis, lock = lock.value, delta = delta.get(axis), "Guide unlocked");
            }
        }
        delta
    }
}

/// Read access to the controller handed to hooks and hosts.
#[derive(Clone, Copy)]
pub struct DragView<'a> {
    session: &'a Session,
}

impl<'a> DragView<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.state.is_dragging()
    }

    pub fn state(&self) -> DragState {
        self.session.state
    }

    /// Delta after locks, snaps and scale
    pub fn delta(&self) -> Delta {
        self.session.delta
    }

    /// Last written position
    pub fn position(&self) -> Option<Position> {
        self.session.position
    }

    pub fn locked_axis(&self) -> Option<Axis> {
        self.session.state.locked_axis()
    }

    pub fn start_pointer(&self) -> Option<Point> {
        self.session.state.start_pointer()
    }

    pub fn start_position(&self) -> Option<Point> {
        self.session.state.start_position()
    }

    pub fn current_pointer(&self) -> Option<Point> {
        self.session.current_pointer
    }

    pub fn guide_lock(&self, axis: Axis) -> Option<GuideLock> {
        self.session.locks.get(axis)
    }

    /// Whether a target guide currently holds a snap. Static ids are
    /// never active.
    pub fn is_guide_active(&self, guide: GuideId) -> bool {
        self.session.locks.is_active(guide)
    }

    pub fn static_guides(&self) -> &'a GuideSet {
        &self.session.guides_static
    }

    pub fn target_guides(&self) -> &'a GuideSet {
        &self.session.guides_target
    }
}
