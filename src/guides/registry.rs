//! Guide lock registry - which target guide is snapped on each axis.
//!
//! Lock state lives here, keyed by [`GuideId`], rather than on the guide
//! descriptors. A guide is "active" exactly when it holds the lock for its
//! axis, so the active flag and the lock value can never disagree.

use super::{GuideId, GuideRole};
use crate::geometry::Axis;

/// The snap currently pinning one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLock {
    /// Target guide holding the lock
    pub guide: GuideId,
    /// Delta value the axis is pinned to
    pub value: f32,
}

/// At most one [`GuideLock`] per axis.
#[derive(Debug, Clone, Default)]
pub struct GuideLockRegistry {
    locks: [Option<GuideLock>; 2],
}

impl GuideLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lock on `axis`, if any
    #[inline]
    pub fn get(&self, axis: Axis) -> Option<GuideLock> {
        self.locks[axis.index()]
    }

    #[inline]
    pub fn is_locked(&self, axis: Axis) -> bool {
        self.locks[axis.index()].is_some()
    }

    /// Pin `axis` to `value` on behalf of `guide`.
    ///
    /// Refuses (returns false) while a different guide holds the axis;
    /// re-locking the same guide updates its value.
    pub fn set(&mut self, axis: Axis, guide: GuideId, value: f32) -> bool {
        let slot = &mut self.locks[axis.index()];
        match slot {
            Some(current) if current.guide != guide => false,
            _ => {
                *slot = Some(GuideLock { guide, value });
                true
            }
        }
    }

    /// Drop the lock on `axis`, returning what was held.
    pub fn clear(&mut self, axis: Axis) -> Option<GuideLock> {
        self.locks[axis.index()].take()
    }

    pub fn clear_all(&mut self) {
        self.locks = [None, None];
    }

    /// Whether `guide` currently holds a lock on either axis.
    ///
    /// Only target guides lock, so static ids are never active.
    pub fn is_active(&self, guide: GuideId) -> bool {
        if guide.role() != GuideRole::Target {
            return false;
        }
        self.locks.iter().flatten().any(|lock| lock.guide == guide)
    }
}
