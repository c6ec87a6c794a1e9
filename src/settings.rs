//! Persistable drag settings.
//!
//! The tunables a host usually exposes to users: snap distance, which
//! modifier constrains the drag, a default scale and the per-move budget.
//! Stored as JSON; missing keys fall back to defaults.

use crate::constants::{DEFAULT_MOVE_BUDGET_MS, DEFAULT_SCALE, SNAP_THRESHOLD};
use crate::error::{DragError, DragResult};
use crate::input::Modifier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Guide snapping proximity window
    pub snap_threshold: f32,
    /// Modifier that constrains the drag to one axis
    pub axis_lock_modifier: Modifier,
    /// Fixed scale applied to the delta
    pub scale: f32,
    /// Per-move time budget before a slow-move warning
    pub move_budget_ms: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            axis_lock_modifier: Modifier::Shift,
            scale: DEFAULT_SCALE,
            move_budget_ms: DEFAULT_MOVE_BUDGET_MS,
        }
    }
}

impl DragSettings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> DragResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> DragResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        debug!(path = %path.display(), ?settings, "Loaded drag settings");
        Ok(settings)
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> DragResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> DragResult<()> {
        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            return Err(DragError::InvalidSetting(format!(
                "snap_threshold must be a finite non-negative number, got {}",
                self.snap_threshold
            )));
        }
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(DragError::InvalidSetting(format!(
                "scale must be finite and non-zero, got {}",
                self.scale
            )));
        }
        if !self.move_budget_ms.is_finite() || self.move_budget_ms <= 0.0 {
            return Err(DragError::InvalidSetting(format!(
                "move_budget_ms must be positive, got {}",
                self.move_budget_ms
            )));
        }
        Ok(())
    }
}
