//! Drag-wide constants.
//!
//! Centralizes the thresholds and defaults shared by the snapping,
//! axis-lock and instrumentation code.

// ============================================================================
// Snapping
// ============================================================================

/// Proximity window (in host units) for guide snapping, applied on both sides
pub const SNAP_THRESHOLD: f32 = 20.0;

// ============================================================================
// Scaling
// ============================================================================

/// Default multiplier applied to the delta after locks and snaps
pub const DEFAULT_SCALE: f32 = 1.0;

// ============================================================================
// Pointer Buttons
// ============================================================================

/// Button bitmask reported by a move event when no button is held
pub const NO_BUTTONS: u16 = 0;

/// Primary (left) button bit
pub const PRIMARY_BUTTON: u16 = 1;

// ============================================================================
// Performance
// ============================================================================

/// Per-move time budget in milliseconds before a slow-move warning
pub const DEFAULT_MOVE_BUDGET_MS: f64 = 4.0;

/// Number of move samples kept for rolling statistics
pub const MOVE_SAMPLE_COUNT: usize = 120;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "guidedrag=info";
