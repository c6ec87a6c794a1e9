//! Error types for guide validation and settings loading.
//!
//! The controller itself never fails: malformed guides are skipped and
//! out-of-session calls are ignored. Errors only surface from explicit
//! validation and from reading settings.

use thiserror::Error;

/// Errors produced by guide validation and settings handling
#[derive(Error, Debug)]
pub enum DragError {
    /// Guide descriptor without exactly one coordinate
    #[error("Malformed guide: expected exactly one of x/y, got x={x:?} y={y:?}")]
    MalformedGuide { x: Option<f32>, y: Option<f32> },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A settings value is out of range
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

/// Result type alias for drag operations
pub type DragResult<T> = Result<T, DragError>;
