//! Error types for timeline composition (thiserror-based).

use thiserror::Error;

/// Errors that can occur while composing timelines.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A layer frame references a slot outside the merged backbone. Frame
    /// numbers are assigned by `Layer::push` or the splitter; a number of 0
    /// means the frame was never assigned one.
    #[error("layer {layer}: frame number {number} outside merged range 1..={last}")]
    FrameOutOfRange { layer: i32, number: u32, last: u32 },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type for timeline operations.
pub type TimelineResult<T> = Result<T, TimelineError>;
