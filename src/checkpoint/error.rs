//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring a run.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or binary failed
    #[error("Failed to encode checkpoint: {0}")]
    EncodeFailed(String),

    /// Decoding from JSON or binary failed
    #[error("Failed to decode checkpoint: {0}")]
    DecodeFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The captured state set names states the design never mentions.
    /// Each entry is the `Debug` rendering of one such state.
    #[error("Checkpoint holds {} states outside its design: {}", .states.len(), .states.join(", "))]
    UnknownStates { states: Vec<String> },
}
