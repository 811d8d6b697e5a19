//! Errors for the few fallible edges of the engine.
//!
//! Pointer handling and geometry never fail; degenerate input is clamped or
//! ignored. Only snapshot parsing, configuration and explicit id-addressed
//! calls can return an error.

/// Errors produced by snapshot loading, configuration, and id-addressed calls.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A wall snapshot could not be parsed or serialized.
    #[error("wall snapshot invalid: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A call named a wall that is not in the supplied list.
    #[error("unknown wall: {id}")]
    UnknownWall { id: String },
}

impl EditorError {
    /// Stable machine-readable code for hosts that branch on error kind.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Snapshot(_) => "E_SNAPSHOT",
            Self::InvalidConfig(_) => "E_INVALID_CONFIG",
            Self::UnknownWall { .. } => "E_UNKNOWN_WALL",
        }
    }
}
