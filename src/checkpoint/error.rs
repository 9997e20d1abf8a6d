//! Checkpoint error types.

use std::fmt;
use thiserror::Error;

/// Encoding a checkpoint is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Binary,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to encode status checkpoint as {format}: {reason}")]
    Encode { format: Format, reason: String },

    /// The bytes are not a checkpoint (truncated, corrupt, or another schema)
    #[error("Failed to decode {format} status checkpoint: {reason}")]
    Decode { format: Format, reason: String },

    /// Written by a newer or older release
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl CheckpointError {
    pub(crate) fn encode(format: Format, err: impl fmt::Display) -> Self {
        Self::Encode {
            format,
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode(format: Format, err: impl fmt::Display) -> Self {
        Self::Decode {
            format,
            reason: err.to_string(),
        }
    }
}
