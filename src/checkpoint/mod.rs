//! Serialized form of the current status.
//!
//! A checkpoint wraps the single current [`Status`] in a versioned envelope.
//! JSON is used by the file store; the binary form is a compact alternative
//! for hosts that keep the status in a keychain or key-value store.

use crate::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
mod validate;

pub use error::{CheckpointError, Format};
pub use validate::{validate_status, InvariantViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of the current status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was written
    pub saved_at: DateTime<Utc>,

    /// The current status
    pub status: Status,
}

impl Checkpoint {
    /// Wraps `status` in a current-version envelope with a fresh id.
    pub fn new(status: Status, saved_at: DateTime<Utc>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            saved_at,
            status,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::encode(Format::Json, e))
    }

    /// Parses JSON and rejects any version other than [`CHECKPOINT_VERSION`].
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::decode(Format::Json, e))?;
        checkpoint.check_version()
    }

    /// Compact bincode encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::encode(Format::Binary, e))
    }

    /// Decodes bincode, with the same version check as [`from_json`](Self::from_json).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::decode(Format::Binary, e))?;
        checkpoint.check_version()
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}
