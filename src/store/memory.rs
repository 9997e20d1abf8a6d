//! In-memory store.

use super::{StatusStore, StoreError};
use crate::status::Status;

/// Keeps the status in memory. Useful for tests and short-lived hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    status: Option<Status>,
    saves: usize,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `status`.
    pub fn with_status(status: Status) -> Self {
        Self {
            status: Some(status),
            saves: 0,
        }
    }

    /// The last saved status, if any.
    pub fn stored(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StatusStore for MemoryStore {
    fn load(&self) -> Result<Option<Status>, StoreError> {
        Ok(self.status.clone())
    }

    fn save(&mut self, status: &Status) -> Result<(), StoreError> {
        self.status = Some(status.clone());
        self.saves += 1;
        Ok(())
    }
}
