//! Persistence collaborator interface.
//!
//! The machine reads one stored status at start-up and writes a new one after
//! every transition. How and where it is stored is up to the implementation.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::checkpoint::CheckpointError;
use crate::status::Status;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`StatusStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    /// Store-specific failure
    #[error("{0}")]
    Backend(String),
}

/// Load/store of the single current status value.
pub trait StatusStore {
    /// The stored status, or `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Status>, StoreError>;

    /// Replace the stored status.
    fn save(&mut self, status: &Status) -> Result<(), StoreError>;
}

impl<T: StatusStore + ?Sized> StatusStore for Box<T> {
    fn load(&self) -> Result<Option<Status>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, status: &Status) -> Result<(), StoreError> {
        (**self).save(status)
    }
}
