//! Build errors for the status machine builder.

use thiserror::Error;

/// Errors that can occur when building a status machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Status store not specified. Call .store(store) before .build()")]
    MissingStore,

    #[error("Both a policy and a config were given. Call only one of .policy() or .config()")]
    ConflictingPolicy,
}
