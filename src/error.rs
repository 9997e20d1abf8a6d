//! Errors surfaced by the status machine.
//!
//! Transitions never fail on a supported timestamp; everything here comes
//! from the persistence collaborator, a rejected stored snapshot, an input
//! outside the supported calendar range, or setup.

use crate::builder::BuildError;
use crate::checkpoint::InvariantViolation;
use crate::config::ConfigError;
use crate::status::OutOfRange;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    /// Reading the stored status failed
    #[error("Failed to load stored status")]
    Load(#[source] StoreError),

    /// Writing the new status failed; the transition did not happen
    #[error("Failed to persist status")]
    Persist(#[source] StoreError),

    /// The stored status breaks a derived-date invariant
    #[error("Stored status violates {} invariant(s): {}", .violations.len(), summarize(.violations))]
    InvalidSnapshot { violations: Vec<InvariantViolation> },

    /// An operation's timestamp has no reporting day; the status is unchanged
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    #[error("Invalid configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

fn summarize(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
