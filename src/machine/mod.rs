//! The status state machine.
//!
//! [`transition`] holds the pure rules: a total function from the current
//! status and an [`Operation`] to the next status. [`StatusMachine`] is the
//! shell around them that loads, persists and records transitions.

#[allow(clippy::module_inception)]
mod machine;
pub mod transition;

pub use machine::StatusMachine;
pub use transition::{next_status, Operation};
