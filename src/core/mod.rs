//! Generic state machine building blocks.
//!
//! - States via the `State` trait
//! - Immutable transition records
//!
//! All logic in this module is pure (no side effects).

mod state;
mod transition;

pub use state::State;
pub use transition::StateTransition;
