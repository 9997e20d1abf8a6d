//! Builder API for ergonomic status machine construction.
//!
//! This module provides a fluent builder and the `symptoms!` macro.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StatusMachineBuilder;
