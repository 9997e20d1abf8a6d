//! Isolation status: a pure functional self-isolation state machine.
//!
//! The crate tracks one user's self-reported status for a contact-tracing
//! app and decides, from the stored status and an explicitly supplied time,
//! what happens next: keep isolating, answer a check-in, or carry on.
//!
//! The core follows a "pure core, imperative shell" layout:
//!
//! - **Clock**: maps instants to 07:00-based reporting days ([`clock`])
//! - **Status**: immutable status values with derived dates ([`status`])
//! - **Transitions**: total pure functions over status and input
//!   ([`machine::transition`])
//! - **Shell**: [`StatusMachine`] loads, persists and records transitions
//!   through a [`StatusStore`]
//!
//! No function in the core reads the system clock.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use isolation_status::store::MemoryStore;
//! use isolation_status::{symptoms, IsolationPolicy, Status, StatusMachine};
//!
//! let mut machine = StatusMachine::load(MemoryStore::new(), IsolationPolicy::default()).unwrap();
//!
//! let start = Utc.with_ymd_and_hms(2020, 4, 1, 9, 0, 0).unwrap();
//! machine.self_diagnose(symptoms![Cough], start).unwrap();
//! assert!(machine.current_status().is_symptomatic());
//!
//! // A week later the isolation expires and a check-in is due.
//! let later = Utc.with_ymd_and_hms(2020, 4, 8, 9, 0, 0).unwrap();
//! machine.tick(later).unwrap();
//! assert!(machine.current_status().is_checkin());
//!
//! machine.checkin(symptoms![Cough], later).unwrap();
//! assert_eq!(machine.current_status(), &Status::Ok);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod clock;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;
pub mod status;
pub mod store;

// Re-export commonly used types
pub use clock::ReportingClock;
pub use core::{State, StateTransition};
pub use error::StatusError;
pub use machine::{Operation, StatusMachine};
pub use status::{Advice, IsolationPolicy, Status, Symptom, Symptoms};
pub use store::StatusStore;
