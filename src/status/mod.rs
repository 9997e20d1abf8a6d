//! Status values, symptoms and the isolation policy that derives their dates.
//!
//! Everything here is a plain immutable value. Transitions between statuses
//! live in [`crate::machine`].

mod advice;
mod error;
mod policy;
#[allow(clippy::module_inception)]
mod status;
mod symptom;

pub use advice::{Advice, CheckinQuestions, Question};
pub use error::{OutOfRange, WindowError};
pub use policy::{
    IsolationPolicy, DEFAULT_CHECKIN_INTERVAL_DAYS, DEFAULT_EXPOSURE_DAYS, DEFAULT_ISOLATION_DAYS,
    MAX_WINDOW_DAYS,
};
pub use status::{Checkin, Exposed, Status, Symptomatic};
pub use symptom::{Symptom, Symptoms};
