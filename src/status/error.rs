//! Errors raised while deriving status dates.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A timestamp whose derived dates fall outside the supported calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {value} is outside the supported calendar range")]
pub struct OutOfRange {
    /// Input the derived date was computed from
    pub field: &'static str,
    pub value: DateTime<Utc>,
}

/// A window length an [`IsolationPolicy`](super::IsolationPolicy) refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("{0} must be at least one reporting day")]
    Zero(&'static str),

    #[error("{field} must be at most {max} reporting days")]
    TooLong { field: &'static str, max: u32 },
}
