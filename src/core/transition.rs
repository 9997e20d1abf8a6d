//! Record of a single applied transition.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable record of one move between states.
///
/// Observers (notifications, analytics) read the most recent record; the
/// core keeps no history beyond it.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use isolation_status::core::StateTransition;
/// use isolation_status::status::Status;
///
/// let at = Utc.with_ymd_and_hms(2020, 4, 15, 6, 1, 0).unwrap();
/// let record = StateTransition {
///     from: Status::Ok,
///     to: Status::Ok,
///     operation: "tick".to_string(),
///     timestamp: at,
/// };
/// assert!(!record.changed());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the operation that caused the move
    pub operation: String,
    /// Time input of the operation (never the wall clock)
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether `from` and `to` differ.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// `"From -> To"` for log lines.
    pub fn describe(&self) -> String {
        format!("{} -> {}", self.from.name(), self.to.name())
    }
}
