//! Core State trait for machine states.
//!
//! States are immutable values; the trait only exposes pure inspection
//! methods used for logging and transition records.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: transitions produce new values from old ones
/// - `PartialEq`: no-op transitions are detected by comparison
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states are persisted between runs
///
/// # Example
///
/// ```rust
/// use isolation_status::core::State;
/// use isolation_status::status::Status;
///
/// assert_eq!(Status::Ok.name(), "Ok");
/// assert!(!Status::Ok.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display/logging.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
