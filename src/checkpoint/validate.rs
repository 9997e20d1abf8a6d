//! Invariant checks for a status read back from storage.
//!
//! Deserialization bypasses the constructors, so a stored status is checked
//! against the policy before the machine adopts it. All violations are
//! accumulated rather than stopping at the first.

use crate::status::{IsolationPolicy, Status};
use chrono::{DateTime, Utc};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

type Check = Validation<(), NonEmptyVec<InvariantViolation>>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{field} {value} is not on a reporting-day boundary")]
    OffBoundary {
        field: &'static str,
        value: DateTime<Utc>,
    },

    #[error("{status} expiry {found} does not match policy expiry {expected}")]
    ExpiryMismatch {
        status: &'static str,
        expected: DateTime<Utc>,
        found: DateTime<Utc>,
    },

    #[error("{field} {value} is outside the supported calendar range")]
    OutOfRange {
        field: &'static str,
        value: DateTime<Utc>,
    },
}

/// Checks every derived date of `status` against `policy`.
pub fn validate_status(status: &Status, policy: &IsolationPolicy) -> Check {
    let checks = match status {
        Status::Ok => return Validation::success(()),
        Status::Symptomatic(s) => vec![
            on_boundary("expiry_date", s.expiry_date(), policy),
            expiry_matches(
                "Symptomatic",
                ("start_date", s.start_date()),
                policy.symptomatic_expiry(s.start_date()),
                s.expiry_date(),
            ),
        ],
        Status::Checkin(c) => vec![on_boundary("checkin_date", c.checkin_date(), policy)],
        Status::Exposed(e) => vec![
            on_boundary("expiry_date", e.expiry_date(), policy),
            expiry_matches(
                "Exposed",
                ("exposure_date", e.exposure_date()),
                policy.exposure_expiry(e.exposure_date()),
                e.expiry_date(),
            ),
        ],
    };

    Validation::all_vec(checks).map(|_| ())
}

fn on_boundary(field: &'static str, value: DateTime<Utc>, policy: &IsolationPolicy) -> Check {
    let clock = policy.clock();
    if !clock.supports(value) {
        Validation::fail(InvariantViolation::OutOfRange { field, value })
    } else if clock.is_boundary(value) {
        Validation::success(())
    } else {
        Validation::fail(InvariantViolation::OffBoundary { field, value })
    }
}

// `expected` is `None` when the policy cannot derive an expiry from `input`.
fn expiry_matches(
    status: &'static str,
    input: (&'static str, DateTime<Utc>),
    expected: Option<DateTime<Utc>>,
    found: DateTime<Utc>,
) -> Check {
    match expected {
        None => Validation::fail(InvariantViolation::OutOfRange {
            field: input.0,
            value: input.1,
        }),
        Some(expected) if expected == found => Validation::success(()),
        Some(expected) => Validation::fail(InvariantViolation::ExpiryMismatch {
            status,
            expected,
            found,
        }),
    }
}
