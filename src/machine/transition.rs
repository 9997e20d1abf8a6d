//! Pure transition rules.
//!
//! Every function here is total over `(status, input)`: combinations with no
//! defined effect return the current status unchanged. The only refusal is a
//! timestamp whose derived dates leave the supported calendar range, reported
//! as [`OutOfRange`] instead of a status.

use crate::status::{
    Checkin, Exposed, IsolationPolicy, OutOfRange, Status, Symptom, Symptomatic, Symptoms,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An input to the status machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    SelfDiagnose {
        symptoms: Symptoms,
        start_date: DateTime<Utc>,
    },
    ReportExposure {
        exposure_date: DateTime<Utc>,
    },
    Tick {
        now: DateTime<Utc>,
    },
    Checkin {
        symptoms: Symptoms,
        now: DateTime<Utc>,
    },
}

impl Operation {
    /// Get the operation name for logs and transition records
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelfDiagnose { .. } => "self_diagnose",
            Self::ReportExposure { .. } => "report_exposure",
            Self::Tick { .. } => "tick",
            Self::Checkin { .. } => "checkin",
        }
    }

    /// The time input carried by the operation.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SelfDiagnose { start_date, .. } => *start_date,
            Self::ReportExposure { exposure_date } => *exposure_date,
            Self::Tick { now } | Self::Checkin { now, .. } => *now,
        }
    }
}

/// Computes the status that follows `current` under `operation`.
pub fn next_status(
    current: &Status,
    operation: &Operation,
    policy: &IsolationPolicy,
) -> Result<Status, OutOfRange> {
    match operation {
        Operation::SelfDiagnose {
            symptoms,
            start_date,
        } => self_diagnose(symptoms.clone(), *start_date, policy),
        Operation::ReportExposure { exposure_date } => {
            report_exposure(current, *exposure_date, policy)
        }
        Operation::Tick { now } => Ok(tick(current, *now)),
        Operation::Checkin { symptoms, now } => checkin(current, symptoms, *now, policy),
    }
}

/// Self-diagnosis overrides whatever the user was in before.
pub fn self_diagnose(
    symptoms: Symptoms,
    start_date: DateTime<Utc>,
    policy: &IsolationPolicy,
) -> Result<Status, OutOfRange> {
    Symptomatic::new(symptoms, start_date, policy).map(Status::Symptomatic)
}

/// Symptomatic and check-in statuses take precedence over an exposure.
pub fn report_exposure(
    current: &Status,
    exposure_date: DateTime<Utc>,
    policy: &IsolationPolicy,
) -> Result<Status, OutOfRange> {
    match current {
        Status::Ok | Status::Exposed(_) => {
            Exposed::new(exposure_date, policy).map(Status::Exposed)
        }
        Status::Symptomatic(_) | Status::Checkin(_) => Ok(current.clone()),
    }
}

/// Expires timed statuses whose expiry has been reached.
///
/// Only compares `now` against a fixed expiry, so a single far-future tick
/// equals any sequence of intermediate ones. Never refuses an input.
pub fn tick(current: &Status, now: DateTime<Utc>) -> Status {
    match current {
        Status::Symptomatic(s) if now >= s.expiry_date() => {
            Status::Checkin(Checkin::due_at_expiry(s))
        }
        Status::Exposed(e) if now >= e.expiry_date() => Status::Ok,
        Status::Ok | Status::Symptomatic(_) | Status::Checkin(_) | Status::Exposed(_) => {
            current.clone()
        }
    }
}

/// Answers a pending check-in.
///
/// A raised temperature reschedules the check-in with the newly reported
/// symptoms; anything else ends tracking.
pub fn checkin(
    current: &Status,
    symptoms: &Symptoms,
    now: DateTime<Utc>,
    policy: &IsolationPolicy,
) -> Result<Status, OutOfRange> {
    match current {
        Status::Checkin(_) if symptoms.contains(&Symptom::Temperature) => {
            let due = policy
                .next_checkin(now)
                .ok_or(OutOfRange { field: "now", value: now })?;
            Checkin::new(symptoms.clone(), due, policy).map(Status::Checkin)
        }
        Status::Checkin(_) => Ok(Status::Ok),
        Status::Ok | Status::Symptomatic(_) | Status::Exposed(_) => Ok(current.clone()),
    }
}
