//! Status machine that persists every transition.

use crate::checkpoint::validate_status;
use crate::core::{State, StateTransition};
use crate::error::StatusError;
use crate::machine::transition::{next_status, Operation};
use crate::status::{Advice, IsolationPolicy, Status, Symptoms};
use crate::store::StatusStore;
use chrono::{DateTime, Utc};
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

/// The current status plus the store it is persisted to.
///
/// Each operation is a read-compute-persist sequence. Operations take
/// `&mut self`, so they cannot interleave; share a machine across threads
/// behind a `Mutex`.
pub struct StatusMachine<S: StatusStore> {
    store: S,
    policy: IsolationPolicy,
    current: Status,
    last_transition: Option<StateTransition<Status>>,
}

impl<S: StatusStore> StatusMachine<S> {
    /// Reads the stored status (or starts at `Ok` when nothing is stored).
    ///
    /// A stored status whose derived dates disagree with `policy` is
    /// rejected with every violation listed.
    pub fn load(store: S, policy: IsolationPolicy) -> Result<Self, StatusError> {
        let current = match store.load().map_err(StatusError::Load)? {
            Some(status) => {
                if let Validation::Failure(errors) = validate_status(&status, &policy) {
                    let violations: Vec<_> = errors.iter().cloned().collect();
                    warn!(
                        status = status.name(),
                        violations = violations.len(),
                        "rejecting stored status"
                    );
                    return Err(StatusError::InvalidSnapshot { violations });
                }
                status
            }
            None => Status::Ok,
        };

        debug!(status = current.name(), "status machine loaded");
        Ok(Self {
            store,
            policy,
            current,
            last_transition: None,
        })
    }

    /// The status as last persisted.
    pub fn current_status(&self) -> &Status {
        &self.current
    }

    /// Window lengths and clock every operation is computed with.
    pub fn policy(&self) -> &IsolationPolicy {
        &self.policy
    }

    /// The most recent transition that changed the status.
    pub fn last_transition(&self) -> Option<&StateTransition<Status>> {
        self.last_transition.as_ref()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the machine, handing back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// What to show the user at `now`.
    pub fn advice(&self, now: DateTime<Utc>) -> Advice {
        self.current.advice(now)
    }

    /// Starts (or restarts) isolation from `start_date`.
    pub fn self_diagnose(
        &mut self,
        symptoms: Symptoms,
        start_date: DateTime<Utc>,
    ) -> Result<&Status, StatusError> {
        self.apply(Operation::SelfDiagnose {
            symptoms,
            start_date,
        })
    }

    /// Records contact with a case, unless already isolating with symptoms.
    pub fn report_exposure(&mut self, exposure_date: DateTime<Utc>) -> Result<&Status, StatusError> {
        self.apply(Operation::ReportExposure { exposure_date })
    }

    /// Expires any window that has ended by `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<&Status, StatusError> {
        self.apply(Operation::Tick { now })
    }

    /// Answers the pending check-in questionnaire.
    pub fn checkin(
        &mut self,
        symptoms: Symptoms,
        now: DateTime<Utc>,
    ) -> Result<&Status, StatusError> {
        self.apply(Operation::Checkin { symptoms, now })
    }

    /// Applies `operation`, persisting the result before adopting it.
    ///
    /// When the status is unchanged nothing is written. When the write
    /// fails, or a timestamp lies outside the supported calendar range,
    /// the in-memory status stays as it was.
    pub fn apply(&mut self, operation: Operation) -> Result<&Status, StatusError> {
        let next = match next_status(&self.current, &operation, &self.policy) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    operation = operation.name(),
                    status = self.current.name(),
                    error = %err,
                    "operation refused"
                );
                return Err(err.into());
            }
        };
        if next == self.current {
            debug!(
                operation = operation.name(),
                status = self.current.name(),
                "status unchanged"
            );
            return Ok(&self.current);
        }

        if let Err(err) = self.store.save(&next) {
            warn!(
                operation = operation.name(),
                from = self.current.name(),
                to = next.name(),
                error = %err,
                "failed to persist status; transition discarded"
            );
            return Err(StatusError::Persist(err));
        }

        let from = std::mem::replace(&mut self.current, next);
        let record = StateTransition {
            from,
            to: self.current.clone(),
            operation: operation.name().to_string(),
            timestamp: operation.timestamp(),
        };
        info!(
            operation = %record.operation,
            transition = %record.describe(),
            at = %record.timestamp,
            "status transition"
        );
        self.last_transition = Some(record);
        Ok(&self.current)
    }
}
