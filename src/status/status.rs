//! The status value and its variants.

use super::error::OutOfRange;
use super::policy::IsolationPolicy;
use super::symptom::{Symptom, Symptoms};
use crate::core::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user's current self-reported status.
///
/// Payload structs keep their fields private: derived dates are computed by
/// the constructors and can only be read, never set. Constructors refuse
/// inputs whose derived dates fall outside the supported calendar range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Nothing reported. Initial state.
    #[default]
    Ok,
    /// Self-diagnosed and isolating until `expiry_date`.
    Symptomatic(Symptomatic),
    /// Waiting for the user to answer a check-in.
    Checkin(Checkin),
    /// Notified of an exposure until `expiry_date`.
    Exposed(Exposed),
}

impl Status {
    /// Check for the resting state
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Check for self-diagnosed isolation
    pub fn is_symptomatic(&self) -> bool {
        matches!(self, Self::Symptomatic(_))
    }

    /// Check for a pending check-in
    pub fn is_checkin(&self) -> bool {
        matches!(self, Self::Checkin(_))
    }

    /// Check for an active exposure notification
    pub fn is_exposed(&self) -> bool {
        matches!(self, Self::Exposed(_))
    }

    /// Symptoms carried by the status, if any.
    pub fn symptoms(&self) -> Option<&Symptoms> {
        match self {
            Self::Symptomatic(s) => Some(s.symptoms()),
            Self::Checkin(c) => Some(c.symptoms()),
            Self::Ok | Self::Exposed(_) => None,
        }
    }
}

impl State for Status {
    fn name(&self) -> &str {
        match self {
            Self::Ok => "Ok",
            Self::Symptomatic(_) => "Symptomatic",
            Self::Checkin(_) => "Checkin",
            Self::Exposed(_) => "Exposed",
        }
    }
}

/// Payload of [`Status::Symptomatic`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptomatic {
    symptoms: Symptoms,
    start_date: DateTime<Utc>,
    expiry_date: DateTime<Utc>,
}

impl Symptomatic {
    /// Isolation for `symptoms` first noticed at `start_date`.
    pub fn new(
        symptoms: Symptoms,
        start_date: DateTime<Utc>,
        policy: &IsolationPolicy,
    ) -> Result<Self, OutOfRange> {
        let expiry_date = policy
            .symptomatic_expiry(start_date)
            .ok_or(OutOfRange {
                field: "start_date",
                value: start_date,
            })?;
        Ok(Self {
            symptoms,
            start_date,
            expiry_date,
        })
    }

    /// Get the self-diagnosed symptoms
    pub fn symptoms(&self) -> &Symptoms {
        &self.symptoms
    }

    /// Get when the symptoms started
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Get when isolation ends and the first check-in is due
    pub fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }
}

/// Payload of [`Status::Checkin`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkin {
    symptoms: Symptoms,
    checkin_date: DateTime<Utc>,
}

impl Checkin {
    /// Check-in due at the start of the reporting day containing `date`.
    pub fn new(
        symptoms: Symptoms,
        date: DateTime<Utc>,
        policy: &IsolationPolicy,
    ) -> Result<Self, OutOfRange> {
        let checkin_date = policy.checkin_boundary(date).ok_or(OutOfRange {
            field: "checkin_date",
            value: date,
        })?;
        Ok(Self {
            symptoms,
            checkin_date,
        })
    }

    /// First check-in after isolation: due the instant isolation expires.
    pub(crate) fn due_at_expiry(symptomatic: &Symptomatic) -> Self {
        Self {
            symptoms: symptomatic.symptoms.clone(),
            checkin_date: symptomatic.expiry_date,
        }
    }

    /// Get the symptoms reported at the last check-in
    pub fn symptoms(&self) -> &Symptoms {
        &self.symptoms
    }

    /// Get when the check-in is due
    pub fn checkin_date(&self) -> DateTime<Utc> {
        self.checkin_date
    }

    /// Whether the user last reported `symptom`.
    pub fn reported(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }
}

/// Payload of [`Status::Exposed`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposed {
    exposure_date: DateTime<Utc>,
    expiry_date: DateTime<Utc>,
}

impl Exposed {
    /// Exposure notification for contact at `exposure_date`.
    pub fn new(exposure_date: DateTime<Utc>, policy: &IsolationPolicy) -> Result<Self, OutOfRange> {
        let expiry_date = policy.exposure_expiry(exposure_date).ok_or(OutOfRange {
            field: "exposure_date",
            value: exposure_date,
        })?;
        Ok(Self {
            exposure_date,
            expiry_date,
        })
    }

    /// Get when the contact happened
    pub fn exposure_date(&self) -> DateTime<Utc> {
        self.exposure_date
    }

    /// Get when the exposure notification lapses
    pub fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symptoms;
    use chrono::TimeZone;
    use chrono_tz::Europe::London;

    fn london(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        London
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn default_status_is_ok() {
        assert_eq!(Status::default(), Status::Ok);
        assert!(Status::default().is_ok());
    }

    #[test]
    fn symptomatic_derives_expiry() {
        let policy = IsolationPolicy::default();
        let s = Symptomatic::new(symptoms![Cough], london(2020, 4, 1, 7), &policy).unwrap();
        assert_eq!(s.expiry_date(), london(2020, 4, 8, 7));
        assert_eq!(s.start_date(), london(2020, 4, 1, 7));
    }

    #[test]
    fn checkin_date_is_snapped_to_boundary() {
        let policy = IsolationPolicy::default();
        let c = Checkin::new(symptoms![Temperature], london(2020, 4, 1, 0), &policy).unwrap();
        assert_eq!(c.checkin_date(), london(2020, 3, 31, 7));
        assert!(c.reported(Symptom::Temperature));
        assert!(!c.reported(Symptom::Cough));
    }

    #[test]
    fn exposed_derives_expiry() {
        let policy = IsolationPolicy::default();
        let e = Exposed::new(london(2020, 4, 1, 6), &policy).unwrap();
        assert_eq!(e.expiry_date(), london(2020, 4, 14, 7));
    }

    #[test]
    fn names_and_predicates() {
        let policy = IsolationPolicy::default();
        let exposed = Status::Exposed(Exposed::new(london(2020, 4, 1, 6), &policy).unwrap());
        assert_eq!(exposed.name(), "Exposed");
        assert!(exposed.is_exposed());
        assert!(exposed.symptoms().is_none());
        assert!(!exposed.is_final());

        let checkin = Status::Checkin(
            Checkin::new(symptoms![Cough], london(2020, 4, 1, 7), &policy).unwrap(),
        );
        assert_eq!(checkin.name(), "Checkin");
        assert_eq!(checkin.symptoms(), Some(&symptoms![Cough]));
    }

    #[test]
    fn status_json_shape() {
        let policy = IsolationPolicy::default();
        let status = Status::Exposed(Exposed::new(london(2020, 4, 1, 8), &policy).unwrap());
        let json = serde_json::to_value(&status).unwrap();
        assert!(json.get("exposed").is_some());
        assert_eq!(serde_json::to_value(Status::Ok).unwrap(), "ok");

        let back: Status = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn constructors_refuse_dates_past_the_calendar_range() {
        let policy = IsolationPolicy::default();
        let far = DateTime::<Utc>::MAX_UTC;
        assert_eq!(
            Exposed::new(far, &policy),
            Err(OutOfRange {
                field: "exposure_date",
                value: far
            })
        );
        assert!(Symptomatic::new(symptoms![Cough], far, &policy).is_err());
        assert!(Checkin::new(symptoms![], DateTime::<Utc>::MIN_UTC, &policy).is_err());
    }
}
