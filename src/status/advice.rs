//! What the user should be told or asked, given a status and the time.

use super::status::{Checkin, Status};
use super::symptom::Symptom;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a check-in question is phrased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    /// Symptom not reported last time: ask whether it is new.
    New,
    /// Symptom reported last time: ask whether it persists.
    FollowUp,
}

/// Questions to put to the user when a check-in is due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinQuestions {
    pub temperature: Question,
    pub cough: Question,
}

impl CheckinQuestions {
    /// Phrases each question by whether the symptom was reported last time.
    pub fn for_checkin(checkin: &Checkin) -> Self {
        let phrase = |symptom| {
            if checkin.reported(symptom) {
                Question::FollowUp
            } else {
                Question::New
            }
        };
        Self {
            temperature: phrase(Symptom::Temperature),
            cough: phrase(Symptom::Cough),
        }
    }
}

/// The next thing to show the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// Nothing to do.
    CarryOn,
    /// Stay at home until the given instant.
    SelfIsolate { until: DateTime<Utc> },
    /// Contact with a reported case; follow exposure guidance.
    ExposureAdvice { until: DateTime<Utc> },
    /// A check-in is due now.
    AnswerCheckin(CheckinQuestions),
}

impl Status {
    /// Advice for this status at `now`.
    ///
    /// Pure; an expired `Symptomatic` or `Exposed` still reports its own
    /// advice until a `tick` moves the machine on.
    pub fn advice(&self, now: DateTime<Utc>) -> Advice {
        match self {
            Self::Ok => Advice::CarryOn,
            Self::Symptomatic(s) => Advice::SelfIsolate {
                until: s.expiry_date(),
            },
            Self::Exposed(e) => Advice::ExposureAdvice {
                until: e.expiry_date(),
            },
            Self::Checkin(c) if now < c.checkin_date() => Advice::SelfIsolate {
                until: c.checkin_date(),
            },
            Self::Checkin(c) => Advice::AnswerCheckin(CheckinQuestions::for_checkin(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{Exposed, IsolationPolicy, Symptomatic};
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
    fn ok_carries_on() {
        assert_eq!(Status::Ok.advice(london(2020, 4, 1, 9)), Advice::CarryOn);
    }

    #[test]
    fn symptomatic_isolates_until_expiry() {
        let policy = IsolationPolicy::default();
        let symptomatic =
            Symptomatic::new(symptoms![Cough], london(2020, 4, 1, 9), &policy).unwrap();
        let status = Status::Symptomatic(symptomatic);
        assert_eq!(
            status.advice(london(2020, 4, 2, 9)),
            Advice::SelfIsolate {
                until: london(2020, 4, 8, 7)
            }
        );
    }

    #[test]
    fn exposed_gets_exposure_advice() {
        let policy = IsolationPolicy::default();
        let status = Status::Exposed(Exposed::new(london(2020, 4, 1, 8), &policy).unwrap());
        assert_eq!(
            status.advice(london(2020, 4, 2, 9)),
            Advice::ExposureAdvice {
                until: london(2020, 4, 15, 7)
            }
        );
    }

    #[test]
    fn pending_checkin_isolates_until_due() {
        let policy = IsolationPolicy::default();
        let checkin = Checkin::new(symptoms![Temperature], london(2020, 4, 2, 7), &policy).unwrap();
        let status = Status::Checkin(checkin);
        assert_eq!(
            status.advice(london(2020, 4, 1, 20)),
            Advice::SelfIsolate {
                until: london(2020, 4, 2, 7)
            }
        );
    }

    #[test]
    fn due_checkin_asks_follow_up_for_reported_symptoms() {
        let policy = IsolationPolicy::default();
        let checkin = Checkin::new(symptoms![Temperature], london(2020, 4, 2, 7), &policy).unwrap();
        let status = Status::Checkin(checkin);
        assert_eq!(
            status.advice(london(2020, 4, 2, 7)),
            Advice::AnswerCheckin(CheckinQuestions {
                temperature: Question::FollowUp,
                cough: Question::New,
            })
        );
    }
}
