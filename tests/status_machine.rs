//! End-to-end scenarios driving a `StatusMachine` through its stores.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::London;
use isolation_status::builder::StatusMachineBuilder;
use isolation_status::config::StatusConfig;
use isolation_status::status::{Advice, Checkin, Exposed, Question, Symptomatic};
use isolation_status::store::{FileStore, MemoryStore, StoreError};
use isolation_status::{symptoms, IsolationPolicy, Status, StatusError, StatusMachine, StatusStore};

fn london(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    London
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

fn fresh_machine() -> StatusMachine<MemoryStore> {
    StatusMachine::load(MemoryStore::new(), IsolationPolicy::default()).unwrap()
}

/// Store that refuses every write.
struct ReadOnlyStore {
    status: Option<Status>,
}

impl StatusStore for ReadOnlyStore {
    fn load(&self) -> Result<Option<Status>, StoreError> {
        Ok(self.status.clone())
    }

    fn save(&mut self, _status: &Status) -> Result<(), StoreError> {
        Err(StoreError::Backend("storage is read-only".to_string()))
    }
}

#[test]
fn symptomatic_user_checks_in_after_a_week() {
    let mut machine = fresh_machine();
    let start = london(2020, 4, 1, 9, 0);

    machine.self_diagnose(symptoms![Cough, Temperature], start).unwrap();
    assert_eq!(
        machine.advice(london(2020, 4, 3, 12, 0)),
        Advice::SelfIsolate {
            until: london(2020, 4, 8, 7, 0)
        }
    );

    machine.tick(london(2020, 4, 8, 6, 59)).unwrap();
    assert!(machine.current_status().is_symptomatic());

    machine.tick(london(2020, 4, 8, 7, 0)).unwrap();
    let Status::Checkin(checkin) = machine.current_status() else {
        panic!("expected Checkin, got {:?}", machine.current_status());
    };
    assert_eq!(checkin.checkin_date(), london(2020, 4, 8, 7, 0));
    assert_eq!(
        machine.advice(london(2020, 4, 8, 7, 0)),
        Advice::AnswerCheckin(isolation_status::status::CheckinQuestions {
            temperature: Question::FollowUp,
            cough: Question::FollowUp,
        })
    );

    // Still feverish: ask again tomorrow.
    machine
        .checkin(symptoms![Temperature], london(2020, 4, 8, 10, 0))
        .unwrap();
    let rescheduled =
        Checkin::new(symptoms![Temperature], london(2020, 4, 9, 7, 0), machine.policy()).unwrap();
    assert_eq!(machine.current_status(), &Status::Checkin(rescheduled));

    machine
        .checkin(symptoms![Cough], london(2020, 4, 9, 8, 0))
        .unwrap();
    assert_eq!(machine.current_status(), &Status::Ok);
    assert_eq!(machine.store().save_count(), 4);
}

#[test]
fn exposure_expires_after_fourteen_reporting_days() {
    let mut machine = fresh_machine();
    machine.report_exposure(london(2020, 4, 1, 8, 0)).unwrap();

    machine.tick(london(2020, 4, 15, 6, 59)).unwrap();
    assert!(machine.current_status().is_exposed());

    machine.tick(london(2020, 4, 15, 7, 0)).unwrap();
    assert_eq!(machine.current_status(), &Status::Ok);
    assert_eq!(machine.last_transition().unwrap().describe(), "Exposed -> Ok");
}

#[test]
fn exposure_during_isolation_is_ignored() {
    let mut machine = fresh_machine();
    machine
        .self_diagnose(symptoms![Cough], london(2020, 4, 1, 9, 0))
        .unwrap();
    let before = machine.current_status().clone();

    machine.report_exposure(london(2020, 4, 2, 9, 0)).unwrap();
    assert_eq!(machine.current_status(), &before);
    assert_eq!(machine.store().save_count(), 1);
}

#[test]
fn self_diagnosis_replaces_exposure() {
    let mut machine = fresh_machine();
    machine.report_exposure(london(2020, 4, 1, 8, 0)).unwrap();
    machine
        .self_diagnose(symptoms![Temperature], london(2020, 4, 3, 8, 0))
        .unwrap();

    let Status::Symptomatic(s) = machine.current_status() else {
        panic!("expected Symptomatic, got {:?}", machine.current_status());
    };
    assert_eq!(s.expiry_date(), london(2020, 4, 10, 7, 0));
}

#[test]
fn failed_save_leaves_status_unchanged() {
    let policy = IsolationPolicy::default();
    let exposed = Status::Exposed(Exposed::new(london(2020, 4, 1, 8, 0), &policy).unwrap());
    let store = ReadOnlyStore {
        status: Some(exposed.clone()),
    };
    let mut machine = StatusMachine::load(store, policy).unwrap();

    let result = machine.self_diagnose(symptoms![Cough], london(2020, 4, 2, 9, 0));
    assert!(matches!(result, Err(StatusError::Persist(StoreError::Backend(_)))));
    assert_eq!(machine.current_status(), &exposed);
    assert!(machine.last_transition().is_none());

    // No-op operations never reach the store, so they still succeed.
    assert!(machine.tick(london(2020, 4, 2, 9, 0)).is_ok());
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("status.json");
    let start = london(2020, 4, 1, 9, 0);

    {
        let mut machine =
            StatusMachine::load(FileStore::new(&path), IsolationPolicy::default()).unwrap();
        machine.self_diagnose(symptoms![Cough], start).unwrap();
    }

    let machine = StatusMachine::load(FileStore::new(&path), IsolationPolicy::default()).unwrap();
    let expected = Symptomatic::new(symptoms![Cough], start, &IsolationPolicy::default()).unwrap();
    assert_eq!(machine.current_status(), &Status::Symptomatic(expected));
}

#[test]
fn tampered_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(
        &path,
        r#"{
            "version": 1,
            "id": "5a0c1a0e-6a43-4bb5-8d4c-2b0b3e9b9a11",
            "saved_at": "2020-04-01T09:00:00Z",
            "status": {"exposed": {
                "exposure_date": "2020-04-01T07:00:00Z",
                "expiry_date": "2020-04-02T09:30:00Z"
            }}
        }"#,
    )
    .unwrap();

    let result = StatusMachine::load(FileStore::new(&path), IsolationPolicy::default());
    match result {
        Err(StatusError::InvalidSnapshot { violations }) => assert_eq!(violations.len(), 2),
        Err(other) => panic!("expected InvalidSnapshot, got {other}"),
        Ok(_) => panic!("expected InvalidSnapshot, got a machine"),
    }
}

#[test]
fn snapshot_from_a_different_policy_is_rejected() {
    let long = IsolationPolicy::default().with_exposure_days(21).unwrap();
    let stored = Status::Exposed(Exposed::new(london(2020, 4, 1, 8, 0), &long).unwrap());

    let result = StatusMachine::load(MemoryStore::with_status(stored), IsolationPolicy::default());
    assert!(matches!(result, Err(StatusError::InvalidSnapshot { .. })));
}

#[test]
fn configured_machine_uses_custom_windows() {
    let config = StatusConfig::from_toml_str(
        r#"
        timezone = "Europe/London"
        exposure_days = 10
        "#,
    )
    .unwrap();
    let mut machine = StatusMachineBuilder::new()
        .store(MemoryStore::new())
        .config(config)
        .build()
        .unwrap();

    machine.report_exposure(london(2020, 4, 1, 8, 0)).unwrap();
    let Status::Exposed(e) = machine.current_status() else {
        panic!("expected Exposed, got {:?}", machine.current_status());
    };
    assert_eq!(e.expiry_date(), london(2020, 4, 11, 7, 0));
}

#[test]
fn boxed_store_drives_machine() {
    let store: Box<dyn StatusStore> = Box::new(MemoryStore::new());
    let mut machine = StatusMachine::load(store, IsolationPolicy::default()).unwrap();
    machine.report_exposure(london(2020, 4, 1, 8, 0)).unwrap();
    assert!(machine.current_status().is_exposed());
}

#[test]
fn far_range_timestamps_are_refused_and_nothing_is_stored() {
    let mut machine = fresh_machine();
    machine
        .self_diagnose(symptoms![Cough], london(2020, 4, 1, 9, 0))
        .unwrap();
    machine.tick(london(2020, 4, 8, 7, 0)).unwrap();
    let before = machine.current_status().clone();

    let far = "+262142-12-31T23:59:59Z".parse::<DateTime<Utc>>().unwrap();
    let result = machine.checkin(symptoms![Temperature], far);
    assert!(matches!(result, Err(StatusError::OutOfRange(_))));
    assert_eq!(machine.current_status(), &before);
    assert_eq!(machine.store().save_count(), 2);

    let result = machine.self_diagnose(symptoms![Cough], DateTime::<Utc>::MIN_UTC);
    assert!(matches!(result, Err(StatusError::OutOfRange(_))));
    assert_eq!(machine.current_status(), &before);
}

#[test]
fn snapshot_past_the_calendar_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(
        &path,
        r#"{
            "version": 1,
            "id": "5a0c1a0e-6a43-4bb5-8d4c-2b0b3e9b9a11",
            "saved_at": "2020-04-01T09:00:00Z",
            "status": {"exposed": {
                "exposure_date": "+262142-12-31T23:59:59Z",
                "expiry_date": "+262143-01-14T07:00:00Z"
            }}
        }"#,
    )
    .unwrap();

    let result = StatusMachine::load(FileStore::new(&path), IsolationPolicy::default());
    assert!(matches!(result, Err(StatusError::InvalidSnapshot { .. })));
}
