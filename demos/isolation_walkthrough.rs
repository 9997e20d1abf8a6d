//! Isolation Walkthrough
//!
//! This example walks one user through a self-diagnosis, the end of their
//! isolation and two daily check-ins, persisting every step to a file.
//!
//! Key concepts:
//! - Explicit time inputs: nothing reads the system clock
//! - Reporting days that start at 07:00 local time
//! - Advice derived purely from the current status
//! - Checkpoints written after every transition
//!
//! Run with: cargo run --example isolation_walkthrough

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Europe::London;
use isolation_status::builder::StatusMachineBuilder;
use isolation_status::config::StatusConfig;
use isolation_status::store::FileStore;
use isolation_status::{symptoms, Advice, State, StatusMachine, StatusStore};

fn london(d: u32, h: u32) -> DateTime<Utc> {
    London
        .with_ymd_and_hms(2020, 4, d, h, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn show<S: StatusStore>(machine: &StatusMachine<S>, now: DateTime<Utc>) {
    let status = machine.current_status();
    let advice = match machine.advice(now) {
        Advice::CarryOn => "carry on as normal".to_string(),
        Advice::SelfIsolate { until } => {
            format!("stay at home until {}", until.with_timezone(&London))
        }
        Advice::ExposureAdvice { until } => {
            format!("follow exposure guidance until {}", until.with_timezone(&London))
        }
        Advice::AnswerCheckin(questions) => format!(
            "answer the check-in (temperature: {:?}, cough: {:?})",
            questions.temperature, questions.cough
        ),
    };
    println!(
        "  [{}] {:<12} -> {}",
        now.with_timezone(&London).format("%a %d %b %H:%M"),
        status.name(),
        advice
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Isolation Walkthrough ===\n");

    let dir = std::env::temp_dir().join("isolation-walkthrough");
    let path = dir.join("status.json");
    let _ = std::fs::remove_file(&path);

    let mut machine = StatusMachineBuilder::new()
        .store(FileStore::new(&path))
        .config(StatusConfig::default())
        .build()?;

    println!("1. A cough and a temperature on Wednesday morning:");
    machine.self_diagnose(symptoms![Cough, Temperature], london(1, 9))?;
    show(&machine, london(1, 9));

    println!("\n2. The app wakes up every few days:");
    for now in [london(4, 12), london(8, 6), london(8, 7)] {
        machine.tick(now)?;
        show(&machine, now);
    }

    println!("\n3. Still feverish at the first check-in:");
    machine.checkin(symptoms![Temperature], london(8, 10))?;
    show(&machine, london(8, 10));
    show(&machine, london(9, 7));

    println!("\n4. Only a cough the next day:");
    machine.checkin(symptoms![Cough], london(9, 8))?;
    show(&machine, london(9, 8));

    if let Some(transition) = machine.last_transition() {
        println!("\nLast transition: {} via {}", transition.describe(), transition.operation);
    }
    println!("Checkpoint written to {}", path.display());

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
