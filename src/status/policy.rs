//! Isolation windows and derived-date arithmetic.

use super::error::WindowError;
use crate::clock::ReportingClock;
use chrono::{DateTime, Utc};

/// Reporting days a symptomatic user isolates before the first check-in.
pub const DEFAULT_ISOLATION_DAYS: u32 = 7;

/// Reporting days an exposure notification stays active.
pub const DEFAULT_EXPOSURE_DAYS: u32 = 14;

/// Reporting days between check-ins while a temperature persists.
pub const DEFAULT_CHECKIN_INTERVAL_DAYS: u32 = 1;

/// Longest window any policy accepts.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// The clinical policy: how long each timed status lasts.
///
/// Every derived `expiry_date` and `checkin_date` is computed by one of
/// these methods, and therefore always lands on a reporting-day boundary.
/// Window lengths are always within `1..=MAX_WINDOW_DAYS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsolationPolicy {
    clock: ReportingClock,
    isolation_days: u32,
    exposure_days: u32,
    checkin_interval_days: u32,
}

impl Default for IsolationPolicy {
    fn default() -> Self {
        Self::new(ReportingClock::default())
    }
}

fn check_window(field: &'static str, days: u32) -> Result<u32, WindowError> {
    match days {
        0 => Err(WindowError::Zero(field)),
        d if d > MAX_WINDOW_DAYS => Err(WindowError::TooLong {
            field,
            max: MAX_WINDOW_DAYS,
        }),
        d => Ok(d),
    }
}

impl IsolationPolicy {
    /// Default windows (7 / 14 / 1 reporting days) on `clock`.
    pub fn new(clock: ReportingClock) -> Self {
        Self {
            clock,
            isolation_days: DEFAULT_ISOLATION_DAYS,
            exposure_days: DEFAULT_EXPOSURE_DAYS,
            checkin_interval_days: DEFAULT_CHECKIN_INTERVAL_DAYS,
        }
    }

    /// Set the symptomatic isolation window
    pub fn with_isolation_days(mut self, days: u32) -> Result<Self, WindowError> {
        self.isolation_days = check_window("isolation_days", days)?;
        Ok(self)
    }

    /// Set the exposure window
    pub fn with_exposure_days(mut self, days: u32) -> Result<Self, WindowError> {
        self.exposure_days = check_window("exposure_days", days)?;
        Ok(self)
    }

    /// Set the gap between repeated check-ins
    pub fn with_checkin_interval_days(mut self, days: u32) -> Result<Self, WindowError> {
        self.checkin_interval_days = check_window("checkin_interval_days", days)?;
        Ok(self)
    }

    /// Get the reporting clock (pure)
    pub fn clock(&self) -> &ReportingClock {
        &self.clock
    }

    /// Get the symptomatic isolation window in reporting days
    pub fn isolation_days(&self) -> u32 {
        self.isolation_days
    }

    /// Get the exposure window in reporting days
    pub fn exposure_days(&self) -> u32 {
        self.exposure_days
    }

    /// Get the gap between repeated check-ins in reporting days
    pub fn checkin_interval_days(&self) -> u32 {
        self.checkin_interval_days
    }

    /// End of isolation for symptoms starting at `start_date`.
    ///
    /// `None` when the result leaves the supported calendar range; the same
    /// holds for every date method below.
    pub fn symptomatic_expiry(&self, start_date: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.clock
            .plus_reporting_days(start_date, i64::from(self.isolation_days))
    }

    /// End of the exposure window for contact at `exposure_date`.
    pub fn exposure_expiry(&self, exposure_date: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.clock
            .plus_reporting_days(exposure_date, i64::from(self.exposure_days))
    }

    /// Next check-in after answering one at `now`.
    pub fn next_checkin(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.clock
            .plus_reporting_days(now, i64::from(self.checkin_interval_days))
    }

    /// Start of the reporting day containing `date`.
    pub fn checkin_boundary(&self, date: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.clock.plus_reporting_days(date, 0)
    }
}
