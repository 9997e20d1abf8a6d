//! Reporting-day clock.
//!
//! A reporting day runs from 07:00 local time (inclusive) to 07:00 on the
//! following calendar day (exclusive). Every derived isolation and check-in
//! date in this crate is computed here, so the day-boundary convention lives
//! in exactly one place.
//!
//! All functions are pure: they never read the system clock. Instants outside
//! the supported calendar range (years 1900 to 9999) have no reporting day,
//! and every method returns `None` for them instead of overflowing.
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Timelike};
//! use chrono_tz::Europe::London;
//! use isolation_status::clock::ReportingClock;
//!
//! let clock = ReportingClock::default();
//!
//! // 06:00 still belongs to the previous reporting day.
//! let early = London
//!     .with_ymd_and_hms(2020, 4, 1, 6, 0, 0)
//!     .unwrap()
//!     .with_timezone(&chrono::Utc);
//! assert_eq!(clock.reporting_day(early), NaiveDate::from_ymd_opt(2020, 3, 31));
//!
//! let due = clock.plus_reporting_days(early, 1).unwrap();
//! assert_eq!(due.with_timezone(&London).hour(), 7);
//! ```

use chrono::offset::LocalResult;
use chrono::{
    DateTime, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

/// Hour of day (local time) at which a reporting day begins.
pub const DEFAULT_DAY_START_HOUR: u32 = 7;

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;

/// 1900-01-01T00:00:00Z
const EARLIEST_SUPPORTED_SECS: i64 = -2_208_988_800;
/// 9999-12-31T00:00:00Z
const LATEST_SUPPORTED_SECS: i64 = 253_402_214_400;

/// Maps timestamps onto reporting days in a fixed timezone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportingClock {
    tz: Tz,
    day_start: NaiveTime,
}

impl Default for ReportingClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl ReportingClock {
    /// Clock for `tz` with reporting days starting at 07:00.
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            day_start: NaiveTime::MIN + Duration::hours(i64::from(DEFAULT_DAY_START_HOUR)),
        }
    }

    /// Clock for `tz` with reporting days starting at `hour:00`.
    ///
    /// Returns `None` when `hour` is not a valid hour of day.
    pub fn with_day_start(tz: Tz, hour: u32) -> Option<Self> {
        let day_start = NaiveTime::from_hms_opt(hour, 0, 0)?;
        Some(Self { tz, day_start })
    }

    /// Get the timezone local boundaries are computed in
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Get the local hour a reporting day starts at
    pub fn day_start_hour(&self) -> u32 {
        self.day_start.hour()
    }

    /// Whether `t` lies inside the supported calendar range.
    pub fn supports(&self, t: DateTime<Utc>) -> bool {
        (EARLIEST_SUPPORTED_SECS..=LATEST_SUPPORTED_SECS).contains(&t.timestamp())
    }

    /// Calendar date of the reporting day containing `t`.
    ///
    /// Local times before the day-start hour belong to the previous
    /// calendar date.
    pub fn reporting_day(&self, t: DateTime<Utc>) -> Option<NaiveDate> {
        if !self.supports(t) {
            return None;
        }
        let local = t.with_timezone(&self.tz).naive_local();
        let since_midnight = Duration::seconds(i64::from(self.day_start.num_seconds_from_midnight()));
        local
            .checked_sub_signed(since_midnight)
            .map(|shifted| shifted.date())
    }

    /// The instant at which the reporting day `date` begins.
    pub fn boundary(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        let naive = date.and_time(self.day_start);
        if !self.supports(Utc.from_utc_datetime(&naive)) {
            return None;
        }
        let start = match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => self.after_gap(naive),
        };
        start.filter(|dt| self.supports(*dt))
    }

    /// `boundary(reporting_day(t) + n)`, or `None` when either end falls
    /// outside the supported range.
    pub fn plus_reporting_days(&self, t: DateTime<Utc>, n: i64) -> Option<DateTime<Utc>> {
        let day = self.reporting_day(t)?;
        let shift = Days::new(n.unsigned_abs());
        let target = if n >= 0 {
            day.checked_add_days(shift)
        } else {
            day.checked_sub_days(shift)
        }?;
        self.boundary(target)
    }

    /// Whether `t` is exactly the start of a reporting day.
    pub fn is_boundary(&self, t: DateTime<Utc>) -> bool {
        self.reporting_day(t)
            .and_then(|day| self.boundary(day))
            .is_some_and(|start| start == t)
    }

    // Local day start skipped by a DST jump: take the first instant after the gap.
    fn after_gap(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        (1..=3)
            .filter_map(|hours| naive.checked_add_signed(Duration::hours(hours)))
            .find_map(|shifted| self.tz.from_local_datetime(&shifted).earliest())
            .map(|dt| dt.with_timezone(&Utc))
    }
}
