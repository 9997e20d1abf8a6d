//! TOML configuration for the reporting clock and isolation windows.
//!
//! Every field is optional; missing fields fall back to the defaults
//! (`Europe/London`, reporting days from 07:00, 7 / 14 / 1 day windows).
//!
//! ```toml
//! timezone = "Europe/London"
//! day_start_hour = 7
//! isolation_days = 7
//! exposure_days = 14
//! checkin_interval_days = 1
//! ```

use crate::clock::{ReportingClock, DEFAULT_DAY_START_HOUR, DEFAULT_TIMEZONE};
use crate::status::{
    IsolationPolicy, WindowError, DEFAULT_CHECKIN_INTERVAL_DAYS, DEFAULT_EXPOSURE_DAYS,
    DEFAULT_ISOLATION_DAYS,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown timezone '{name}': {reason}")]
    UnknownTimezone { name: String, reason: String },

    #[error("Day start hour {0} is not an hour of day (0-23)")]
    InvalidDayStartHour(u32),

    #[error(transparent)]
    Window(#[from] WindowError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// IANA timezone name used for local reporting-day boundaries.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,
    #[serde(default = "default_isolation_days")]
    pub isolation_days: u32,
    #[serde(default = "default_exposure_days")]
    pub exposure_days: u32,
    #[serde(default = "default_checkin_interval_days")]
    pub checkin_interval_days: u32,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}
fn default_day_start_hour() -> u32 {
    DEFAULT_DAY_START_HOUR
}
fn default_isolation_days() -> u32 {
    DEFAULT_ISOLATION_DAYS
}
fn default_exposure_days() -> u32 {
    DEFAULT_EXPOSURE_DAYS
}
fn default_checkin_interval_days() -> u32 {
    DEFAULT_CHECKIN_INTERVAL_DAYS
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            day_start_hour: default_day_start_hour(),
            isolation_days: default_isolation_days(),
            exposure_days: default_exposure_days(),
            checkin_interval_days: default_checkin_interval_days(),
        }
    }
}

impl StatusConfig {
    /// Parses a TOML document; absent keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Renders every field, defaults included.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the policy described by this config.
    ///
    /// Window lengths must lie between one reporting day and
    /// [`MAX_WINDOW_DAYS`](crate::status::MAX_WINDOW_DAYS).
    pub fn policy(&self) -> Result<IsolationPolicy, ConfigError> {
        let tz = self
            .timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::UnknownTimezone {
                name: self.timezone.clone(),
                reason: e.to_string(),
            })?;
        let clock = ReportingClock::with_day_start(tz, self.day_start_hour)
            .ok_or(ConfigError::InvalidDayStartHour(self.day_start_hour))?;

        Ok(IsolationPolicy::new(clock)
            .with_isolation_days(self.isolation_days)?
            .with_exposure_days(self.exposure_days)?
            .with_checkin_interval_days(self.checkin_interval_days)?)
    }
}
