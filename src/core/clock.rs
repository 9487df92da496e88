//! Sources for the current calendar year.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, LocalResult, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

pub trait Clock {
    fn current_year(&self) -> AppResult<i32>;
}

/// Reads the operating system clock and converts it to the local date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    fn local_now(&self) -> AppResult<DateTime<Local>> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::ClockUnavailable(format!("system time before epoch: {e}")))?;

        let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| {
            AppError::ClockUnavailable("system time out of range".to_string())
        })?;

        match Local.timestamp_opt(secs, since_epoch.subsec_nanos()) {
            LocalResult::Single(dt) => Ok(dt),
            // a repeated local hour still has a well-defined year
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => Err(AppError::ClockUnavailable(format!(
                "timestamp {secs} has no local representation"
            ))),
        }
    }
}

impl Clock for SystemClock {
    fn current_year(&self) -> AppResult<i32> {
        let now = self.local_now()?;
        tracing::debug!(now = %now, "read system clock");
        Ok(now.year())
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> AppResult<i32> {
        Ok(self.0)
    }
}

/// A clock that can never be read.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClock;

impl Clock for UnavailableClock {
    fn current_year(&self) -> AppResult<i32> {
        Err(AppError::ClockUnavailable(
            "system clock is unavailable".to_string(),
        ))
    }
}
