use crate::error::CoreError;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Source of the current instant, injected into services so date rules can be
/// exercised deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse an IANA timezone name
pub fn parse_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone)
        .map_err(|_| CoreError::InvalidArgument(format!("Invalid timezone: {}", timezone)))
}

/// (year, day-of-year) of `at` as seen in `tz`.
pub fn day_of_year(at: DateTime<Utc>, tz: Tz) -> (i32, u32) {
    let local = at.with_timezone(&tz);
    (local.year(), local.ordinal())
}
