use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;

/// Parses "tomorrow", "next friday", "2024-03-15 08:00" and similar,
/// relative to `now`. Wall-clock input is read in `timezone`.
pub fn parse_date(date_str: &str, now: DateTime<Utc>, timezone: Tz) -> Result<DateTime<Utc>> {
    parse_date_string(date_str, now.with_timezone(&timezone), Dialect::Us)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", date_str, e))
}
