//! Stamp — the date and time strings of a single insertion event.
//!
//! Everything is rendered in UTC, whatever the local zone of the caller.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// One timestamp insertion, derived from a single instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stamp {
    /// UTC calendar date, `YYYY-MM-DD`.
    pub date: String,

    /// UTC clock time, `HH:MM:SS`. Sub-second precision is dropped.
    pub time: String,

    /// Milliseconds since the Unix epoch. Doubles as the block anchor id.
    pub epoch_millis: i64,
}

impl Stamp {
    /// Derive the stamp for `now`.
    #[must_use]
    pub fn from_instant(now: DateTime<Utc>) -> Self {
        Self {
            date: now.format(DATE_FORMAT).to_string(),
            time: now.format(TIME_FORMAT).to_string(),
            epoch_millis: now.timestamp_millis(),
        }
    }

    /// `<date> <time>`, the human-readable form shown in fragments.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.date, self.time)
    }

    /// The date immediately followed by the epoch seconds.
    ///
    /// Seconds are obtained by cutting the last three digits off the decimal
    /// millisecond value, so they are truncated, never rounded.
    #[must_use]
    pub fn header_reference(&self) -> String {
        let millis = self.epoch_millis.to_string();
        let cut = millis.len().saturating_sub(3);
        format!("{}{}", self.date, &millis[..cut])
    }

    /// The date with every `-` replaced by a space (`2024 03 05`).
    #[must_use]
    pub fn spaced_date(&self) -> String {
        self.date.replace('-', " ")
    }

    /// Rebuild the instant from `date` and `time`, to second precision.
    ///
    /// Returns `None` if either string is not in the stamp format.
    #[must_use]
    pub fn to_instant(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time).and_utc())
    }
}
