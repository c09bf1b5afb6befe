//! Six-component timestamp used for date-range matching

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TimestampError;

/// A point in time broken into year, month, day, hour, minute and second.
///
/// Field order matters: the derived `Ord` compares year first and second
/// last, which is plain chronological order for well-formed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Timestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Combine a `YYYY-MM-DD` date and an `HH:MM:SS` time
    pub fn from_date_time(date: &str, time: &str) -> Result<Self, TimestampError> {
        let malformed = || TimestampError(format!("{} {}", date, time));
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| malformed())?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S").map_err(|_| malformed())?;
        Ok(Self::from(NaiveDateTime::new(date, time).and_utc()))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    /// Parse `YYYY-MM-DDTHH:MM:SS[.fff]Z`; the trailing `Z` is optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);

        // Sub-second precision is dropped by the conversion
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| Self::from(dt.and_utc()))
            .map_err(|_| TimestampError(s.to_string()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        )
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
