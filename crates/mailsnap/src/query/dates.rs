//! Date-range matching
//!
//! A range is open on both ends: a message received exactly at the start or
//! exactly at the finish is not in the range.

use super::folder_messages;
use crate::error::QueryError;
use crate::models::{Message, Snapshot, Timestamp};

/// Open interval between two timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Timestamp,
    pub finish: Timestamp,
}

impl DateRange {
    pub fn new(start: Timestamp, finish: Timestamp) -> Self {
        Self { start, finish }
    }

    /// Build a range from `YYYY-MM-DD` dates and `HH:MM:SS` times.
    ///
    /// Every argument is required; an empty or unparseable one yields
    /// [`QueryError::InvalidDateRange`].
    pub fn parse(
        start_date: &str,
        start_time: &str,
        finish_date: &str,
        finish_time: &str,
    ) -> Result<Self, QueryError> {
        let args = [
            ("start date", start_date),
            ("start time", start_time),
            ("finish date", finish_date),
            ("finish time", finish_time),
        ];
        if let Some((label, _)) = args.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(QueryError::InvalidDateRange(format!("missing {}", label)));
        }

        let start = Timestamp::from_date_time(start_date, start_time)
            .map_err(|e| QueryError::InvalidDateRange(e.to_string()))?;
        let finish = Timestamp::from_date_time(finish_date, finish_time)
            .map_err(|e| QueryError::InvalidDateRange(e.to_string()))?;

        Ok(Self::new(start, finish))
    }

    /// Whether `t` lies strictly between start and finish
    pub fn contains(&self, t: &Timestamp) -> bool {
        self.start < *t && *t < self.finish
    }
}

/// Number of messages in the folder received strictly inside the range
pub fn count_in_range(
    snapshot: &Snapshot,
    start_date: &str,
    start_time: &str,
    finish_date: &str,
    finish_time: &str,
    folder_name: &str,
) -> Result<usize, QueryError> {
    Ok(list_in_range(
        snapshot,
        start_date,
        start_time,
        finish_date,
        finish_time,
        folder_name,
    )?
    .len())
}

/// Messages in the folder received strictly inside the range, in snapshot
/// order
pub fn list_in_range<'a>(
    snapshot: &'a Snapshot,
    start_date: &str,
    start_time: &str,
    finish_date: &str,
    finish_time: &str,
    folder_name: &str,
) -> Result<Vec<&'a Message>, QueryError> {
    // Arguments are checked before the folder is looked up
    let range = DateRange::parse(start_date, start_time, finish_date, finish_time)?;
    Ok(folder_messages(snapshot, folder_name)?
        .filter(|msg| range.contains(&msg.timestamp))
        .collect())
}
