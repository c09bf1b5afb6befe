//! Recipient, sender and subject filters
//!
//! Values are compared after trimming and upper-casing both sides.

use super::{fold, folder_messages};
use crate::error::QueryError;
use crate::models::{Message, Snapshot};

/// Count recipient matches in a folder.
///
/// Counts once per matching `to` entry, so a message listing the same
/// address twice contributes two.
pub fn count_by_to(snapshot: &Snapshot, to: &str, folder_name: &str) -> Result<usize, QueryError> {
    Ok(list_by_to(snapshot, to, folder_name)?.len())
}

/// Messages addressed to `to`, one entry per matching recipient
pub fn list_by_to<'a>(
    snapshot: &'a Snapshot,
    to: &str,
    folder_name: &str,
) -> Result<Vec<&'a Message>, QueryError> {
    let wanted = fold(to);
    Ok(folder_messages(snapshot, folder_name)?
        .flat_map(|msg| {
            let hits = msg.to.iter().filter(|addr| fold(addr) == wanted).count();
            std::iter::repeat_n(msg, hits)
        })
        .collect())
}

pub fn count_by_from(
    snapshot: &Snapshot,
    from: &str,
    folder_name: &str,
) -> Result<usize, QueryError> {
    Ok(list_by_from(snapshot, from, folder_name)?.len())
}

/// Messages whose sender equals `from`
pub fn list_by_from<'a>(
    snapshot: &'a Snapshot,
    from: &str,
    folder_name: &str,
) -> Result<Vec<&'a Message>, QueryError> {
    filter_field(snapshot, folder_name, from, |msg| msg.from.as_str())
}

pub fn count_by_subject(
    snapshot: &Snapshot,
    subject: &str,
    folder_name: &str,
) -> Result<usize, QueryError> {
    Ok(list_by_subject(snapshot, subject, folder_name)?.len())
}

/// Messages whose whole subject equals `subject`
pub fn list_by_subject<'a>(
    snapshot: &'a Snapshot,
    subject: &str,
    folder_name: &str,
) -> Result<Vec<&'a Message>, QueryError> {
    filter_field(snapshot, folder_name, subject, |msg| msg.subject.as_str())
}

fn filter_field<'a, F>(
    snapshot: &'a Snapshot,
    folder_name: &str,
    value: &str,
    field: F,
) -> Result<Vec<&'a Message>, QueryError>
where
    F: Fn(&Message) -> &str,
{
    let wanted = fold(value);
    Ok(folder_messages(snapshot, folder_name)?
        .filter(|msg| fold(field(msg)) == wanted)
        .collect())
}
