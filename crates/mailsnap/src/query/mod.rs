//! Query API over an immutable [`Snapshot`]
//!
//! Every function here is a pure read. Folder-scoped queries resolve the
//! folder by display name first and fail with
//! [`QueryError::FolderNotFound`](crate::QueryError::FolderNotFound) before
//! looking at any message.

mod aggregate;
mod body;
mod dates;
mod fields;
mod folders;

pub use aggregate::{MessageTotal, all_messages, list_folders, profile, total_message_count};
pub use body::find_by_body_substring;
pub use dates::{DateRange, count_in_range, list_in_range};
pub use fields::{
    count_by_from, count_by_subject, count_by_to, list_by_from, list_by_subject, list_by_to,
};
pub use folders::{count_in_folder, list_in_folder, resolve_folder};

use crate::error::QueryError;
use crate::models::{Message, Snapshot};

/// Messages belonging to the named folder, in snapshot order
fn folder_messages<'a>(
    snapshot: &'a Snapshot,
    folder_name: &str,
) -> Result<impl Iterator<Item = &'a Message> + use<'a>, QueryError> {
    let index = resolve_folder(snapshot, folder_name)?;
    let folder_id = &snapshot.folders()[index].id;
    Ok(snapshot
        .messages()
        .iter()
        .filter(move |msg| &msg.folder_id == folder_id))
}

/// Comparison form for user-supplied text: trimmed and upper-cased
fn fold(s: &str) -> String {
    s.trim().to_uppercase()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Folder, Message, Profile, Snapshot, Timestamp};

    pub fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    /// Two folders named "Inbox" (the second one wins), a "Sent Items"
    /// folder and a handful of messages spread across them.
    pub fn snapshot() -> Snapshot {
        let messages = vec![
            Message::builder(5, "inbox-2", ts("2018-07-11T12:00:00Z"))
                .from("Alice@Example.com")
                .to(["sample@foo.com", "sample@foo.com"])
                .subject("Quarterly report")
                .body("Hello FASDF world")
                .build(),
            Message::builder(4, "inbox-2", ts("2018-07-10T00:07:36Z"))
                .from("bob@example.com")
                .to(["other@foo.com", "SAMPLE@foo.com "])
                .subject("  quarterly REPORT ")
                .body("nothing to see")
                .build(),
            Message::builder(3, "inbox-1", ts("2018-07-10T00:07:35Z"))
                .from("alice@example.com")
                .to(["sample@foo.com"])
                .subject("Quarterly report")
                .body("fasdf in the shadow inbox")
                .build(),
            Message::builder(2, "sent", ts("2018-07-09T08:00:00Z"))
                .from("sample@foo.com")
                .to(["alice@example.com"])
                .subject("Re: Quarterly report")
                .body("thanks")
                .build(),
            Message::builder(1, "inbox-2", ts("2018-07-12T00:08:00Z"))
                .to(["sample@foo.com"])
                .build(),
        ];
        let folders = vec![
            Folder::new("Inbox", "inbox-1"),
            Folder::new("Sent Items", "sent"),
            Folder::new("Inbox", "inbox-2"),
            Folder::new("Archive", "archive"),
        ];
        Snapshot::new(messages, folders, Profile::new("Sample User", "sample@foo.com"))
    }
}
