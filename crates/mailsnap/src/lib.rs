//! mailsnap - query a point-in-time snapshot of an Outlook mailbox
//!
//! This crate provides:
//! - Domain models (Snapshot, Message, Folder, Profile, Timestamp)
//! - Outlook login and a fetcher that builds a Snapshot
//! - A query API over the snapshot: folder resolution, recipient, sender and
//!   subject filters, body search, open-interval date ranges
//!
//! Queries are pure reads over `&Snapshot`; build once, query many times.

pub mod config;
pub mod error;
pub mod models;
pub mod outlook;
pub mod query;

pub use config::OutlookCredentials;
pub use error::{FetchError, QueryError, TimestampError};
pub use models::{
    DRAFT_SENDER, EMPTY_FIELD, Folder, FolderId, MAX_MESSAGES, Message, MessageBuilder, Profile,
    Snapshot, Timestamp,
};
pub use outlook::{Login, MailboxSource, OutlookAuth, OutlookClient, build_snapshot, fetch_snapshot};
pub use query::{
    DateRange, MessageTotal, all_messages, count_by_from, count_by_subject, count_by_to,
    count_in_folder, count_in_range, find_by_body_substring, list_by_from, list_by_subject,
    list_by_to, list_folders, list_in_folder, list_in_range, profile, resolve_folder,
    total_message_count,
};
