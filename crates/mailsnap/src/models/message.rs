//! Message model for a single fetched mail item

use serde::{Deserialize, Serialize};

use super::{FolderId, Timestamp};

/// Stored as `from` when a message has no sender (unsent drafts)
pub const DRAFT_SENDER: &str = "draft";

/// Stored in place of an empty subject or body
pub const EMPTY_FIELD: &str = "None";

/// A message as it appears in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// 1-based position among the fetched messages
    pub sequence_number: usize,
    /// Folder this message lives in
    pub folder_id: FolderId,
    /// When the message was received
    pub timestamp: Timestamp,
    /// Recipient addresses, in header order (duplicates kept)
    pub to: Vec<String>,
    /// Sender address, or [`DRAFT_SENDER`]
    pub from: String,
    /// Subject line, or [`EMPTY_FIELD`]
    pub subject: String,
    /// Plain-text body, or [`EMPTY_FIELD`]
    pub body: String,
}

impl Message {
    /// Create a new message builder
    pub fn builder(
        sequence_number: usize,
        folder_id: impl Into<FolderId>,
        timestamp: Timestamp,
    ) -> MessageBuilder {
        MessageBuilder::new(sequence_number, folder_id.into(), timestamp)
    }
}

/// Builder for creating Message instances
///
/// `build` applies the placeholder values for a missing sender and an empty
/// subject or body.
pub struct MessageBuilder {
    sequence_number: usize,
    folder_id: FolderId,
    timestamp: Timestamp,
    to: Vec<String>,
    from: Option<String>,
    subject: String,
    body: String,
}

impl MessageBuilder {
    fn new(sequence_number: usize, folder_id: FolderId, timestamp: Timestamp) -> Self {
        Self {
            sequence_number,
            folder_id,
            timestamp,
            to: Vec::new(),
            from: None,
            subject: String::new(),
            body: String::new(),
        }
    }

    pub fn to<I, S>(mut self, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to = to.into_iter().map(Into::into).collect();
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Message {
        Message {
            sequence_number: self.sequence_number,
            folder_id: self.folder_id,
            timestamp: self.timestamp,
            to: self.to,
            from: self.from.unwrap_or_else(|| DRAFT_SENDER.to_string()),
            subject: or_placeholder(self.subject),
            body: or_placeholder(self.body),
        }
    }
}

fn or_placeholder(value: String) -> String {
    if value.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        value
    }
}
