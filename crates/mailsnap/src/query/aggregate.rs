//! Whole-snapshot accessors

use log::warn;

use crate::models::{Folder, MAX_MESSAGES, Message, Profile, Snapshot};

/// Result of [`total_message_count`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTotal {
    /// Message count, never above [`MAX_MESSAGES`]
    pub count: usize,
    /// The snapshot hit the fetch cap, so the mailbox may hold more
    pub capped: bool,
}

pub fn list_folders(snapshot: &Snapshot) -> &[Folder] {
    snapshot.folders()
}

pub fn profile(snapshot: &Snapshot) -> &Profile {
    snapshot.profile()
}

/// Total messages in the snapshot, up to [`MAX_MESSAGES`]
pub fn total_message_count(snapshot: &Snapshot) -> MessageTotal {
    let len = snapshot.messages().len();
    if len < MAX_MESSAGES {
        return MessageTotal {
            count: len,
            capped: false,
        };
    }

    warn!("Message total is capped at {} messages", MAX_MESSAGES);
    MessageTotal {
        count: MAX_MESSAGES,
        capped: true,
    }
}

/// Every message in every folder
pub fn all_messages(snapshot: &Snapshot) -> &[Message] {
    snapshot.messages()
}
