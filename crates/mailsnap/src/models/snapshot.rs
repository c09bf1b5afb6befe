//! Snapshot of a mailbox taken at login time

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Folder, Message, Profile};

/// Most messages a snapshot fetches in one request
pub const MAX_MESSAGES: usize = 1000;

/// Immutable bundle of messages, folders and profile.
///
/// Built once per session, then handed by reference to the query functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    messages: Vec<Message>,
    folders: Vec<Folder>,
    profile: Profile,
}

impl Snapshot {
    pub fn new(messages: Vec<Message>, folders: Vec<Folder>, profile: Profile) -> Self {
        Self {
            messages,
            folders,
            profile,
        }
    }

    /// Parse a snapshot previously written with `serde_json`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse snapshot JSON")
    }

    /// Load a snapshot fixture from disk
    pub fn load(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Messages in snapshot order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timestamp;
    use std::io::Write;

    fn sample() -> Snapshot {
        let msg = Message::builder(1, "f1", Timestamp::new(2018, 7, 10, 0, 7, 35))
            .from("alice@example.com")
            .to(["bob@example.com"])
            .subject("Hi")
            .body("Hello")
            .build();
        Snapshot::new(
            vec![msg],
            vec![Folder::new("Inbox", "f1")],
            Profile::new("Bob", "bob@example.com"),
        )
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let json = r#"{
            "messages": [{
                "sequenceNumber": 1, "folderId": "f1", "timestamp": "yesterday",
                "to": [], "from": "draft", "subject": "None", "body": "None"
            }],
            "folders": [],
            "profile": {"displayName": "", "emailAddress": ""}
        }"#;
        assert!(Snapshot::from_json(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&sample()).unwrap()).unwrap();

        let loaded = Snapshot::load(file.path()).unwrap();
        assert_eq!(loaded.messages().len(), 1);
        assert_eq!(loaded.folders()[0].name, "Inbox");
        assert_eq!(loaded.profile().display_name, "Bob");
    }
}
