//! Folder model

use serde::{Deserialize, Serialize};

/// Opaque folder key assigned by the mailbox service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderId(pub String);

impl FolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FolderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FolderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A mail folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Display name (e.g., "Inbox", "Sent Items")
    pub name: String,
    pub id: FolderId,
}

impl Folder {
    pub fn new(name: impl Into<String>, id: impl Into<FolderId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
