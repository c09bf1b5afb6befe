//! Outlook mailbox integration
//!
//! This module provides:
//! - Password-grant authentication against the Microsoft login endpoint
//! - An HTTP client for the Outlook REST API
//! - Normalization of API responses into a [`Snapshot`](crate::Snapshot)

mod auth;
mod builder;
mod client;
mod normalize;

pub use auth::{Login, OutlookAuth};
pub use builder::{MailboxSource, build_snapshot, fetch_snapshot};
pub use client::OutlookClient;
pub use normalize::{body_to_text, normalize_message};

/// Outlook REST API response types
pub mod api {
    use serde::Deserialize;

    /// Collection wrapper used by list endpoints
    #[derive(Debug, Deserialize)]
    pub struct ListResponse<T> {
        pub value: Vec<T>,
    }

    /// Message as returned by `GET /me/messages`
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct OutlookMessage {
        pub parent_folder_id: String,
        pub received_date_time: String,
        #[serde(default)]
        pub to_recipients: Vec<Recipient>,
        pub from: Option<Recipient>,
        pub subject: Option<String>,
        pub body: Option<ItemBody>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Recipient {
        pub email_address: EmailAddress,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct EmailAddress {
        pub name: Option<String>,
        #[serde(default)]
        pub address: String,
    }

    /// Message body; `ContentType` is "HTML" or "Text"
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct ItemBody {
        pub content_type: Option<String>,
        #[serde(default)]
        pub content: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct MailFolder {
        pub id: String,
        pub display_name: String,
    }

    /// Signed-in user, from `GET /me`
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct UserProfile {
        #[serde(default)]
        pub display_name: String,
        #[serde(default)]
        pub email_address: String,
    }
}
