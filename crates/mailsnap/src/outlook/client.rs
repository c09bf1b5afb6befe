//! Outlook REST API HTTP client
//!
//! Uses synchronous HTTP (ureq) to be executor-agnostic.

use log::debug;
use serde::de::DeserializeOwned;

use super::api::{ListResponse, MailFolder, OutlookMessage, UserProfile};
use super::{MailboxSource, OutlookAuth};
use crate::error::FetchError;

/// Outlook API client for reading a mailbox
pub struct OutlookClient {
    auth: OutlookAuth,
}

impl OutlookClient {
    /// Outlook API base URL
    const BASE_URL: &'static str = "https://outlook.office.com/api/v2.0";

    /// Upper bound on a single response body; a page of 1000 HTML messages
    /// easily exceeds ureq's default
    const MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

    pub fn new(auth: OutlookAuth) -> Self {
        Self { auth }
    }

    fn messages_url(top: usize) -> String {
        format!("{}/me/messages?$top={}", Self::BASE_URL, top)
    }

    fn folders_url() -> String {
        format!("{}/me/MailFolders", Self::BASE_URL)
    }

    fn profile_url() -> String {
        format!("{}/me", Self::BASE_URL)
    }

    /// Authenticated GET returning a JSON body
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let access_token = self.auth.get_access_token()?;
        debug!("GET {}", url);

        let mut response = ureq::get(url)
            .header("Authorization", &format!("Bearer {}", access_token))
            .header("Accept", "application/json")
            .call()?;

        response
            .body_mut()
            .with_config()
            .limit(Self::MAX_BODY_BYTES)
            .read_json()
            .map_err(|e| FetchError::Decode(format!("{}: {}", url, e)))
    }
}

impl MailboxSource for OutlookClient {
    fn fetch_messages(&self, top: usize) -> Result<Vec<OutlookMessage>, FetchError> {
        let list: ListResponse<OutlookMessage> = self.get_json(&Self::messages_url(top))?;
        Ok(list.value)
    }

    fn fetch_folders(&self) -> Result<Vec<MailFolder>, FetchError> {
        let list: ListResponse<MailFolder> = self.get_json(&Self::folders_url())?;
        Ok(list.value)
    }

    fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
        self.get_json(&Self::profile_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            OutlookClient::messages_url(1000),
            "https://outlook.office.com/api/v2.0/me/messages?$top=1000"
        );
        assert!(OutlookClient::folders_url().ends_with("/me/MailFolders"));
        assert!(OutlookClient::profile_url().ends_with("/v2.0/me"));
    }

    #[test]
    fn test_parse_message_list() {
        let json = r#"{
            "@odata.context": "https://outlook.office.com/api/v2.0/$metadata#Me/Messages",
            "value": [{
                "Id": "AAMk1",
                "ParentFolderId": "inbox-id",
                "ReceivedDateTime": "2018-07-10T00:07:35Z",
                "Subject": "Hello",
                "From": {"EmailAddress": {"Name": "Alice", "Address": "alice@example.com"}},
                "ToRecipients": [{"EmailAddress": {"Name": "Bob", "Address": "bob@example.com"}}],
                "Body": {"ContentType": "HTML", "Content": "<p>Hi</p>"}
            }]
        }"#;
        let list: ListResponse<OutlookMessage> = serde_json::from_str(json).unwrap();
        assert_eq!(list.value.len(), 1);
        let msg = &list.value[0];
        assert_eq!(msg.parent_folder_id, "inbox-id");
        assert_eq!(msg.to_recipients[0].email_address.address, "bob@example.com");
        assert_eq!(msg.from.as_ref().unwrap().email_address.address, "alice@example.com");
    }

    #[test]
    fn test_parse_draft_without_sender() {
        let json = r#"{"value": [{
            "ParentFolderId": "drafts-id",
            "ReceivedDateTime": "2018-07-10T00:07:35Z",
            "Subject": ""
        }]}"#;
        let list: ListResponse<OutlookMessage> = serde_json::from_str(json).unwrap();
        assert!(list.value[0].from.is_none());
        assert!(list.value[0].to_recipients.is_empty());
    }

    #[test]
    fn test_parse_folders_and_profile() {
        let folders: ListResponse<MailFolder> = serde_json::from_str(
            r#"{"value": [{"Id": "f1", "DisplayName": "Inbox", "TotalItemCount": 3}]}"#,
        )
        .unwrap();
        assert_eq!(folders.value[0].display_name, "Inbox");

        let profile: UserProfile = serde_json::from_str(
            r#"{"Id": "u1", "DisplayName": "Sample User", "EmailAddress": "sample@foo.com"}"#,
        )
        .unwrap();
        assert_eq!(profile.email_address, "sample@foo.com");
    }
}
