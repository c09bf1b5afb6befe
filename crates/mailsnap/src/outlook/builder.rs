//! Snapshot construction from a remote mailbox

use log::{debug, info};

use super::api::{MailFolder, OutlookMessage, UserProfile};
use super::{Login, OutlookAuth, OutlookClient, normalize_message};
use crate::config::OutlookCredentials;
use crate::error::FetchError;
use crate::models::{Folder, MAX_MESSAGES, Profile, Snapshot};

/// Source of raw mailbox data
///
/// Implemented by [`OutlookClient`]; tests supply canned responses.
pub trait MailboxSource {
    /// Up to `top` messages, newest first
    fn fetch_messages(&self, top: usize) -> Result<Vec<OutlookMessage>, FetchError>;

    fn fetch_folders(&self) -> Result<Vec<MailFolder>, FetchError>;

    fn fetch_profile(&self) -> Result<UserProfile, FetchError>;
}

/// Fetch messages, folders and profile and assemble a snapshot.
///
/// The API returns messages newest first. They are walked from the end of
/// that list, and each keeps its API position plus one as its sequence
/// number. Any failure aborts the whole build.
pub fn build_snapshot(source: &dyn MailboxSource) -> Result<Snapshot, FetchError> {
    let raw = source.fetch_messages(MAX_MESSAGES)?;
    debug!("Fetched {} messages", raw.len());

    let messages = raw
        .into_iter()
        .enumerate()
        .rev()
        .map(|(i, msg)| normalize_message(msg, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let folders: Vec<Folder> = source
        .fetch_folders()?
        .into_iter()
        .map(|f| Folder::new(f.display_name, f.id))
        .collect();
    debug!("Fetched {} folders", folders.len());

    let user = source.fetch_profile()?;
    let profile = Profile::new(user.display_name, user.email_address);

    info!(
        "Built snapshot for {}: {} messages in {} folders",
        profile.email_address,
        messages.len(),
        folders.len()
    );
    Ok(Snapshot::new(messages, folders, profile))
}

/// Log in to Outlook and build a snapshot of the mailbox
pub fn fetch_snapshot(credentials: OutlookCredentials, login: Login) -> Result<Snapshot, FetchError> {
    let client = OutlookClient::new(OutlookAuth::new(credentials, login));
    build_snapshot(&client)
}
