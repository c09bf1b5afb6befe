//! Folder resolution and folder listings

use super::folder_messages;
use crate::error::QueryError;
use crate::models::{Message, Snapshot};

/// Find the index of the folder with this exact display name.
///
/// The scan runs over every folder and the last match wins, so when two
/// folders share a name the later one is used. Names are compared exactly:
/// no case folding, no trimming.
pub fn resolve_folder(snapshot: &Snapshot, name: &str) -> Result<usize, QueryError> {
    snapshot
        .folders()
        .iter()
        .rposition(|folder| folder.name == name)
        .ok_or_else(|| QueryError::FolderNotFound(name.to_string()))
}

/// Number of messages in the named folder
pub fn count_in_folder(snapshot: &Snapshot, folder_name: &str) -> Result<usize, QueryError> {
    Ok(folder_messages(snapshot, folder_name)?.count())
}

/// All messages in the named folder, in snapshot order
pub fn list_in_folder<'a>(
    snapshot: &'a Snapshot,
    folder_name: &str,
) -> Result<Vec<&'a Message>, QueryError> {
    Ok(folder_messages(snapshot, folder_name)?.collect())
}
