//! Error types for snapshot construction and queries

use thiserror::Error;

/// Errors raised by the query engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No folder in the snapshot has this exact display name
    #[error("Invalid folder name: {0}")]
    FolderNotFound(String),

    /// A date-range argument was missing, empty, or malformed
    #[error("Invalid date-time range: {0}")]
    InvalidDateRange(String),
}

/// Errors raised while building a snapshot from the remote mailbox
#[derive(Debug, Error)]
pub enum FetchError {
    /// Username or password missing
    #[error("Invalid login: username and password are required")]
    InvalidCredentials,

    /// The token endpoint rejected the login
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Network failure or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response payload did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A timestamp string could not be split into six integer components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed timestamp: {0:?}")]
pub struct TimestampError(pub String);
