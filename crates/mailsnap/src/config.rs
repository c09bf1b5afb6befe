//! Application credentials for the Outlook API
//!
//! The client id and secret identify this application to the Microsoft
//! login endpoint. They are loaded from (in order of priority):
//! 1. Compile-time embedded values (for release builds)
//! 2. `outlook-credentials.json` in the mailsnap config directory
//! 3. Runtime environment variables

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Credentials filename in the mailsnap config directory
const CREDENTIALS_FILE: &str = "outlook-credentials.json";

const CLIENT_ID_ENV: &str = "OUTLOOK_CLIENT_ID";
const CLIENT_SECRET_ENV: &str = "OUTLOOK_CLIENT_SECRET";

/// OAuth client registration for Outlook API access
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutlookCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl OutlookCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Load credentials from the first available source
    pub fn load() -> Result<Self> {
        if let Some(creds) = Self::from_compile_time() {
            return Ok(creds);
        }

        if config::config_exists(CREDENTIALS_FILE) {
            let creds: Self = config::load_json(CREDENTIALS_FILE)?;
            return creds.validated();
        }

        Self::from_env()
    }

    /// Credentials embedded at build time.
    /// Build with: OUTLOOK_CLIENT_ID=xxx OUTLOOK_CLIENT_SECRET=yyy cargo build --release
    pub fn from_compile_time() -> Option<Self> {
        let client_id = option_env!("OUTLOOK_CLIENT_ID")?;
        let client_secret = option_env!("OUTLOOK_CLIENT_SECRET")?;

        if client_id.is_empty() || client_secret.is_empty() {
            return None;
        }

        Some(Self::new(client_id, client_secret))
    }

    /// Load credentials from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let creds: Self = config::load_json_file(path)?;
        creds.validated()
    }

    /// Parse `{"client_id": "...", "client_secret": "..."}`
    pub fn from_json(json: &str) -> Result<Self> {
        let creds: Self = serde_json::from_str(json).context("Failed to parse credentials JSON")?;
        creds.validated()
    }

    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(CLIENT_ID_ENV)
            .with_context(|| format!("{} environment variable not set", CLIENT_ID_ENV))?;
        let client_secret = std::env::var(CLIENT_SECRET_ENV)
            .with_context(|| format!("{} environment variable not set", CLIENT_SECRET_ENV))?;

        Self::new(client_id, client_secret).validated()
    }

    /// Default credentials file path (~/.config/mailsnap/outlook-credentials.json)
    pub fn default_credentials_path() -> Option<PathBuf> {
        config::config_path(CREDENTIALS_FILE)
    }

    fn validated(self) -> Result<Self> {
        anyhow::ensure!(!self.client_id.trim().is_empty(), "client_id is empty");
        anyhow::ensure!(!self.client_secret.trim().is_empty(), "client_secret is empty");
        Ok(self)
    }
}
