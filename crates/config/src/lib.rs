//! Configuration directory helpers for mailsnap
//!
//! Files live in `~/.config/mailsnap/` unless `MAILSNAP_CONFIG_DIR` points
//! somewhere else.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "MAILSNAP_CONFIG_DIR";

const APP_DIR: &str = "mailsnap";

/// Resolve the mailsnap config directory
pub fn config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::config_dir().map(|p| p.join(APP_DIR)),
    }
}

/// Path of a file inside the config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(filename))
}

/// Whether a file exists inside the config directory
pub fn config_exists(filename: &str) -> bool {
    config_path(filename).is_some_and(|p| p.is_file())
}

/// Load and parse a JSON file from the config directory
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T> {
    let path = config_path(filename).context("Could not determine config directory")?;
    load_json_file(&path)
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        limit: u32,
    }

    #[test]
    fn test_config_path_joins_filename() {
        if let Some(path) = config_path("sample.json") {
            assert!(path.ends_with("sample.json"));
        }
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "inbox", "limit": 25}}"#).unwrap();

        let sample: Sample = load_json_file(file.path()).unwrap();
        assert_eq!(sample.name, "inbox");
        assert_eq!(sample.limit, 25);
    }

    #[test]
    fn test_load_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json_file::<Sample>(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_json_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_json_file::<Sample>(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
