//! Outlook OAuth2 authentication
//!
//! Exchanges a username and password for an access token using the
//! resource-owner password grant. The token lives in memory for the
//! lifetime of the [`OutlookAuth`] value and is never written to disk.
//! Uses synchronous HTTP (ureq) to be executor-agnostic.

use log::debug;
use serde::Deserialize;
use std::sync::Mutex;

use crate::config::OutlookCredentials;
use crate::error::FetchError;

/// Mailbox login supplied by the user
#[derive(Clone)]
pub struct Login {
    username: String,
    password: String,
}

impl Login {
    /// Both fields are required
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, FetchError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(FetchError::InvalidCredentials);
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token endpoint reply; failures carry `error` instead of a token
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Access-token provider for the Outlook API
pub struct OutlookAuth {
    credentials: OutlookCredentials,
    login: Login,
    access_token: Mutex<Option<String>>,
}

impl OutlookAuth {
    const TOKEN_URL: &'static str = "https://login.windows.net/common/oauth2/token";
    const RESOURCE: &'static str = "https://graph.microsoft.com/";

    pub fn new(credentials: OutlookCredentials, login: Login) -> Self {
        Self {
            credentials,
            login,
            access_token: Mutex::new(None),
        }
    }

    /// Return the session token, logging in on first use
    pub fn get_access_token(&self) -> Result<String, FetchError> {
        let mut cached = self
            .access_token
            .lock()
            .map_err(|_| FetchError::Authentication("token cache poisoned".to_string()))?;
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let token = self.password_grant()?;
        *cached = Some(token.clone());
        Ok(token)
    }

    fn password_grant(&self) -> Result<String, FetchError> {
        debug!("Requesting access token for {}", self.login.username());

        let response = ureq::post(Self::TOKEN_URL).send_form(self.token_form());
        let mut response = match response {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(code @ (400 | 401 | 403))) => {
                return Err(FetchError::Authentication(format!(
                    "token endpoint rejected login (HTTP {})",
                    code
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let token: TokenResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| FetchError::Decode(format!("token response: {}", e)))?;

        Self::access_token_from(token)
    }

    fn access_token_from(token: TokenResponse) -> Result<String, FetchError> {
        if let Some(error) = token.error {
            let detail = token.error_description.unwrap_or_default();
            return Err(FetchError::Authentication(format!("{}: {}", error, detail)));
        }
        token
            .access_token
            .ok_or_else(|| FetchError::Decode("token response has no access_token".to_string()))
    }

    fn token_form(&self) -> [(&str, &str); 7] {
        [
            ("resource", Self::RESOURCE),
            ("grant_type", "password"),
            ("username", self.login.username.as_str()),
            ("password", self.login.password.as_str()),
            ("scope", "openid"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> OutlookAuth {
        let credentials = OutlookCredentials {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
        };
        OutlookAuth::new(credentials, Login::new("user@example.com", "hunter2").unwrap())
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(matches!(Login::new("", "pw"), Err(FetchError::InvalidCredentials)));
        assert!(matches!(Login::new("user", ""), Err(FetchError::InvalidCredentials)));
        assert!(Login::new("user", "pw").is_ok());
    }

    #[test]
    fn test_login_debug_hides_password() {
        let login = Login::new("user@example.com", "hunter2").unwrap();
        let printed = format!("{:?}", login);
        assert!(printed.contains("user@example.com"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_token_form_uses_password_grant() {
        let auth = auth();
        let form = auth.token_form();
        assert!(form.contains(&("grant_type", "password")));
        assert!(form.contains(&("username", "user@example.com")));
        assert!(form.contains(&("client_id", "client-id")));
        assert!(form.contains(&("resource", "https://graph.microsoft.com/")));
    }

    #[test]
    fn test_access_token_from_error_reply() {
        let reply: TokenResponse = serde_json::from_str(
            r#"{"error": "invalid_grant", "error_description": "AADSTS50126: bad password"}"#,
        )
        .unwrap();
        let err = OutlookAuth::access_token_from(reply).unwrap_err();
        assert!(matches!(err, FetchError::Authentication(ref msg) if msg.contains("invalid_grant")));
    }

    #[test]
    fn test_access_token_from_success_reply() {
        let reply: TokenResponse =
            serde_json::from_str(r#"{"token_type": "Bearer", "access_token": "abc"}"#).unwrap();
        assert_eq!(OutlookAuth::access_token_from(reply).unwrap(), "abc");
    }

    #[test]
    fn test_cached_token_is_reused() {
        let auth = auth();
        *auth.access_token.lock().unwrap() = Some("cached".to_string());
        assert_eq!(auth.get_access_token().unwrap(), "cached");
    }
}
