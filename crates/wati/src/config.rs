//! Configuration types for the WATI client.

use secrecy::{ExposeSecret, SecretString};

/// Configuration for a WATI tenant.
#[derive(Debug, Clone)]
pub struct WatiConfig {
    /// Tenant base URL (e.g., "https://live-server-1234.wati.io").
    pub base_url: String,
    /// Value of the `Authorization` header, including its `Bearer ` prefix.
    bearer_token: SecretString,
}

impl WatiConfig {
    /// Create a new configuration. Trailing slashes on `base_url` are dropped.
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            bearer_token: SecretString::from(bearer_token.into()),
        }
    }

    /// Get the `Authorization` header value.
    pub fn bearer_token(&self) -> &str {
        self.bearer_token.expose_secret()
    }

    /// Get the session file endpoint URL for a recipient.
    pub fn session_file_url(&self, waid: &str) -> String {
        format!("{}/api/v1/sendSessionFile/{}", self.base_url, waid)
    }

    /// Get the interactive buttons endpoint URL.
    pub fn interactive_buttons_url(&self) -> String {
        format!("{}/api/v1/sendInteractiveButtonsMessage", self.base_url)
    }
}
