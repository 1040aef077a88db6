//! Configuration types for the InvestWell client.

use secrecy::{ExposeSecret, SecretString};

/// Configuration for the InvestWell reporting API.
#[derive(Debug, Clone)]
pub struct InvestwellConfig {
    /// Base URL of the API (e.g., "https://api.investwell.app").
    pub base_url: String,
    /// Partner identity sent as `authName`.
    pub auth_name: String,
    /// Partner secret sent as `password`.
    password: SecretString,
}

impl InvestwellConfig {
    /// Create a new configuration. Trailing slashes on `base_url` are dropped.
    pub fn new(
        base_url: impl Into<String>,
        auth_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            auth_name: auth_name.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Get the partner secret.
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Get the authorization token endpoint URL.
    pub fn token_url(&self) -> String {
        format!("{}/auth/getAuthorizationToken", self.base_url)
    }

    /// Get the portfolio report endpoint URL.
    pub fn report_url(&self) -> String {
        format!("{}/reports/getPortfolioReport", self.base_url)
    }
}
