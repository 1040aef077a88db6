//! Request and response types for the InvestWell API.

use std::fmt;

use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Data source selector for portfolio reports.
pub const DEFAULT_DATA_SOURCE: &str = "0";

/// Credentials posted to the authorization endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenRequest<'a> {
    pub auth_name: &'a str,
    pub password: &'a str,
}

/// Authorization endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub result: Option<TokenResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResult {
    #[serde(default)]
    pub token: Option<String>,
}

impl TokenResponse {
    /// Extract a non-empty token, if present.
    pub fn into_token(self) -> Option<AuthToken> {
        self.result
            .and_then(|r| r.token)
            .filter(|t| !t.is_empty())
            .map(AuthToken::new)
    }
}

/// Short-lived bearer token issued by the authorization endpoint.
///
/// Obtained fresh for every report; never cached.
#[derive(Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Get the raw token value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// One entry of the `filters` query parameter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    /// Valuation date, `YYYY-MM-DD`.
    pub end_date: String,
    /// Data source selector.
    pub data_source: String,
    /// Investor PAN.
    pub pan: String,
}

impl ReportFilter {
    /// Filter for a PAN's portfolio valued on `as_of`.
    pub fn portfolio(pan: impl Into<String>, as_of: NaiveDate) -> Self {
        Self {
            end_date: as_of.format("%Y-%m-%d").to_string(),
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            pan: pan.into(),
        }
    }

    /// Encode as the JSON array the API expects in `filters`.
    pub fn to_query_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&[self])
    }
}
