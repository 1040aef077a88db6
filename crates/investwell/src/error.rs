//! Error types for the InvestWell client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the InvestWell API.
#[derive(Debug, Error)]
pub enum InvestwellError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token response had no `result.token` field.
    #[error("No token in authorization response")]
    MissingToken,

    /// Reporting endpoint answered with something other than 200.
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}
