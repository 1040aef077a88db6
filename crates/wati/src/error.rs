//! Error types for the WATI client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when sending through WATI.
#[derive(Debug, Error)]
pub enum WatiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// WATI answered with something other than 200.
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

impl WatiError {
    /// Upstream response body, if WATI answered at all.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            WatiError::UnexpectedStatus { body, .. } => Some(body),
            WatiError::Http(_) => None,
        }
    }
}
