//! Error types for the report relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::DatabaseError;
use investwell::InvestwellError;
use thiserror::Error;
use wati::WatiError;

/// Failure points of the relay pipeline.
///
/// Each variant maps to one fixed HTTP response. A failed follow-up after a
/// delivered file is still a failure of the whole request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Subscriber missing or database unreachable.
    #[error("Subscriber lookup failed: {0}")]
    Lookup(#[source] DatabaseError),

    /// InvestWell token could not be obtained.
    #[error("Token request failed: {0}")]
    Token(#[source] InvestwellError),

    /// InvestWell answered the report request with a non-200 status.
    #[error("Report request failed: {0}")]
    Report(#[source] InvestwellError),

    /// WATI rejected the session file.
    #[error("Session file rejected: {0}")]
    FileDelivery(#[source] WatiError),

    /// WATI rejected the follow-up message.
    #[error("Follow-up message rejected: {0}")]
    FollowUp(#[source] WatiError),

    /// Anything unclassified.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Build an internal error from any displayable cause.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        RelayError::Internal(err.to_string())
    }

    /// HTTP status returned to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Lookup(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::Lookup(_) => "Invalid WAID or database error".to_string(),
            RelayError::Token(_) => "Failed to obtain InvestWell token".to_string(),
            RelayError::Report(_) | RelayError::FileDelivery(_) => {
                "Failed to send PDF".to_string()
            }
            RelayError::FollowUp(err) => format!(
                "Failed to send message. Response: {}",
                err.response_body().unwrap_or_default()
            ),
            RelayError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            RelayError::Lookup(err) if err.is_not_found() => {
                tracing::warn!("{}", self);
            }
            _ => {
                tracing::error!("{}", self);
            }
        }

        let body = serde_json::json!({
            "error": self.public_message()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_bad_request() {
        let err = RelayError::Lookup(DatabaseError::NotFound {
            entity: "Subscriber",
            id: "1".to_string(),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid WAID or database error");
    }

    #[test]
    fn test_follow_up_message_includes_upstream_body() {
        let err = RelayError::FollowUp(WatiError::UnexpectedStatus {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.public_message(),
            "Failed to send message. Response: upstream down"
        );
    }

    #[test]
    fn test_report_and_file_failures_share_message() {
        let report = RelayError::Report(InvestwellError::UnexpectedStatus(StatusCode::NOT_FOUND));
        let file = RelayError::FileDelivery(WatiError::UnexpectedStatus {
            status: StatusCode::BAD_REQUEST,
            body: String::new(),
        });
        assert_eq!(report.public_message(), "Failed to send PDF");
        assert_eq!(file.public_message(), "Failed to send PDF");
    }

    #[test]
    fn test_internal_hides_detail() {
        let err = RelayError::internal("connection reset by peer");
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("connection reset by peer"));
    }
}
