//! Report relay endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{RelayError, Result};
use crate::state::AppState;

/// Body returned when the report and follow-up were both delivered.
#[derive(Debug, Serialize)]
pub struct SendReportResponse {
    pub message: String,
}

/// Inbound relay request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReportRequest {
    pub waid: String,
}

impl SendReportRequest {
    /// Parse the raw request body.
    ///
    /// The body must be a JSON object. `waid` is not validated: strings are
    /// taken as-is, numbers by their decimal text, and anything else becomes
    /// an empty ID that the lookup will not find.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RelayError::internal(format!("invalid request body: {}", e)))?;

        let object = value
            .as_object()
            .ok_or_else(|| RelayError::internal("request body is not a JSON object"))?;

        let waid = match object.get("waid") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Ok(Self { waid })
    }
}

/// Look up the subscriber and relay today's portfolio report to them.
pub async fn send_report(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SendReportResponse>> {
    let request = SendReportRequest::from_body(&body)?;
    let today = Local::now().date_naive();

    info!(waid = %request.waid, as_of = %today, "Relaying portfolio report");

    state.relay.relay(&request.waid, today).await?;

    Ok(Json(SendReportResponse {
        message: "Report and message sent successfully".to_string(),
    }))
}
