//! Route handlers for the report webhook.

pub mod health;
pub mod report;

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::RelayError;
use crate::state::AppState;

/// Route served by the Azure Functions custom handler.
pub const FUNCTION_ROUTE: &str = "/api/sendReport";

/// Build the router for the web-server process.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::hello))
        .route("/sendReport", post(report::send_report))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Build the router for the Azure Functions custom handler.
///
/// The function answers both methods on a single route.
pub fn function_router() -> Router<AppState> {
    Router::new()
        .route(
            FUNCTION_ROUTE,
            get(health::function_hello).post(report::send_report),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Turn a handler panic into the generic internal-error response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    RelayError::Internal(format!("handler panicked: {}", detail)).into_response()
}
