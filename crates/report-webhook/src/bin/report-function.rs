//! Azure Functions custom handler for the report relay.
//!
//! The Functions host starts this binary, passes the port to listen on in
//! `FUNCTIONS_CUSTOMHANDLER_PORT`, and forwards HTTP trigger requests for the
//! `sendReport` function to `/api/sendReport`.

use report_webhook::config::{self, Config};
use report_webhook::{routes, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    report_webhook::init_tracing();

    let config = Config::from_env()?;
    let addr = config::function_addr()?;

    let state = AppState::from_config(&config)?;
    let app = routes::function_router().with_state(state);

    info!(addr = %addr, route = routes::FUNCTION_ROUTE, "Function handler listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
