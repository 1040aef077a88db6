//! Web-server entry point for the report relay.

use report_webhook::config::{self, Config};
use report_webhook::{routes, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    report_webhook::init_tracing();

    let config = Config::from_env()?;
    let addr = config::server_addr()?;
    info!(addr = %addr, version = report_webhook::version(), "Starting report webhook");

    let state = AppState::from_config(&config)?;
    let app = routes::router().with_state(state);

    info!(addr = %addr, "Report webhook listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
