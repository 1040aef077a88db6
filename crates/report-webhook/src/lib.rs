//! Portfolio report relay webhook.
//!
//! Given a WhatsApp ID, looks up the subscriber's PAN in MySQL, pulls a
//! portfolio valuation PDF from InvestWell and delivers it over WATI followed
//! by an interactive message. Served two ways from the same handler:
//!
//! - `report-webhook`: a plain web server (`GET /`, `POST /sendReport`)
//! - `report-function`: an Azure Functions custom handler (`/api/sendReport`)

pub mod config;
pub mod error;
pub mod message;
pub mod relay;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError};
pub use error::RelayError;
pub use relay::{Delivery, MessagingService, ReportRelay, ReportService, SubscriberDirectory};
pub use state::AppState;

/// Install the global tracing subscriber (`RUST_LOG`, default `info`) and
/// the panic hook.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    install_panic_hook();
}

/// Log panics with their location and a backtrace.
///
/// The catch-panic layer only sees the payload once the stack has unwound,
/// so the trace has to be taken here.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(log_panic));
}

fn log_panic(info: &std::panic::PanicHookInfo<'_>) {
    let backtrace = std::backtrace::Backtrace::force_capture();
    tracing::error!(panic = %info, backtrace = %backtrace, "Panic");
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
