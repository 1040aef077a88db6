//! Application state shared across handlers.

use std::sync::Arc;

use database::SubscriberStore;
use investwell::InvestwellClient;
use wati::WatiClient;

use crate::config::Config;
use crate::relay::ReportRelay;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Report relay pipeline.
    pub relay: ReportRelay,
}

impl AppState {
    /// Create new application state.
    pub fn new(relay: ReportRelay) -> Self {
        Self { relay }
    }

    /// Build the production clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let subscribers = SubscriberStore::new(config.database.clone());
        let reports = InvestwellClient::new(config.investwell.clone())?;
        let messaging = WatiClient::new(config.wati.clone())?;

        let relay = ReportRelay::new(
            Arc::new(subscribers),
            Arc::new(reports),
            Arc::new(messaging),
        );
        Ok(Self::new(relay))
    }
}
