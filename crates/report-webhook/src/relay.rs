//! The report relay pipeline and the collaborator traits it runs against.
//!
//! A relay is a fixed chain of awaited steps: look up the subscriber, get a
//! token, fetch the report, upload it, send the follow-up. The first failing
//! step ends the request; nothing is retried or rolled back.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::NaiveDate;
use database::{Subscriber, SubscriberStore};
use investwell::{AuthToken, InvestwellClient, InvestwellError};
use tracing::info;
use wati::{InteractiveButtonsMessage, WatiClient, WatiError};

use crate::error::{RelayError, Result};
use crate::message::{report_filename, report_ready_message, FALLBACK_NAME};

/// Source of subscriber records.
#[async_trait]
pub trait SubscriberDirectory: Send + Sync {
    /// Find the subscriber registered under a WhatsApp ID.
    async fn find_by_waid(&self, waid: &str) -> database::Result<Subscriber>;
}

/// Source of portfolio reports.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Get a fresh token. Called once per relay.
    async fn obtain_token(&self) -> std::result::Result<AuthToken, InvestwellError>;

    /// Download the report PDF for a PAN.
    async fn fetch_report(
        &self,
        token: &AuthToken,
        pan: &str,
        as_of: NaiveDate,
    ) -> std::result::Result<Bytes, InvestwellError>;
}

/// Outbound WhatsApp transport.
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Upload a document into the recipient's session.
    async fn send_session_file(
        &self,
        waid: &str,
        filename: &str,
        document: Bytes,
    ) -> std::result::Result<(), WatiError>;

    /// Send an interactive buttons message.
    async fn send_interactive_buttons(
        &self,
        waid: &str,
        message: &InteractiveButtonsMessage,
    ) -> std::result::Result<(), WatiError>;
}

#[async_trait]
impl SubscriberDirectory for SubscriberStore {
    async fn find_by_waid(&self, waid: &str) -> database::Result<Subscriber> {
        SubscriberStore::find_by_waid(self, waid).await
    }
}

#[async_trait]
impl ReportService for InvestwellClient {
    async fn obtain_token(&self) -> std::result::Result<AuthToken, InvestwellError> {
        InvestwellClient::obtain_token(self).await
    }

    async fn fetch_report(
        &self,
        token: &AuthToken,
        pan: &str,
        as_of: NaiveDate,
    ) -> std::result::Result<Bytes, InvestwellError> {
        InvestwellClient::fetch_report(self, token, pan, as_of).await
    }
}

#[async_trait]
impl MessagingService for WatiClient {
    async fn send_session_file(
        &self,
        waid: &str,
        filename: &str,
        document: Bytes,
    ) -> std::result::Result<(), WatiError> {
        WatiClient::send_session_file(self, waid, filename, document).await
    }

    async fn send_interactive_buttons(
        &self,
        waid: &str,
        message: &InteractiveButtonsMessage,
    ) -> std::result::Result<(), WatiError> {
        WatiClient::send_interactive_buttons(self, waid, message).await
    }
}

/// What a successful relay delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Recipient WhatsApp ID.
    pub waid: String,
    /// Filename the report was sent under.
    pub filename: String,
    /// Report size in bytes.
    pub size: usize,
}

/// Relays a subscriber's portfolio report to WhatsApp.
#[derive(Clone)]
pub struct ReportRelay {
    subscribers: Arc<dyn SubscriberDirectory>,
    reports: Arc<dyn ReportService>,
    messaging: Arc<dyn MessagingService>,
}

impl ReportRelay {
    /// Create a relay over the given collaborators.
    pub fn new(
        subscribers: Arc<dyn SubscriberDirectory>,
        reports: Arc<dyn ReportService>,
        messaging: Arc<dyn MessagingService>,
    ) -> Self {
        Self {
            subscribers,
            reports,
            messaging,
        }
    }

    /// Run the full relay for `waid`, valuing the portfolio as of `as_of`.
    pub async fn relay(&self, waid: &str, as_of: NaiveDate) -> Result<Delivery> {
        let subscriber = self
            .subscribers
            .find_by_waid(waid)
            .await
            .map_err(RelayError::Lookup)?;

        let token = self
            .reports
            .obtain_token()
            .await
            .map_err(RelayError::Token)?;

        let document = self
            .reports
            .fetch_report(&token, &subscriber.pan, as_of)
            .await
            .map_err(|e| match e {
                InvestwellError::UnexpectedStatus(_) => RelayError::Report(e),
                other => RelayError::internal(other),
            })?;

        let filename = report_filename(&subscriber.pan, waid);
        let size = document.len();

        self.messaging
            .send_session_file(waid, &filename, document)
            .await
            .map_err(delivery_error(RelayError::FileDelivery))?;

        let message = report_ready_message(subscriber.name_or(FALLBACK_NAME), as_of);
        self.messaging
            .send_interactive_buttons(waid, &message)
            .await
            .map_err(delivery_error(RelayError::FollowUp))?;

        info!(waid = %waid, filename = %filename, bytes = size, "Report and message sent");

        Ok(Delivery {
            waid: waid.to_string(),
            filename,
            size,
        })
    }
}

impl std::fmt::Debug for ReportRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportRelay").finish_non_exhaustive()
    }
}

/// Rejections become `rejected`; transport failures are unclassified.
fn delivery_error(rejected: fn(WatiError) -> RelayError) -> impl Fn(WatiError) -> RelayError {
    move |e| match e {
        WatiError::UnexpectedStatus { .. } => rejected(e),
        WatiError::Http(_) => RelayError::internal(e),
    }
}
