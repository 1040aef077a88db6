//! WATI HTTP client.

use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error, info};

use crate::config::WatiConfig;
use crate::error::WatiError;
use crate::types::{InteractiveButtonsMessage, PDF_MIME};

/// Client for sending WhatsApp session messages through WATI.
#[derive(Clone)]
pub struct WatiClient {
    http: Client,
    config: WatiConfig,
}

impl WatiClient {
    /// Create a new client.
    pub fn new(config: WatiConfig) -> Result<Self, WatiError> {
        let http = Client::builder().build().map_err(WatiError::Http)?;
        Ok(Self { http, config })
    }

    /// Upload a PDF to a recipient's open session.
    ///
    /// # Arguments
    /// * `waid` - WhatsApp ID of the recipient
    /// * `filename` - Name shown to the recipient
    /// * `document` - PDF content
    pub async fn send_session_file(
        &self,
        waid: &str,
        filename: &str,
        document: Bytes,
    ) -> Result<(), WatiError> {
        let url = self.config.session_file_url(waid);
        let size = document.len();

        let part = Part::bytes(document.to_vec())
            .file_name(filename.to_string())
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        debug!(waid = %waid, filename = %filename, bytes = size, "Uploading session file");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.config.bearer_token())
            .multipart(form)
            .send()
            .await
            .map_err(WatiError::Http)?;

        Self::expect_ok(response).await.inspect_err(|e| {
            error!(waid = %waid, error = %e, "Failed to send session file");
        })?;

        info!(waid = %waid, filename = %filename, "Session file sent");
        Ok(())
    }

    /// Send an interactive buttons message to a recipient.
    pub async fn send_interactive_buttons(
        &self,
        waid: &str,
        message: &InteractiveButtonsMessage,
    ) -> Result<(), WatiError> {
        let url = self.config.interactive_buttons_url();

        debug!(waid = %waid, "Sending interactive buttons message");

        let response = self
            .http
            .post(&url)
            .query(&[("whatsappNumber", waid)])
            .header(AUTHORIZATION, self.config.bearer_token())
            .json(message)
            .send()
            .await
            .map_err(WatiError::Http)?;

        Self::expect_ok(response).await.inspect_err(|e| {
            error!(waid = %waid, error = %e, "Failed to send follow-up message");
        })?;

        info!(waid = %waid, "Interactive buttons message sent");
        Ok(())
    }

    /// Accept exactly 200; anything else becomes an error carrying the body.
    async fn expect_ok(response: Response) -> Result<(), WatiError> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(WatiError::UnexpectedStatus { status, body })
    }
}

impl std::fmt::Debug for WatiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatiClient")
            .field("config", &self.config)
            .finish()
    }
}
