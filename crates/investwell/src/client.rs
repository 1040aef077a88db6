//! InvestWell HTTP client.

use bytes::Bytes;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use crate::config::InvestwellConfig;
use crate::error::InvestwellError;
use crate::types::{AuthToken, ReportFilter, TokenRequest, TokenResponse};

/// Client for the InvestWell authorization and reporting endpoints.
#[derive(Clone)]
pub struct InvestwellClient {
    http: Client,
    config: InvestwellConfig,
}

impl InvestwellClient {
    /// Create a new client.
    pub fn new(config: InvestwellConfig) -> Result<Self, InvestwellError> {
        let http = Client::builder().build().map_err(InvestwellError::Http)?;
        Ok(Self { http, config })
    }

    /// Exchange the configured credentials for a fresh token.
    pub async fn obtain_token(&self) -> Result<AuthToken, InvestwellError> {
        let url = self.config.token_url();
        let request = TokenRequest {
            auth_name: &self.config.auth_name,
            password: self.config.password(),
        };

        debug!("Requesting InvestWell token: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(InvestwellError::Http)?;

        let status = response.status();
        let body = response.bytes().await.map_err(InvestwellError::Http)?;
        let parsed: TokenResponse = serde_json::from_slice(&body)?;

        match parsed.into_token() {
            Some(token) => {
                info!("Obtained InvestWell token");
                Ok(token)
            }
            None => {
                error!(status = %status, "InvestWell authorization response had no token");
                Err(InvestwellError::MissingToken)
            }
        }
    }

    /// Download the portfolio valuation PDF for `pan` as of `as_of`.
    ///
    /// Only a 200 response counts; the body of any other response is ignored.
    pub async fn fetch_report(
        &self,
        token: &AuthToken,
        pan: &str,
        as_of: NaiveDate,
    ) -> Result<Bytes, InvestwellError> {
        let url = self.config.report_url();
        let filters = ReportFilter::portfolio(pan, as_of).to_query_value()?;

        debug!(pan = %pan, as_of = %as_of, "Fetching portfolio report");

        let response = self
            .http
            .get(&url)
            .query(&[("filters", filters.as_str()), ("token", token.expose())])
            .send()
            .await
            .map_err(InvestwellError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(pan = %pan, status = %status, "Portfolio report request failed");
            return Err(InvestwellError::UnexpectedStatus(status));
        }

        let document = response.bytes().await.map_err(InvestwellError::Http)?;
        info!(pan = %pan, bytes = document.len(), "Fetched portfolio report");
        Ok(document)
    }
}

impl std::fmt::Debug for InvestwellClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestwellClient")
            .field("config", &self.config)
            .finish()
    }
}
