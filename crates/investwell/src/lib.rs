//! InvestWell reporting API client.
//!
//! This crate covers the two InvestWell endpoints the relay needs:
//!
//! - Exchanging partner credentials for a short-lived token
//! - Downloading a portfolio valuation PDF for a PAN
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use investwell::{InvestwellClient, InvestwellConfig};
//!
//! # async fn example() -> Result<(), investwell::InvestwellError> {
//! let config = InvestwellConfig::new("https://api.investwell.app", "partner", "secret");
//! let client = InvestwellClient::new(config)?;
//!
//! let token = client.obtain_token().await?;
//! let pdf = client
//!     .fetch_report(&token, "ABCDE1234F", Local::now().date_naive())
//!     .await?;
//! println!("Report is {} bytes", pdf.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::InvestwellClient;
pub use config::InvestwellConfig;
pub use error::InvestwellError;
pub use types::{AuthToken, ReportFilter};
