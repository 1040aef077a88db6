//! WATI WhatsApp messaging client.
//!
//! Supports the two session endpoints the relay uses:
//!
//! - Uploading a file into a recipient's open session
//! - Sending an interactive message with reply buttons
//!
//! # Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use wati::{InteractiveButtonsMessage, WatiClient, WatiConfig};
//!
//! # async fn example() -> Result<(), wati::WatiError> {
//! let config = WatiConfig::new("https://live.wati.io", "Bearer token");
//! let client = WatiClient::new(config)?;
//!
//! client
//!     .send_session_file("919999999999", "report.pdf", Bytes::from_static(b"%PDF"))
//!     .await?;
//!
//! let message = InteractiveButtonsMessage::new("Your report is ready.", "Support")
//!     .with_button("Send on mail");
//! client.send_interactive_buttons("919999999999", &message).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::WatiClient;
pub use config::WatiConfig;
pub use error::WatiError;
pub use types::{Button, InteractiveButtonsMessage};
