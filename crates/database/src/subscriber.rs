//! Subscriber lookups against the `pan_fetch` table.

use sqlx::{ConnectOptions, Connection};
use tracing::{debug, error, warn};

use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::models::Subscriber;

/// Read-only access to subscriber records.
///
/// Every lookup opens its own connection and closes it before returning;
/// no connection outlives a single call.
#[derive(Debug, Clone)]
pub struct SubscriberStore {
    config: DatabaseConfig,
}

impl SubscriberStore {
    /// Create a store for the given database.
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Get a subscriber by WhatsApp ID.
    pub async fn find_by_waid(&self, waid: &str) -> Result<Subscriber> {
        let mut conn = self
            .config
            .connect_options()
            .connect()
            .await
            .map_err(|e| {
                error!(waid = %waid, error = %e, "Failed to connect to subscriber database");
                DatabaseError::Sqlx(e)
            })?;

        debug!(waid = %waid, "Looking up subscriber");

        let row = sqlx::query_as::<_, Subscriber>(
            r#"
            SELECT waid, pan, name
            FROM pan_fetch
            WHERE waid = ?
            "#,
        )
        .bind(waid)
        .fetch_optional(&mut conn)
        .await;

        // Release the connection before looking at the query outcome.
        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close subscriber database connection");
        }

        match row {
            Ok(Some(subscriber)) => Ok(subscriber),
            Ok(None) => {
                error!(waid = %waid, "No details found for waid");
                Err(DatabaseError::NotFound {
                    entity: "Subscriber",
                    id: waid.to_string(),
                })
            }
            Err(e) => {
                error!(waid = %waid, error = %e, "Database error while fetching subscriber");
                Err(DatabaseError::Sqlx(e))
            }
        }
    }
}
