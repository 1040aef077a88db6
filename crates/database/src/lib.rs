//! MySQL subscriber lookup for the portfolio report relay.
//!
//! Subscribers are keyed by their WhatsApp ID and carry the PAN needed to
//! request a portfolio report. The table is owned by an external system, so
//! this crate only reads from it.
//!
//! # Table layout
//!
//! Lookups read `pan_fetch` and expect these columns:
//!
//! | Column | SQL type | Notes |
//! |--------|----------|-------|
//! | `waid` | `VARCHAR`/`CHAR` | Lookup key; a numeric column fails to decode |
//! | `pan` | `VARCHAR`/`CHAR`, `NOT NULL` | A `NULL` PAN is reported as a database error |
//! | `name` | `VARCHAR`/`CHAR`, nullable | Decoded as `Option<String>` |
//!
//! # Example
//!
//! ```no_run
//! use database::{DatabaseConfig, SubscriberStore};
//!
//! # async fn example() -> database::Result<()> {
//! let config = DatabaseConfig::new("127.0.0.1", "relay", "secret", "mnivesh");
//! let store = SubscriberStore::new(config);
//!
//! let subscriber = store.find_by_waid("919999999999").await?;
//! println!("{} has PAN {}", subscriber.name_or("Investor"), subscriber.pan);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod subscriber;

pub use config::DatabaseConfig;
pub use error::{DatabaseError, Result};
pub use models::Subscriber;
pub use subscriber::SubscriberStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = DatabaseError::NotFound {
            entity: "Subscriber",
            id: "919999999999".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Subscriber not found: 919999999999");

        let err = DatabaseError::Sqlx(sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_unreachable_database_is_store_error() {
        // Nothing listens on port 1, so the connection attempt fails fast.
        let config = DatabaseConfig::new("127.0.0.1", "relay", "secret", "mnivesh").with_port(1);
        let store = SubscriberStore::new(config);

        let result = store.find_by_waid("919999999999").await;
        assert!(matches!(result, Err(DatabaseError::Sqlx(_))));
    }
}
