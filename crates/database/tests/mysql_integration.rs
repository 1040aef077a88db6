//! Integration tests against a live MySQL database.
//!
//! These tests need a reachable database with a populated `pan_fetch` table:
//!   DB_HOST, DB_USER, DB_PASSWORD, DB_DATABASE (and optionally DB_PORT)
//!   TEST_WAID - a waid known to exist in `pan_fetch`
//!
//! Run with:
//!   cargo test -p database --test mysql_integration -- --ignored

use database::{DatabaseConfig, DatabaseError, SubscriberStore};
use std::env;

fn store_from_env() -> Option<SubscriberStore> {
    let _ = dotenvy::dotenv();

    let host = env::var("DB_HOST").ok()?;
    let user = env::var("DB_USER").ok()?;
    let password = env::var("DB_PASSWORD").ok()?;
    let database = env::var("DB_DATABASE").ok()?;
    let port = env::var("DB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(database::config::DEFAULT_PORT);

    let config = DatabaseConfig::new(host, user, password, database).with_port(port);
    Some(SubscriberStore::new(config))
}

#[tokio::test]
#[ignore = "requires a live MySQL database"]
async fn test_find_existing_subscriber() {
    let Some(store) = store_from_env() else {
        eprintln!("Skipping: DB_* variables not set");
        return;
    };
    let Ok(waid) = env::var("TEST_WAID") else {
        eprintln!("Skipping: TEST_WAID not set");
        return;
    };

    let subscriber = store.find_by_waid(&waid).await.unwrap();
    assert_eq!(subscriber.waid, waid);
    assert!(!subscriber.pan.is_empty());
}

#[tokio::test]
#[ignore = "requires a live MySQL database"]
async fn test_unknown_waid_is_not_found() {
    let Some(store) = store_from_env() else {
        eprintln!("Skipping: DB_* variables not set");
        return;
    };

    let result = store.find_by_waid("does-not-exist-000").await;
    assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
}
