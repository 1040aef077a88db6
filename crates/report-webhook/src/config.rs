//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use database::DatabaseConfig;
use investwell::InvestwellConfig;
use wati::WatiConfig;

/// Default bind address for the web-server process.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8181";

/// Default port for the Azure Functions custom handler.
pub const DEFAULT_FUNCTION_PORT: u16 = 7071;

/// Relay configuration, built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// InvestWell API settings.
    pub investwell: InvestwellConfig,
    /// WATI tenant settings.
    pub wati: WatiConfig,
    /// Subscriber database settings.
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `INVESTWELL_API_URL` | InvestWell base URL | (required) |
    /// | `INVESTWELL_AUTH_NAME` | InvestWell partner identity | (required) |
    /// | `INVESTWELL_AUTH_PASSWORD` | InvestWell partner secret | (required) |
    /// | `WATI_API_URL` | WATI tenant base URL | (required) |
    /// | `WATI_BEARER_TOKEN` | WATI `Authorization` header value | (required) |
    /// | `DB_HOST` | MySQL host | (required) |
    /// | `DB_PORT` | MySQL port | `3306` |
    /// | `DB_USER` | MySQL user | (required) |
    /// | `DB_PASSWORD` | MySQL password | (required) |
    /// | `DB_DATABASE` | MySQL schema | (required) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let investwell = InvestwellConfig::new(
            required("INVESTWELL_API_URL")?,
            required("INVESTWELL_AUTH_NAME")?,
            required("INVESTWELL_AUTH_PASSWORD")?,
        );

        let wati = WatiConfig::new(required("WATI_API_URL")?, required("WATI_BEARER_TOKEN")?);

        let db_port = match lookup("DB_PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "DB_PORT",
                value: port,
            })?,
            None => database::config::DEFAULT_PORT,
        };

        let database = DatabaseConfig::new(
            required("DB_HOST")?,
            required("DB_USER")?,
            required("DB_PASSWORD")?,
            required("DB_DATABASE")?,
        )
        .with_port(db_port);

        Ok(Self {
            investwell,
            wati,
            database,
        })
    }
}

/// Bind address for the web-server process (`WEBHOOK_ADDR`, default `0.0.0.0:8181`).
pub fn server_addr() -> Result<SocketAddr, ConfigError> {
    let value = env::var("WEBHOOK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    value.parse().map_err(|_| ConfigError::Invalid {
        key: "WEBHOOK_ADDR",
        value,
    })
}

/// Bind address for the Azure Functions custom handler.
///
/// The Functions host passes the port in `FUNCTIONS_CUSTOMHANDLER_PORT` and
/// only forwards to loopback.
pub fn function_addr() -> Result<SocketAddr, ConfigError> {
    let port = match env::var("FUNCTIONS_CUSTOMHANDLER_PORT") {
        Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
            key: "FUNCTIONS_CUSTOMHANDLER_PORT",
            value,
        })?,
        Err(_) => DEFAULT_FUNCTION_PORT,
    };
    Ok(SocketAddr::from(([127, 0, 0, 1], port)))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        [
            ("INVESTWELL_API_URL", "https://iw.example.com/api/"),
            ("INVESTWELL_AUTH_NAME", "partner"),
            ("INVESTWELL_AUTH_PASSWORD", "iw-secret"),
            ("WATI_API_URL", "https://live.wati.io"),
            ("WATI_BEARER_TOKEN", "Bearer wati-secret"),
            ("DB_HOST", "db.internal"),
            ("DB_USER", "relay"),
            ("DB_PASSWORD", "db-secret"),
            ("DB_DATABASE", "mnivesh"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    #[test]
    fn test_from_lookup_complete() {
        let env = full_env();
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.investwell.base_url, "https://iw.example.com/api");
        assert_eq!(config.investwell.auth_name, "partner");
        assert_eq!(config.wati.bearer_token(), "Bearer wati-secret");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3306);

        let debug = format!("{:?}", config);
        assert!(!debug.contains("iw-secret"));
        assert!(!debug.contains("wati-secret"));
        assert!(!debug.contains("db-secret"));
    }

    #[test]
    fn test_from_lookup_missing_var() {
        let mut env = full_env();
        env.remove("WATI_BEARER_TOKEN");
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("WATI_BEARER_TOKEN")));
    }

    #[test]
    fn test_from_lookup_blank_is_missing() {
        let mut env = full_env();
        env.insert("DB_HOST", "   ".to_string());
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DB_HOST")));
    }

    #[test]
    fn test_from_lookup_port() {
        let mut env = full_env();
        env.insert("DB_PORT", "3307".to_string());
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.database.port, 3307);

        env.insert("DB_PORT", "not-a-port".to_string());
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_PORT", .. }));
    }
}
