//! Connection settings for the subscriber database.

use secrecy::{ExposeSecret, SecretString};
use sqlx::mysql::MySqlConnectOptions;

/// Default MySQL port.
pub const DEFAULT_PORT: u16 = 3306;

/// Settings for connecting to the MySQL subscriber database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port (default: 3306).
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database password.
    password: SecretString,
    /// Schema name.
    pub database: String,
}

impl DatabaseConfig {
    /// Create a new configuration on the default port.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: SecretString::from(password.into()),
            database: database.into(),
        }
    }

    /// Override the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Build SQLx connect options from these settings.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let config = DatabaseConfig::new("db.internal", "relay", "hunter2", "mnivesh");
        assert_eq!(config.port, 3306);
        assert_eq!(config.with_port(3307).port, 3307);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DatabaseConfig::new("db.internal", "relay", "hunter2", "mnivesh");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("db.internal"));
    }
}
