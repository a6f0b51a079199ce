//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `cache` - Redis configuration for pending verification codes
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `ledger` - Verification lifecycle rules (windows, code gate, scoring)
//! - `server` - HTTP server and CORS configuration
//! - `sms` - Out-of-band code delivery provider
//! - `storage` - Which backend holds records, numbers and pending codes

pub mod cache;
pub mod database;
pub mod environment;
pub mod ledger;
pub mod server;
pub mod sms;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use ledger::{FraudPolicyConfig, LedgerConfig, ReverifyPolicy};
pub use server::{CorsConfig, ServerConfig};
pub use sms::SmsConfig;
pub use storage::{PendingBackend, RecordBackend, StorageConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Verification ledger rules
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Code delivery configuration
    #[serde(default)]
    pub sms: SmsConfig,

    /// Storage backend selection
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            ledger: LedgerConfig::default(),
            sms: SmsConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
            database: DatabaseConfig::new("mysql://localhost:3306/numguard_dev"),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
            database: DatabaseConfig::new("mysql://prod-db:3306/numguard")
                .with_max_connections(50),
            sms: SmsConfig {
                provider: String::from("http"),
                ..Default::default()
            },
            storage: StorageConfig {
                records: RecordBackend::Mysql,
                pending: PendingBackend::Redis,
            },
            ..Default::default()
        }
    }

    /// Baseline configuration for an environment, before file and env overrides
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Baseline for the detected environment, honoring the conventional
    /// `SERVER_HOST`, `SERVER_PORT`, `DATABASE_URL` and `REDIS_URL` variables
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());

        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse().ok()) {
            config.server.port = port;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }
        if let Ok(url) = std::env::var("REDIS_URL") {
            config.cache.url = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_uses_durable_backends() {
        let config = AppConfig::production();
        assert_eq!(config.storage.records, RecordBackend::Mysql);
        assert_eq!(config.storage.pending, PendingBackend::Redis);
        assert_eq!(config.sms.provider, "http");
    }

    #[test]
    fn test_staging_inherits_development() {
        let config = AppConfig::for_environment(Environment::Staging);
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.storage.records, RecordBackend::Memory);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"ledger": {"reverification_window_days": 14}}"#).unwrap();
        assert_eq!(config.ledger.reverification_window_days, 14);
        assert_eq!(config.ledger.code_length, 6);
        assert_eq!(config.server.port, 8080);
    }
}
