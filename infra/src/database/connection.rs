//! Database connection pool management
//!
//! Wraps a SQLx MySQL pool configured from `DatabaseConfig`, with a
//! connectivity probe and the bundled schema migrations.

use ng_shared::config::DatabaseConfig;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::InfrastructureError;

/// Schema statements applied by `run_migrations`, in order
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "0001_create_phone_records",
        include_str!("../../migrations/0001_create_phone_records.sql"),
    ),
    (
        "0002_create_numbers",
        include_str!("../../migrations/0002_create_numbers.sql"),
    ),
];

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            max_connections = config.max_connections,
            "Creating database connection pool"
        );

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(
                LevelFilter::Warn,
                Duration::from_millis(config.slow_query_threshold),
            );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create database pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Get a handle to the underlying SQLx pool
    pub fn get_pool(&self) -> MySqlPool {
        self.pool.clone()
    }

    /// Check if the database answers a trivial query
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                InfrastructureError::Database(e)
            })?;

        Ok(value == 1)
    }

    /// Create the tables used by the repositories if they are missing
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        for (name, sql) in MIGRATIONS {
            tracing::info!(migration = name, "Applying database migration");
            sqlx::query(sql).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creation_with_invalid_url() {
        let config = DatabaseConfig::new("invalid://url");

        let result = DatabasePool::new(&config).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_migrations_are_idempotent_ddl() {
        for (_, sql) in MIGRATIONS {
            assert!(sql.contains("CREATE TABLE IF NOT EXISTS"));
        }
    }
}
