//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the NumGuard backend,
//! following Clean Architecture principles. It provides concrete
//! implementations of the storage and delivery traits declared in `ng_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL phone record and numbers repositories using SQLx
//! - **Cache**: Redis client and the pending verification store
//! - **SMS**: Code senders (log-only mock and an HTTP provider)

/// Database module - MySQL implementations using SQLx
pub mod database;

/// SMS module - out-of-band code delivery
pub mod sms;

/// Cache module - Redis client and pending verification store
pub mod cache;

use ng_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stored payload could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
