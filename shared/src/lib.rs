//! Shared utilities and common types for the NumGuard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes and response structures
//! - Phone number utilities
//! - API response envelopes

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    DatabaseConfig, CacheConfig, LedgerConfig, SmsConfig, StorageConfig,
    ServerConfig, CorsConfig, LoggingConfig
};
pub use errors::{ErrorResponse, IntoErrorResponse, error_codes};
pub use types::{ApiResponse, HealthResponse};
pub use utils::phone;
