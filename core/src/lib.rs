//! # NumGuard Core
//!
//! Core business logic and domain layer for the NumGuard backend.
//! This crate contains the phone record and pending verification entities,
//! the verification ledger, repository interfaces with in-memory adapters,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
