//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::LedgerError;

use ng_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to ledger rule violations
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl DomainError {
    /// The ledger rule violation, if this error is one
    pub fn as_ledger(&self) -> Option<&LedgerError> {
        match self {
            DomainError::Ledger(err) => Some(err),
            _ => None,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::NotFound { resource } => {
                ErrorResponse::new(error_codes::NOT_FOUND, self.to_string())
                    .add_detail("resource", resource)
            }
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, self.to_string())
            }
            DomainError::Ledger(err) => err.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
