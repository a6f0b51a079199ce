//! Ledger-specific error types
//!
//! These errors represent the rule violations of the verification lifecycle.
//! HTTP status and error codes are assigned in the presentation layer.

use ng_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;
use uuid::Uuid;

/// Verification ledger errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid phone format: {phone}")]
    InvalidFormat { phone: String },

    #[error("Verification code does not match")]
    CodeMismatch,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("Phone record not found: {id}")]
    NotFound { id: Uuid },

    #[error("Phone record is not due for reverification: {id}")]
    NotDue { id: Uuid },
}

impl LedgerError {
    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidFormat { .. } => error_codes::PHONE_INVALID,
            LedgerError::CodeMismatch => error_codes::VERIFICATION_CODE_INVALID,
            LedgerError::CodeExpired => error_codes::VERIFICATION_CODE_EXPIRED,
            LedgerError::NotFound { .. } => error_codes::RECORD_NOT_FOUND,
            LedgerError::NotDue { .. } => error_codes::REVERIFICATION_NOT_DUE,
        }
    }
}

/// Convert LedgerError to ErrorResponse
impl From<&LedgerError> for ErrorResponse {
    fn from(err: &LedgerError) -> Self {
        let response = ErrorResponse::new(err.code(), err.to_string());
        match err {
            LedgerError::InvalidFormat { phone } => response.add_detail("phone", phone),
            LedgerError::NotFound { id } | LedgerError::NotDue { id } => {
                response.add_detail("id", id.to_string())
            }
            _ => response,
        }
    }
}
