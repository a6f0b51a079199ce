//! Mapping of domain and request errors to HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use std::collections::BTreeMap;
use validator::ValidationErrors;

use ng_core::errors::{DomainError, LedgerError};
use ng_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use ng_shared::types::ApiResponse;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Ledger(ledger) => match ledger {
            LedgerError::InvalidFormat { .. } | LedgerError::CodeMismatch => StatusCode::BAD_REQUEST,
            LedgerError::CodeExpired => StatusCode::GONE,
            LedgerError::NotFound { .. } => StatusCode::NOT_FOUND,
            LedgerError::NotDue { .. } => StatusCode::CONFLICT,
        },
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Internal failure details are logged, never returned.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    let body = if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
        ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
    } else {
        log::warn!("Request rejected: {}", error);
        error.to_error_response()
    };

    HttpResponse::build(status).json(body)
}

/// Convert validator failures into a 400 listing the offending fields
pub fn handle_validation_error(errors: ValidationErrors) -> HttpResponse {
    let fields: BTreeMap<&str, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field, errs.iter().map(|e| e.code.to_string()).collect()))
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
            .add_detail("fields", fields),
    )
}

/// Malformed JSON bodies answer with the standard error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Malformed JSON on the number directory answers in its `ApiResponse` envelope
pub fn numbers_json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Unparseable path segments (e.g. a malformed record id) answer 400
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()));
    InternalError::from_response(err, response).into()
}
