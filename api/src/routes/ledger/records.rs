use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ng_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::RemoveRecordsRequest;
use crate::handlers::{handle_domain_error, handle_validation_error};

/// Handler for POST /api/v1/records/{id}/reverify
///
/// ## Errors
/// - 404 Not Found: No such record
/// - 409 Conflict: Record is not due yet (when reverification requires it)
pub async fn reverify(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.ledger.reverify(path.into_inner()).await {
        Ok(record) => {
            let view = state.ledger.view_at(record, state.ledger.now());
            HttpResponse::Ok().json(ApiResponse::success(view))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/records/{id}/reports
pub async fn file_report(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.ledger.file_suspicion_report(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/records/{id}
pub async fn remove_record(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.ledger.remove_record(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/records/remove
///
/// Removes every id that resolves; unknown ids are reported, not fatal.
///
/// # Response
///
/// ```json
/// { "success": true, "data": { "removed": ["..."], "not_found": ["..."] }, "timestamp": "..." }
/// ```
pub async fn remove_many(state: web::Data<AppState>, request: web::Json<RemoveRecordsRequest>) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.ledger.remove_many(&request.ids).await {
        Ok(report) => HttpResponse::Ok().json(ApiResponse::success(report)),
        Err(error) => handle_domain_error(error),
    }
}
