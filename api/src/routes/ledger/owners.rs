use actix_web::{web, HttpResponse};

use ng_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/v1/owners/{owner_id}/records
///
/// Records are ordered by verification time and carry their derived
/// `status` and `days_until_reverification`.
pub async fn list_records(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match state.ledger.list_views_by_owner(&path.into_inner()).await {
        Ok(views) => HttpResponse::Ok().json(ApiResponse::success(views)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/owners/{owner_id}/summary
pub async fn summary(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    match state.ledger.summarize(&path.into_inner()).await {
        Ok(summary) => HttpResponse::Ok().json(ApiResponse::success(summary)),
        Err(error) => handle_domain_error(error),
    }
}
