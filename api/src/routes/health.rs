use actix_web::{web, HttpResponse};

use ng_shared::types::{ApiResponse, HealthResponse};

use crate::app::AppState;

/// Handler for GET /
///
/// Answers `{success, timestamp}`; with a MySQL backend the database must
/// answer too.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    if let Some(database) = &state.database {
        if let Err(e) = database.health_check().await {
            log::error!("Health check failed: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::<()>::error(e.to_string()));
        }
    }

    HttpResponse::Ok().json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
