//! Number directory CRUD
//!
//! Success bodies are `{success, data}`; failures `{success: false, error}`.

use actix_web::{web, HttpResponse};
use validator::Validate;

use ng_core::errors::DomainError;
use ng_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::NumberRequest;

fn failure(error: DomainError) -> HttpResponse {
    log::error!("Number directory error: {:?}", error);
    HttpResponse::InternalServerError().json(ApiResponse::<()>::error(error.to_string()))
}

fn not_found(id: i64) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(format!("Number {} not found", id)))
}

fn invalid(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(errors.to_string()))
}

/// Handler for GET /numbers
pub async fn list_numbers(state: web::Data<AppState>) -> HttpResponse {
    match state.numbers.find_all().await {
        Ok(numbers) => HttpResponse::Ok().json(numbers),
        Err(e) => failure(e),
    }
}

/// Handler for POST /numbers
pub async fn create_number(state: web::Data<AppState>, request: web::Json<NumberRequest>) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return invalid(errors);
    }

    match state.numbers.create(request.into_inner().into()).await {
        Ok(entry) => {
            log::info!("Created number {}", entry.id);
            HttpResponse::Created().json(ApiResponse::success(entry))
        }
        Err(e) => failure(e),
    }
}

/// Handler for PUT /numbers/{id}
pub async fn update_number(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    request: web::Json<NumberRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    if let Err(errors) = request.validate() {
        return invalid(errors);
    }

    match state.numbers.update(id, request.into_inner().into()).await {
        Ok(Some(entry)) => HttpResponse::Ok().json(ApiResponse::success(entry)),
        Ok(None) => not_found(id),
        Err(e) => failure(e),
    }
}

/// Handler for DELETE /numbers/{id}
///
/// 204 carries no body, so the confirmation is only logged.
pub async fn delete_number(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();

    match state.numbers.delete(id).await {
        Ok(true) => {
            log::info!("{} deleted successfully", id);
            HttpResponse::NoContent().finish()
        }
        Ok(false) => not_found(id),
        Err(e) => failure(e),
    }
}
