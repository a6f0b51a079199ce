use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ng_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{ConfirmCodeRequest, RequestCodeRequest, RequestCodeResponse};
use crate::handlers::{handle_domain_error, handle_validation_error};

/// Handler for POST /api/v1/verification-codes
///
/// Issues a one-time code for `phone_number` and delivers it out of band.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "+65 8939 5160" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "pending_id": "3f0b8c2e-...",
///         "phone_number": "+65 8939 5160",
///         "expires_at": "2024-05-01T08:05:00Z"
///     },
///     "timestamp": "2024-05-01T08:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Phone number does not match the accepted format
/// - 500 Internal Server Error: Code could not be delivered
pub async fn request_code(state: web::Data<AppState>, request: web::Json<RequestCodeRequest>) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.ledger.request_verification_code(&request.phone_number).await {
        Ok(pending) => HttpResponse::Created().json(ApiResponse::success(RequestCodeResponse::from(pending))),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/verification-codes/{pending_id}/confirm
///
/// Redeems the code and registers the number under `owner_id`. The pending
/// verification is consumed whatever the outcome.
///
/// ## Errors
/// - 400 Bad Request: Code does not match
/// - 410 Gone: Code expired, already used or superseded
pub async fn confirm_code(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    request: web::Json<ConfirmCodeRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state
        .ledger
        .confirm_pending(path.into_inner(), &request.code, &request.owner_id)
        .await
    {
        Ok(record) => {
            let view = state.ledger.view_at(record, state.ledger.now());
            HttpResponse::Created().json(ApiResponse::success(view))
        }
        Err(error) => handle_domain_error(error),
    }
}
