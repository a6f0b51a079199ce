//! Route registration
//!
//! - `/` and `/numbers`: health probe and number directory CRUD
//! - `/api/v1`: verification ledger

use actix_web::web;

use crate::handlers::numbers_json_error_handler;

pub mod health;
pub mod ledger;
pub mod numbers;

/// Register every route; `max_payload_size` bounds JSON bodies on scopes
/// that carry their own body config
pub fn configure(cfg: &mut web::ServiceConfig, max_payload_size: usize) {
    cfg.route("/", web::get().to(health::health_check))
        .service(
            web::scope("/numbers")
                .app_data(
                    web::JsonConfig::default()
                        .limit(max_payload_size)
                        .error_handler(numbers_json_error_handler),
                )
                .route("", web::get().to(numbers::list_numbers))
                .route("", web::post().to(numbers::create_number))
                .route("/{id}", web::put().to(numbers::update_number))
                .route("/{id}", web::delete().to(numbers::delete_number)),
        )
        .service(web::scope("/api/v1").configure(ledger::configure));
}
