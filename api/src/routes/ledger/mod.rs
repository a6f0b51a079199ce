//! Verification ledger routes, mounted under `/api/v1`

use actix_web::web;

pub mod owners;
pub mod records;
pub mod verification;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/verification-codes")
            .route("", web::post().to(verification::request_code))
            .route("/{pending_id}/confirm", web::post().to(verification::confirm_code)),
    )
    .service(
        web::scope("/owners/{owner_id}")
            .route("/records", web::get().to(owners::list_records))
            .route("/summary", web::get().to(owners::summary)),
    )
    .service(
        web::scope("/records")
            // Registered before `/{id}` routes so "remove" is never read as an id
            .route("/remove", web::post().to(records::remove_many))
            .route("/{id}", web::delete().to(records::remove_record))
            .route("/{id}/reverify", web::post().to(records::reverify))
            .route("/{id}/reports", web::post().to(records::file_report)),
    );
}
