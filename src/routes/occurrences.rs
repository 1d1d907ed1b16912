use actix_web::web;

use crate::handlers::occurrences;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/occurrences")
            .route("", web::post().to(occurrences::create_occurrence))
            .route("", web::get().to(occurrences::get_occurrences))
            .route("/handover", web::post().to(occurrences::create_handover))
            .route("/{id}", web::get().to(occurrences::get_occurrence))
            .route("/{id}", web::delete().to(occurrences::delete_occurrence)),
    );
}
