use actix_web::web;

use crate::handlers::visitors;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/visitors")
            .route("", web::post().to(visitors::register_entry))
            .route("", web::get().to(visitors::get_visitors))
            .route("/{id}", web::delete().to(visitors::delete_visitor))
            .route("/{id}/exit", web::post().to(visitors::register_exit)),
    );
}
