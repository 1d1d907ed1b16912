use actix_web::web;

use crate::handlers::residents;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/residents")
            .route("", web::post().to(residents::create_resident))
            .route("", web::get().to(residents::get_residents))
            .route("/{id}", web::get().to(residents::get_resident))
            .route("/{id}", web::put().to(residents::update_resident))
            .route("/{id}", web::delete().to(residents::delete_resident)),
    );
}
