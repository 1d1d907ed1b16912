use actix_web::web;

use crate::handlers::received_items;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/received-items")
            .route("", web::post().to(received_items::create_item))
            .route("", web::get().to(received_items::get_items))
            .route("/{id}", web::get().to(received_items::get_item))
            .route("/{id}", web::delete().to(received_items::delete_item))
            .route("/{id}/pickup", web::post().to(received_items::pickup_item)),
    );
}
