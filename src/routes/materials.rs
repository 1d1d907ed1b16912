use actix_web::web;

use crate::handlers::materials;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/materials")
            .route("", web::post().to(materials::create_loan))
            .route("", web::get().to(materials::get_materials))
            .route("/{id}", web::delete().to(materials::delete_material))
            .route("/{id}/return", web::post().to(materials::return_material)),
    );
}
