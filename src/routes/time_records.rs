use actix_web::web;

use crate::handlers::time_records;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/time-records")
            .route("", web::post().to(time_records::create_record))
            .route("", web::get().to(time_records::get_records))
            .route("", web::delete().to(time_records::clear_records))
            .route("/{id}", web::put().to(time_records::update_record))
            .route("/{id}", web::delete().to(time_records::delete_record)),
    );
}
