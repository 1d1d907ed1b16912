use actix_web::web;

use crate::handlers::deliveries;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/deliveries")
            .route("/drivers", web::post().to(deliveries::create_driver))
            .route("/drivers", web::get().to(deliveries::get_drivers))
            .route("/drivers/{id}", web::get().to(deliveries::get_driver))
            .route("/drivers/{id}", web::put().to(deliveries::update_driver))
            .route("/drivers/{id}", web::delete().to(deliveries::delete_driver))
            .route("/visits", web::post().to(deliveries::create_visit))
            .route("/visits", web::get().to(deliveries::get_visits))
            .route("/visits/stats", web::get().to(deliveries::get_visit_stats))
            .route("/visits/{id}", web::put().to(deliveries::update_visit))
            .route("/visits/{id}", web::delete().to(deliveries::delete_visit)),
    );
}
