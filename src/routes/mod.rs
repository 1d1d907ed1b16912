use actix_web::web;

use crate::handlers::health;

pub mod companies;
pub mod deliveries;
pub mod employees;
pub mod materials;
pub mod occurrences;
pub mod packages;
pub mod received_items;
pub mod residents;
pub mod session;
pub mod stats;
pub mod time_records;
pub mod visitors;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health::health))
            .configure(session::configure)
            .configure(residents::configure)
            .configure(employees::configure)
            .configure(packages::configure)
            .configure(occurrences::configure)
            .configure(materials::configure)
            .configure(visitors::configure)
            .configure(received_items::configure)
            .configure(companies::configure)
            .configure(deliveries::configure)
            .configure(time_records::configure)
            .configure(stats::configure),
    );
}
