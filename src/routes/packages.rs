use actix_web::web;

use crate::handlers::packages;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Fixed segments must be registered before `/{id}`
    cfg.service(
        web::scope("/packages")
            .route("", web::post().to(packages::create_package))
            .route("", web::get().to(packages::get_packages))
            .route("/groups", web::get().to(packages::get_package_groups))
            .route("/groups/items", web::get().to(packages::get_group_items))
            .route("/groups/pickup", web::post().to(packages::pickup_group))
            .route("/stats", web::get().to(packages::get_package_stats))
            .route("/{id}", web::get().to(packages::get_package))
            .route("/{id}", web::delete().to(packages::delete_package))
            .route("/{id}/pickup", web::post().to(packages::pickup_package)),
    );
}
