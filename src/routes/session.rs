use actix_web::web;

use crate::handlers::session;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/session")
            .route("/roster", web::get().to(session::get_roster))
            .route("/login", web::post().to(session::login)),
    );
}
