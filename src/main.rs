use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use portaria::Config;
use portaria::database::{
    init_database,
    repositories::{
        CompanyRepository, DeliveryRepository, EmployeeRepository, MaterialRepository,
        OccurrenceRepository, PackageRepository, ReceivedItemRepository, ResidentRepository,
        StatsRepository, TimeRecordRepository, VisitorRepository,
    },
};
use portaria::middleware::RequestIdMiddleware;
use portaria::routes;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Portaria API v1.0")
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting Portaria API server...");

    let config = Config::from_env()?;
    log::info!("Configuration loaded (environment: {})", config.environment);

    let pool = init_database(&config.database_url).await?;
    log::info!("Database initialized");

    let resident_repo_data = web::Data::new(ResidentRepository::new(pool.clone()));
    let employee_repo_data = web::Data::new(EmployeeRepository::new(pool.clone()));
    let package_repo_data = web::Data::new(PackageRepository::new(pool.clone()));
    let occurrence_repo_data = web::Data::new(OccurrenceRepository::new(pool.clone()));
    let material_repo_data = web::Data::new(MaterialRepository::new(pool.clone()));
    let visitor_repo_data = web::Data::new(VisitorRepository::new(pool.clone()));
    let received_item_repo_data = web::Data::new(ReceivedItemRepository::new(pool.clone()));
    let company_repo_data = web::Data::new(CompanyRepository::new(pool.clone()));
    let delivery_repo_data = web::Data::new(DeliveryRepository::new(pool.clone()));
    let time_record_repo_data = web::Data::new(TimeRecordRepository::new(pool.clone()));
    let stats_repo_data = web::Data::new(StatsRepository::new(pool.clone()));

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        let cors = if config.is_development() {
            Cors::permissive()
        } else {
            Cors::default()
                .allowed_origin(&config.client_base_url)
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec![
                    "Content-Type",
                    "Accept",
                    "X-Requested-With",
                    "X-Correlation-ID",
                    "X-Operator-Name",
                ])
                .max_age(3600)
        };

        App::new()
            .app_data(resident_repo_data.clone())
            .app_data(employee_repo_data.clone())
            .app_data(package_repo_data.clone())
            .app_data(occurrence_repo_data.clone())
            .app_data(material_repo_data.clone())
            .app_data(visitor_repo_data.clone())
            .app_data(received_item_repo_data.clone())
            .app_data(company_repo_data.clone())
            .app_data(delivery_repo_data.clone())
            .app_data(time_record_repo_data.clone())
            .app_data(stats_repo_data.clone())
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
