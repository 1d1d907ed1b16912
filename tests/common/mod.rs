#![allow(dead_code)]

use actix_web::web;
use anyhow::Result;
use fake::Fake;
use fake::faker::name::en::Name;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;

use portaria::database::init_database;
use portaria::database::repositories::{
    CompanyRepository, DeliveryRepository, EmployeeRepository, MaterialRepository,
    OccurrenceRepository, PackageRepository, ReceivedItemRepository, ResidentRepository,
    StatsRepository, TimeRecordRepository, VisitorRepository,
};
use portaria::routes;

/// Builds the API under test on top of a `TestDb`.
#[macro_export]
macro_rules! test_app {
    ($db:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(portaria::middleware::RequestIdMiddleware)
                .configure(|cfg| $db.configure(cfg)),
        )
        .await
    };
}

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }

    /// Registers every repository and the API routes on an app under test.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(ResidentRepository::new(self.pool.clone())))
            .app_data(web::Data::new(EmployeeRepository::new(self.pool.clone())))
            .app_data(web::Data::new(PackageRepository::new(self.pool.clone())))
            .app_data(web::Data::new(OccurrenceRepository::new(self.pool.clone())))
            .app_data(web::Data::new(MaterialRepository::new(self.pool.clone())))
            .app_data(web::Data::new(VisitorRepository::new(self.pool.clone())))
            .app_data(web::Data::new(ReceivedItemRepository::new(self.pool.clone())))
            .app_data(web::Data::new(CompanyRepository::new(self.pool.clone())))
            .app_data(web::Data::new(DeliveryRepository::new(self.pool.clone())))
            .app_data(web::Data::new(TimeRecordRepository::new(self.pool.clone())))
            .app_data(web::Data::new(StatsRepository::new(self.pool.clone())));
        routes::configure(cfg);
    }
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fake_name() -> String {
    Name().fake()
}

pub fn manual_package(recipient: &str, unit: &str, block: &str) -> Value {
    json!({
        "recipient": {
            "kind": "manual",
            "recipientName": recipient,
            "unit": unit,
            "block": block
        },
        "packageType": "Caixa",
        "sender": "Loja Exemplo"
    })
}

pub fn employee(name: &str, status: &str) -> Value {
    json!({
        "name": name,
        "role": "Porteiro",
        "shift": "day",
        "status": status
    })
}

pub fn resident(name: &str, unit: &str, block: &str) -> Value {
    json!({
        "name": name,
        "unit": unit,
        "block": block,
        "residentType": "owner",
        "status": "active",
        "cpf": "123.456.789-00"
    })
}
