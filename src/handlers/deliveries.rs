use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{
    DeliveryDayStats, DeliveryDriverInput, DeliveryDriverStatus, DeliveryVisit, DeliveryVisitInput,
};
use crate::database::repositories::{CompanyRepository, DeliveryRepository};
use crate::desk::{self, contains_ignore_case, require};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::{Operator, prepare_delivery_visit, resolve_company_name};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<DeliveryDriverStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitQuery {
    #[serde(default)]
    pub search: String,
}

fn validate_driver(mut input: DeliveryDriverInput) -> Result<DeliveryDriverInput, AppError> {
    input.name = require(&input.name, "name")?;
    input.cpf = input.cpf.trim().to_string();
    input.rg = input.rg.trim().to_string();
    Ok(input)
}

/// Visits and packages whose entry time falls on `day` (`DD/MM/YY`).
fn day_stats(visits: &[DeliveryVisit], day: &str) -> DeliveryDayStats {
    visits
        .iter()
        .filter(|v| v.entry_time.starts_with(day))
        .fold(DeliveryDayStats::default(), |mut stats, v| {
            stats.visits_today += 1;
            stats.packages_today += v.package_count;
            stats
        })
}

pub async fn create_driver(
    operator: Operator,
    deliveries: web::Data<DeliveryRepository>,
    companies: web::Data<CompanyRepository>,
    input: web::Json<DeliveryDriverInput>,
) -> Result<HttpResponse, AppError> {
    let input = validate_driver(input.into_inner())?;
    let company_name = resolve_company_name(&companies, input.company_id).await?;
    let driver = deliveries.create_driver(input, company_name).await?;

    log::info!(
        "Delivery driver {} registered for {} ({})",
        driver.name,
        driver.company_name,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(driver)))
}

/// Search covers name, company, CPF and RG
pub async fn get_drivers(
    deliveries: web::Data<DeliveryRepository>,
    query: web::Query<DriverQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = deliveries
        .get_drivers()
        .await?
        .into_iter()
        .filter(|d| {
            contains_ignore_case(&d.name, &query.search)
                || contains_ignore_case(&d.company_name, &query.search)
                || contains_ignore_case(&d.cpf, &query.search)
                || contains_ignore_case(&d.rg, &query.search)
        })
        .filter(|d| query.status.is_none_or(|status| d.status == status))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_driver(
    deliveries: web::Data<DeliveryRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match deliveries.get_driver_by_id(path.into_inner()).await? {
        Some(driver) => Ok(HttpResponse::Ok().json(ApiResponse::success(driver))),
        None => Err(AppError::NotFound("Delivery driver not found".to_string())),
    }
}

pub async fn update_driver(
    operator: Operator,
    deliveries: web::Data<DeliveryRepository>,
    companies: web::Data<CompanyRepository>,
    path: web::Path<Uuid>,
    input: web::Json<DeliveryDriverInput>,
) -> Result<HttpResponse, AppError> {
    let driver_id = path.into_inner();
    let input = validate_driver(input.into_inner())?;
    let company_name = resolve_company_name(&companies, input.company_id).await?;

    match deliveries.update_driver(driver_id, input, company_name).await? {
        Some(driver) => {
            log::info!("Delivery driver {} updated ({})", driver_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(driver)))
        }
        None => Err(AppError::NotFound("Delivery driver not found".to_string())),
    }
}

pub async fn delete_driver(
    operator: Operator,
    deliveries: web::Data<DeliveryRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let driver_id = path.into_inner();
    let deleted = deliveries.delete_driver(driver_id).await?;

    if deleted {
        log::info!("Delivery driver {} deleted ({})", driver_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}

/// Log a driver dropping packages at the desk
pub async fn create_visit(
    operator: Operator,
    deliveries: web::Data<DeliveryRepository>,
    input: web::Json<DeliveryVisitInput>,
) -> Result<HttpResponse, AppError> {
    let new_visit = prepare_delivery_visit(&deliveries, input.into_inner()).await?;
    let entry_time = desk::short_timestamp(desk::local_now());
    let visit = deliveries.create_visit(new_visit, entry_time).await?;

    log::info!(
        "Delivery by {} with {} package(s) ({})",
        visit.driver_name,
        visit.package_count,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(visit)))
}

/// Visits newest first; search covers driver, company and observations
pub async fn get_visits(
    deliveries: web::Data<DeliveryRepository>,
    query: web::Query<VisitQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = deliveries
        .get_visits()
        .await?
        .into_iter()
        .filter(|v| {
            contains_ignore_case(&v.driver_name, &query.search)
                || contains_ignore_case(&v.company_name, &query.search)
                || contains_ignore_case(&v.observations, &query.search)
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_visit_stats(
    deliveries: web::Data<DeliveryRepository>,
) -> Result<HttpResponse, AppError> {
    let visits = deliveries.get_visits().await?;
    let today = desk::short_date(desk::local_now());

    Ok(HttpResponse::Ok().json(ApiResponse::success(day_stats(&visits, &today))))
}

pub async fn update_visit(
    operator: Operator,
    deliveries: web::Data<DeliveryRepository>,
    path: web::Path<Uuid>,
    input: web::Json<DeliveryVisitInput>,
) -> Result<HttpResponse, AppError> {
    let visit_id = path.into_inner();
    let visit = prepare_delivery_visit(&deliveries, input.into_inner()).await?;

    match deliveries.update_visit(visit_id, visit).await? {
        Some(visit) => {
            log::info!("Delivery visit {} updated ({})", visit_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(visit)))
        }
        None => Err(AppError::NotFound("Delivery visit not found".to_string())),
    }
}

pub async fn delete_visit(
    operator: Operator,
    deliveries: web::Data<DeliveryRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let visit_id = path.into_inner();
    let deleted = deliveries.delete_visit(visit_id).await?;

    if deleted {
        log::info!("Delivery visit {} deleted ({})", visit_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
