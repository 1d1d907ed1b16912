use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{ResidentInput, ResidentStatus};
use crate::database::repositories::ResidentRepository;
use crate::desk::{contains_ignore_case, require};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::Operator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<ResidentStatus>,
}

fn validate(mut input: ResidentInput) -> Result<ResidentInput, AppError> {
    input.name = require(&input.name, "name")?;
    input.unit = require(&input.unit, "unit")?;
    input.block = input.block.trim().to_string();
    Ok(input)
}

pub async fn create_resident(
    operator: Operator,
    residents: web::Data<ResidentRepository>,
    input: web::Json<ResidentInput>,
) -> Result<HttpResponse, AppError> {
    let input = validate(input.into_inner())?;
    let resident = residents.create_resident(input).await?;

    log::info!("Resident {} registered ({})", resident.id, operator);

    Ok(HttpResponse::Created().json(ApiResponse::success(resident)))
}

/// Residents ordered by name; search covers name, unit, block and CPF
pub async fn get_residents(
    residents: web::Data<ResidentRepository>,
    query: web::Query<ResidentQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = residents
        .get_all_residents()
        .await?
        .into_iter()
        .filter(|r| {
            contains_ignore_case(&r.name, &query.search)
                || contains_ignore_case(&r.unit, &query.search)
                || contains_ignore_case(&r.block, &query.search)
                || contains_ignore_case(&r.cpf, &query.search)
        })
        .filter(|r| query.status.is_none_or(|status| r.status == status))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_resident(
    residents: web::Data<ResidentRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match residents.get_resident_by_id(path.into_inner()).await? {
        Some(resident) => Ok(HttpResponse::Ok().json(ApiResponse::success(resident))),
        None => Err(AppError::NotFound("Resident not found".to_string())),
    }
}

pub async fn update_resident(
    operator: Operator,
    residents: web::Data<ResidentRepository>,
    path: web::Path<Uuid>,
    input: web::Json<ResidentInput>,
) -> Result<HttpResponse, AppError> {
    let resident_id = path.into_inner();
    let input = validate(input.into_inner())?;

    match residents.update_resident(resident_id, input).await? {
        Some(resident) => {
            log::info!("Resident {} updated ({})", resident_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(resident)))
        }
        None => Err(AppError::NotFound("Resident not found".to_string())),
    }
}

pub async fn delete_resident(
    operator: Operator,
    residents: web::Data<ResidentRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let resident_id = path.into_inner();
    let deleted = residents.delete_resident(resident_id).await?;

    if deleted {
        log::info!("Resident {} deleted ({})", resident_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
