use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{BorrowedMaterialInput, MaterialStatus};
use crate::database::repositories::MaterialRepository;
use crate::desk::{self, contains_ignore_case, require};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::Operator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<MaterialStatus>,
}

/// Borrowed tools, newest loan first
pub async fn get_materials(
    materials: web::Data<MaterialRepository>,
    query: web::Query<MaterialQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = materials
        .get_materials()
        .await?
        .into_iter()
        .filter(|m| {
            contains_ignore_case(&m.material_name, &query.search)
                || contains_ignore_case(&m.borrower_name, &query.search)
                || m.unit
                    .as_deref()
                    .is_some_and(|unit| contains_ignore_case(unit, &query.search))
        })
        .filter(|m| query.status.is_none_or(|status| m.status == status))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn create_loan(
    operator: Operator,
    materials: web::Data<MaterialRepository>,
    input: web::Json<BorrowedMaterialInput>,
) -> Result<HttpResponse, AppError> {
    let mut input = input.into_inner();
    input.material_name = require(&input.material_name, "materialName")?;
    input.borrower_name = require(&input.borrower_name, "borrowerName")?;

    let loan_date = desk::short_timestamp(desk::local_now());
    let material = materials.create_loan(input, loan_date).await?;

    log::info!(
        "{} lent to {} ({})",
        material.material_name,
        material.borrower_name,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(material)))
}

/// Returning an already returned item keeps the first return date
pub async fn return_material(
    operator: Operator,
    materials: web::Data<MaterialRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let material_id = path.into_inner();
    let return_date = desk::short_timestamp(desk::local_now());

    match materials.mark_returned(material_id, return_date).await? {
        Some(material) => {
            log::info!("Material {} returned ({})", material_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(material)))
        }
        None => Err(AppError::NotFound("Material not found".to_string())),
    }
}

pub async fn delete_material(
    operator: Operator,
    materials: web::Data<MaterialRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let material_id = path.into_inner();
    let deleted = materials.delete_material(material_id).await?;

    if deleted {
        log::info!("Material {} deleted ({})", material_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
