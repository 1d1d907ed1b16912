use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{CompanyInput, CompanyStatus};
use crate::database::repositories::CompanyRepository;
use crate::desk::{contains_ignore_case, require};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::Operator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<CompanyStatus>,
}

fn validate(mut input: CompanyInput) -> Result<CompanyInput, AppError> {
    input.name = require(&input.name, "name")?;
    input.phone = input.phone.trim().to_string();
    Ok(input)
}

pub async fn create_company(
    operator: Operator,
    companies: web::Data<CompanyRepository>,
    input: web::Json<CompanyInput>,
) -> Result<HttpResponse, AppError> {
    let input = validate(input.into_inner())?;
    let company = companies.create_company(input).await?;

    log::info!("Company {} registered ({})", company.name, operator);

    Ok(HttpResponse::Created().json(ApiResponse::success(company)))
}

/// Companies ordered by name, searchable by name
pub async fn get_companies(
    companies: web::Data<CompanyRepository>,
    query: web::Query<CompanyQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = companies
        .get_companies()
        .await?
        .into_iter()
        .filter(|c| contains_ignore_case(&c.name, &query.search))
        .filter(|c| query.status.is_none_or(|status| c.status == status))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_company(
    companies: web::Data<CompanyRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match companies.get_company_by_id(path.into_inner()).await? {
        Some(company) => Ok(HttpResponse::Ok().json(ApiResponse::success(company))),
        None => Err(AppError::NotFound("Company not found".to_string())),
    }
}

pub async fn update_company(
    operator: Operator,
    companies: web::Data<CompanyRepository>,
    path: web::Path<Uuid>,
    input: web::Json<CompanyInput>,
) -> Result<HttpResponse, AppError> {
    let company_id = path.into_inner();
    let input = validate(input.into_inner())?;

    match companies.update_company(company_id, input).await? {
        Some(company) => {
            log::info!("Company {} updated ({})", company_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(company)))
        }
        None => Err(AppError::NotFound("Company not found".to_string())),
    }
}

pub async fn delete_company(
    operator: Operator,
    companies: web::Data<CompanyRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let company_id = path.into_inner();
    let deleted = companies.delete_company(company_id).await?;

    if deleted {
        log::info!("Company {} deleted ({})", company_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
