use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{EmployeeInput, EmployeeStatus};
use crate::database::repositories::EmployeeRepository;
use crate::desk::{contains_ignore_case, require};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::Operator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<EmployeeStatus>,
}

fn validate(mut input: EmployeeInput) -> Result<EmployeeInput, AppError> {
    input.name = require(&input.name, "name")?;
    input.role = input.role.trim().to_string();
    Ok(input)
}

pub async fn create_employee(
    operator: Operator,
    employees: web::Data<EmployeeRepository>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let input = validate(input.into_inner())?;
    let employee = employees.create_employee(input).await.map_err(|e| {
        log::error!("Failed to create employee: {}", e);
        AppError::from(e)
    })?;

    log::info!("Employee {} created ({})", employee.id, operator);

    Ok(HttpResponse::Created().json(ApiResponse::success(employee)))
}

pub async fn get_employees(
    employees: web::Data<EmployeeRepository>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = employees
        .get_all_employees()
        .await?
        .into_iter()
        .filter(|e| {
            contains_ignore_case(&e.name, &query.search)
                || contains_ignore_case(&e.role, &query.search)
                || contains_ignore_case(&e.cpf, &query.search)
        })
        .filter(|e| query.status.is_none_or(|status| e.status == status))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_employee(
    employees: web::Data<EmployeeRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match employees.get_employee_by_id(path.into_inner()).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(ApiResponse::success(employee))),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

pub async fn update_employee(
    operator: Operator,
    employees: web::Data<EmployeeRepository>,
    path: web::Path<Uuid>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let input = validate(input.into_inner())?;

    match employees.update_employee(employee_id, input).await? {
        Some(employee) => {
            log::info!("Employee {} updated ({})", employee_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
        }
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

pub async fn delete_employee(
    operator: Operator,
    employees: web::Data<EmployeeRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let deleted = employees.delete_employee(employee_id).await?;

    if deleted {
        log::info!("Employee {} deleted ({})", employee_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
