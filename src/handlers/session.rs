use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::database::repositories::EmployeeRepository;
use crate::desk::require;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub const OPERATOR_ROLE: &str = "OPERADOR";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub name: String,
    pub role: String,
}

pub async fn get_roster(
    employees: web::Data<EmployeeRepository>,
) -> Result<HttpResponse, AppError> {
    let roster = employees.get_roster().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(roster)))
}

/// Operator picks their own name from the roster. There is no password.
pub async fn login(
    employees: web::Data<EmployeeRepository>,
    input: web::Json<LoginInput>,
) -> Result<HttpResponse, AppError> {
    let name = require(&input.name, "name")?;
    let roster = employees.get_roster().await?;

    match roster.iter().find(|entry| entry.name == name) {
        Some(entry) if entry.active => {
            log::info!("Operator {} started a session", entry.name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(SessionInfo {
                name: entry.name.clone(),
                role: OPERATOR_ROLE.to_string(),
            })))
        }
        Some(_) => Err(AppError::BadRequest(format!(
            "Employee {} is not active",
            name
        ))),
        None => Err(AppError::BadRequest(format!("Unknown employee: {}", name))),
    }
}
