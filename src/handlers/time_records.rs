use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::{EmployeeShift, TimeRecordInput};
use crate::database::repositories::{EmployeeRepository, TimeRecordRepository};
use crate::desk::contains_ignore_case;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::Operator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecordQuery {
    #[serde(default)]
    pub search: String,
    pub shift: Option<EmployeeShift>,
    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResult {
    pub cleared: u64,
}

/// Name copied onto the record. Unknown employees are a 404.
async fn employee_name(employees: &EmployeeRepository, id: Uuid) -> Result<String, AppError> {
    employees
        .get_employee_by_id(id)
        .await?
        .map(|employee| employee.name)
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))
}

pub async fn create_record(
    operator: Operator,
    records: web::Data<TimeRecordRepository>,
    employees: web::Data<EmployeeRepository>,
    input: web::Json<TimeRecordInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    let name = employee_name(&employees, input.employee_id).await?;
    let record = records.create_record(input, name).await?;

    log::info!(
        "Time record for {} on {} ({})",
        record.employee_name,
        record.record_date,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(record)))
}

/// Time sheet, latest day first
pub async fn get_records(
    records: web::Data<TimeRecordRepository>,
    query: web::Query<TimeRecordQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = records
        .get_records()
        .await?
        .into_iter()
        .filter(|r| {
            contains_ignore_case(&r.employee_name, &query.search)
                || contains_ignore_case(&r.observations, &query.search)
        })
        .filter(|r| query.shift.is_none_or(|shift| r.shift == shift))
        .filter(|r| query.employee_id.is_none_or(|id| r.employee_id == id))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn update_record(
    operator: Operator,
    records: web::Data<TimeRecordRepository>,
    employees: web::Data<EmployeeRepository>,
    path: web::Path<Uuid>,
    input: web::Json<TimeRecordInput>,
) -> Result<HttpResponse, AppError> {
    let record_id = path.into_inner();
    let input = input.into_inner();
    let name = employee_name(&employees, input.employee_id).await?;

    match records.update_record(record_id, input, name).await? {
        Some(record) => {
            log::info!("Time record {} updated ({})", record_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
        }
        None => Err(AppError::NotFound("Time record not found".to_string())),
    }
}

pub async fn delete_record(
    operator: Operator,
    records: web::Data<TimeRecordRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let record_id = path.into_inner();
    let deleted = records.delete_record(record_id).await?;

    if deleted {
        log::info!("Time record {} deleted ({})", record_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}

/// Empty the whole time sheet
pub async fn clear_records(
    operator: Operator,
    records: web::Data<TimeRecordRepository>,
) -> Result<HttpResponse, AppError> {
    let cleared = records.clear_records().await?;

    log::warn!("Time sheet cleared, {} record(s) removed ({})", cleared, operator);

    Ok(HttpResponse::Ok().json(ApiResponse::success(ClearResult { cleared })))
}
