use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::OccurrenceInput;
use crate::database::repositories::{EmployeeRepository, OccurrenceRepository};
use crate::desk::{self, HandoverDraft, contains_ignore_case};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::Operator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceQuery {
    #[serde(default)]
    pub search: String,
}

/// List occurrences, newest first, optionally filtered by search term
pub async fn get_occurrences(
    occurrences: web::Data<OccurrenceRepository>,
    query: web::Query<OccurrenceQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = occurrences
        .get_occurrences()
        .await?
        .into_iter()
        .filter(|occ| {
            contains_ignore_case(&occ.description, &query.search)
                || contains_ignore_case(&occ.outgoing_employee_name, &query.search)
                || contains_ignore_case(&occ.incoming_employee_name, &query.search)
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_occurrence(
    occurrences: web::Data<OccurrenceRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match occurrences.get_occurrence_by_id(path.into_inner()).await? {
        Some(occurrence) => Ok(HttpResponse::Ok().json(ApiResponse::success(occurrence))),
        None => Err(AppError::NotFound("Occurrence not found".to_string())),
    }
}

/// Direct occurrence form
pub async fn create_occurrence(
    operator: Operator,
    employees: web::Data<EmployeeRepository>,
    occurrences: web::Data<OccurrenceRepository>,
    input: web::Json<OccurrenceInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    let draft = HandoverDraft {
        outgoing_employee_name: input.outgoing_employee_name,
        incoming_employee_name: input.incoming_employee_name,
        note: input.description,
    };

    let roster = employees.get_roster().await?;
    let new_occurrence = desk::compose_handover(&roster, &draft, desk::local_now())?;
    let occurrence = occurrences.create_occurrence(new_occurrence).await?;

    log::info!("Occurrence {} recorded ({})", occurrence.id, operator);

    Ok(HttpResponse::Created().json(ApiResponse::success(occurrence)))
}

/// Save the shift notepad as a handover occurrence.
///
/// A rejected handover answers 400 with the untouched draft in `data`, so
/// the client can keep the notes on screen.
pub async fn create_handover(
    operator: Operator,
    employees: web::Data<EmployeeRepository>,
    occurrences: web::Data<OccurrenceRepository>,
    input: web::Json<HandoverDraft>,
) -> Result<HttpResponse, AppError> {
    let draft = input.into_inner();
    let roster = employees.get_roster().await?;

    let new_occurrence = match desk::compose_handover(&roster, &draft, desk::local_now()) {
        Ok(occurrence) => occurrence,
        Err(err) => {
            log::warn!("Handover rejected: {} ({})", err, operator);
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_with_data(draft, &err.to_string())));
        }
    };

    let occurrence = occurrences.create_occurrence(new_occurrence).await?;

    log::info!(
        "Shift handed over from {} to {} ({})",
        occurrence.outgoing_employee_name,
        occurrence.incoming_employee_name,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(occurrence)))
}

pub async fn delete_occurrence(
    operator: Operator,
    occurrences: web::Data<OccurrenceRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let occurrence_id = path.into_inner();
    let deleted = occurrences.delete_occurrence(occurrence_id).await?;

    if deleted {
        log::info!("Occurrence {} deleted ({})", occurrence_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
