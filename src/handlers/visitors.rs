use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{VisitorInput, VisitorStatus};
use crate::database::repositories::{ResidentRepository, VisitorRepository};
use crate::desk::{self, contains_ignore_case};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::{Operator, prepare_visitor};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<VisitorStatus>,
}

pub async fn get_visitors(
    visitors: web::Data<VisitorRepository>,
    query: web::Query<VisitorQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = visitors
        .get_visitors()
        .await?
        .into_iter()
        .filter(|v| {
            contains_ignore_case(&v.name, &query.search)
                || contains_ignore_case(&v.unit, &query.search)
                || contains_ignore_case(&v.block, &query.search)
                || v.resident_name
                    .as_deref()
                    .is_some_and(|name| contains_ignore_case(name, &query.search))
        })
        .filter(|v| query.status.is_none_or(|status| v.status == status))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

/// Register a visitor walking in
pub async fn register_entry(
    operator: Operator,
    visitors: web::Data<VisitorRepository>,
    residents: web::Data<ResidentRepository>,
    input: web::Json<VisitorInput>,
) -> Result<HttpResponse, AppError> {
    let new_visitor = prepare_visitor(&residents, input.into_inner(), desk::local_now()).await?;
    let visitor = visitors.create_visitor(new_visitor).await?;

    log::info!(
        "Visitor {} entered for unit {} ({})",
        visitor.name,
        visitor.unit,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(visitor)))
}

pub async fn register_exit(
    operator: Operator,
    visitors: web::Data<VisitorRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let visitor_id = path.into_inner();
    let exit_time = desk::short_timestamp(desk::local_now());

    match visitors.register_exit(visitor_id, exit_time).await? {
        Some(visitor) => {
            log::info!("Visitor {} left ({})", visitor_id, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(visitor)))
        }
        None => Err(AppError::NotFound("Visitor not found".to_string())),
    }
}

pub async fn delete_visitor(
    operator: Operator,
    visitors: web::Data<VisitorRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let visitor_id = path.into_inner();
    let deleted = visitors.delete_visitor(visitor_id).await?;

    if deleted {
        log::info!("Visitor {} deleted ({})", visitor_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
