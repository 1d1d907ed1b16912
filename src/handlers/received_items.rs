use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{PickupInput, ReceivedItemInput};
use crate::database::repositories::{ReceivedItemRepository, ResidentRepository};
use crate::desk::{self, StatusFilter, contains_ignore_case};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::{Operator, prepare_received_item};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedItemQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
}

/// Register an item left at the desk
pub async fn create_item(
    operator: Operator,
    items: web::Data<ReceivedItemRepository>,
    residents: web::Data<ResidentRepository>,
    input: web::Json<ReceivedItemInput>,
) -> Result<HttpResponse, AppError> {
    let new_item = prepare_received_item(&residents, input.into_inner(), desk::local_now()).await?;
    let item = items.create_item(new_item).await?;

    log::info!(
        "Item {} left by {} for unit {} ({})",
        item.id,
        item.left_by,
        item.unit,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(item)))
}

/// Items newest first; search covers description, unit, block and who left it
pub async fn get_items(
    items: web::Data<ReceivedItemRepository>,
    query: web::Query<ReceivedItemQuery>,
) -> Result<HttpResponse, AppError> {
    let filtered: Vec<_> = items
        .get_items()
        .await?
        .into_iter()
        .filter(|i| {
            contains_ignore_case(&i.description, &query.search)
                || contains_ignore_case(&i.unit, &query.search)
                || contains_ignore_case(&i.block, &query.search)
                || contains_ignore_case(&i.left_by, &query.search)
        })
        .filter(|i| query.status.accepts(i.status))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_item(
    items: web::Data<ReceivedItemRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match items.get_item_by_id(path.into_inner()).await? {
        Some(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        None => Err(AppError::NotFound("Received item not found".to_string())),
    }
}

/// Picking up an item twice keeps the first pickup
pub async fn pickup_item(
    operator: Operator,
    items: web::Data<ReceivedItemRepository>,
    path: web::Path<Uuid>,
    input: web::Json<PickupInput>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();
    let picker = desk::validate_picker(&input.picked_up_by)?;
    let picked_up_at = desk::short_timestamp(desk::local_now());

    match items.record_pickup(item_id, picker, picked_up_at).await? {
        Some(item) => {
            log::info!("Item {} picked up by {} ({})", item_id, picker, operator);
            Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
        }
        None => Err(AppError::NotFound("Received item not found".to_string())),
    }
}

pub async fn delete_item(
    operator: Operator,
    items: web::Data<ReceivedItemRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();
    let deleted = items.delete_item(item_id).await?;

    if deleted {
        log::info!("Received item {} deleted ({})", item_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}
