use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{GroupPickupInput, PackageInput, PickupInput};
use crate::database::repositories::{PackageRepository, ResidentRepository};
use crate::desk::{self, PickupTarget, StatusFilter};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, DeleteResult};
use crate::services::{Operator, prepare_package};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItemsQuery {
    pub unit: String,
    pub block: String,
    #[serde(default)]
    pub search: String,
}

/// Register a package at the desk
pub async fn create_package(
    operator: Operator,
    packages: web::Data<PackageRepository>,
    residents: web::Data<ResidentRepository>,
    input: web::Json<PackageInput>,
) -> Result<HttpResponse, AppError> {
    let new_package =
        prepare_package(&residents, &packages, input.into_inner(), desk::local_now()).await?;

    let package = packages.create_package(new_package).await.map_err(|e| {
        log::error!("Failed to register package: {}", e);
        AppError::from(e)
    })?;

    log::info!(
        "Package {} registered for unit {} block {} ({})",
        package.id,
        package.unit,
        package.block,
        operator
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(package)))
}

/// List packages filtered by search term and status
pub async fn get_packages(
    packages: web::Data<PackageRepository>,
    query: web::Query<PackageQuery>,
) -> Result<HttpResponse, AppError> {
    let all = packages.get_packages().await?;
    let filtered = desk::filter_packages(all, &query.search, query.status);

    Ok(HttpResponse::Ok().json(ApiResponse::success(filtered)))
}

pub async fn get_package(
    packages: web::Data<PackageRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let package_id = path.into_inner();

    match packages.get_package_by_id(package_id).await? {
        Some(package) => Ok(HttpResponse::Ok().json(ApiResponse::success(package))),
        None => Err(AppError::NotFound("Package not found".to_string())),
    }
}

/// Pending packages grouped by block and unit
pub async fn get_package_groups(
    packages: web::Data<PackageRepository>,
    query: web::Query<GroupQuery>,
) -> Result<HttpResponse, AppError> {
    let all = packages.get_packages().await?;
    let pending = desk::filter_packages(all, &query.search, StatusFilter::Pending);

    Ok(HttpResponse::Ok().json(ApiResponse::success(desk::group_pending(pending))))
}

/// Pending packages of a single unit group
pub async fn get_group_items(
    packages: web::Data<PackageRepository>,
    query: web::Query<GroupItemsQuery>,
) -> Result<HttpResponse, AppError> {
    let block = desk::normalize_block(&query.block);
    let items: Vec<_> = desk::filter_packages(
        packages.get_packages().await?,
        &query.search,
        StatusFilter::Pending,
    )
    .into_iter()
    .filter(|pkg| desk::in_group(pkg, &query.unit, &block))
    .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

/// Hand a single package over to whoever is collecting it
pub async fn pickup_package(
    operator: Operator,
    packages: web::Data<PackageRepository>,
    path: web::Path<Uuid>,
    input: web::Json<PickupInput>,
) -> Result<HttpResponse, AppError> {
    let picker = desk::validate_picker(&input.picked_up_by)?;
    let target = PickupTarget::Single(path.into_inner());

    let outcome = packages
        .record_pickup(&target, picker, desk::local_now())
        .await?;

    if outcome.updated.is_empty() {
        log::info!("Pickup of {:?} changed nothing ({})", target, operator);
    } else {
        log::info!("Package picked up by {} ({})", picker, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(outcome)))
}

/// Hand over every pending package of a unit group at once
pub async fn pickup_group(
    operator: Operator,
    packages: web::Data<PackageRepository>,
    input: web::Json<GroupPickupInput>,
) -> Result<HttpResponse, AppError> {
    let picker = desk::validate_picker(&input.picked_up_by)?;
    let target = PickupTarget::group(input.unit.clone(), &input.block);

    let outcome = packages
        .record_pickup(&target, picker, desk::local_now())
        .await?;

    log::info!(
        "{} package(s) of {:?} picked up by {} ({})",
        outcome.updated.len(),
        target,
        picker,
        operator
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(outcome)))
}

/// Deleting an unknown id is not an error
pub async fn delete_package(
    operator: Operator,
    packages: web::Data<PackageRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let package_id = path.into_inner();
    let deleted = packages.delete_package(package_id).await?;

    if deleted {
        log::info!("Package {} deleted ({})", package_id, operator);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(DeleteResult { deleted })))
}

pub async fn get_package_stats(
    packages: web::Data<PackageRepository>,
) -> Result<HttpResponse, AppError> {
    let stats = packages.get_package_stats().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(stats)))
}
