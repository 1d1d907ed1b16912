use actix_web::{HttpResponse, web};

use crate::database::repositories::StatsRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn get_dashboard_stats(
    stats: web::Data<StatsRepository>,
) -> Result<HttpResponse, AppError> {
    let dashboard = stats.get_dashboard_stats().await.map_err(|e| {
        log::error!("Failed to load dashboard stats: {}", e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard)))
}
