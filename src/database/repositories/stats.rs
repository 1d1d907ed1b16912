use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{
    DashboardStats, EmployeeStatus, MaterialStatus, PackageStatus, VisitorStatus,
};

#[derive(Clone)]
pub struct StatsRepository {
    pool: SqlitePool,
}

impl StatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        let total_packages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM packages")
            .fetch_one(&self.pool)
            .await?;

        let pending_packages: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM packages WHERE status = ?")
                .bind(PackageStatus::AwaitingPickup)
                .fetch_one(&self.pool)
                .await?;

        let total_occurrences: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM occurrences")
            .fetch_one(&self.pool)
            .await?;

        let total_employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        let active_employees: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE status = ?")
                .bind(EmployeeStatus::Active)
                .fetch_one(&self.pool)
                .await?;

        let visitors_inside: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM visitors WHERE status = ?")
                .bind(VisitorStatus::Inside)
                .fetch_one(&self.pool)
                .await?;

        let materials_on_loan: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM borrowed_materials WHERE status = ?")
                .bind(MaterialStatus::Borrowed)
                .fetch_one(&self.pool)
                .await?;

        Ok(DashboardStats {
            pending_packages,
            total_packages,
            total_occurrences,
            active_employees,
            total_employees,
            visitors_inside,
            materials_on_loan,
        })
    }
}
