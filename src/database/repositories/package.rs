use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{NewPackage, Package, PackageStats, PackageStatus, PickupOutcome};
use crate::desk::{self, PickupTarget};

const PACKAGE_COLUMNS: &str = r#"
    id,
    unit,
    block,
    recipient_name,
    package_type,
    sender,
    tracking_code,
    withdrawal_code,
    received_at,
    status,
    description,
    observations,
    picked_up_by,
    picked_up_at,
    created_at
"#;

#[derive(Clone)]
pub struct PackageRepository {
    pool: SqlitePool,
}

impl PackageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a package at intake. New packages always await pickup.
    pub async fn create_package(&self, input: NewPackage) -> Result<Package> {
        let query = format!(
            r#"
            INSERT INTO
                packages (
                    id,
                    unit,
                    block,
                    recipient_name,
                    package_type,
                    sender,
                    tracking_code,
                    withdrawal_code,
                    received_at,
                    status,
                    description,
                    observations,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {PACKAGE_COLUMNS}
            "#
        );

        let package = sqlx::query_as::<_, Package>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.unit)
            .bind(&input.block)
            .bind(&input.recipient_name)
            .bind(&input.package_type)
            .bind(&input.sender)
            .bind(&input.tracking_code)
            .bind(&input.withdrawal_code)
            .bind(&input.received_at)
            .bind(PackageStatus::AwaitingPickup)
            .bind(&input.description)
            .bind(&input.observations)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(package)
    }

    /// All packages, newest first.
    pub async fn get_packages(&self) -> Result<Vec<Package>> {
        let query = format!(
            "SELECT {PACKAGE_COLUMNS} FROM packages ORDER BY created_at DESC, rowid DESC"
        );

        let packages = sqlx::query_as::<_, Package>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(packages)
    }

    pub async fn get_package_by_id(&self, id: Uuid) -> Result<Option<Package>> {
        let query = format!("SELECT {PACKAGE_COLUMNS} FROM packages WHERE id = ?");

        let package = sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(package)
    }

    /// Withdrawal codes of packages still waiting at the desk.
    pub async fn get_pending_withdrawal_codes(&self) -> Result<Vec<String>> {
        let codes = sqlx::query_scalar::<_, String>(
            "SELECT withdrawal_code FROM packages WHERE status = ?",
        )
        .bind(PackageStatus::AwaitingPickup)
        .fetch_all(&self.pool)
        .await?;

        Ok(codes)
    }

    /// Apply a single or bulk pickup in one transaction.
    ///
    /// Stale ids and already picked up packages are skipped, so the outcome
    /// may list no updates at all.
    pub async fn record_pickup(
        &self,
        target: &PickupTarget,
        picker_name: &str,
        now: NaiveDateTime,
    ) -> Result<PickupOutcome> {
        let mut tx = self.pool.begin().await?;

        let mut candidates = match target {
            PickupTarget::Single(id) => {
                let query = format!("SELECT {PACKAGE_COLUMNS} FROM packages WHERE id = ?");
                sqlx::query_as::<_, Package>(&query)
                    .bind(id)
                    .fetch_all(&mut *tx)
                    .await?
            }
            PickupTarget::Group { unit, .. } => {
                let query = format!(
                    r#"
                    SELECT {PACKAGE_COLUMNS}
                    FROM packages
                    WHERE unit = ? AND status = ?
                    ORDER BY created_at DESC, rowid DESC
                    "#
                );
                sqlx::query_as::<_, Package>(&query)
                    .bind(unit)
                    .bind(PackageStatus::AwaitingPickup)
                    .fetch_all(&mut *tx)
                    .await?
            }
        };

        let changed = desk::record_pickup(&mut candidates, target, picker_name, now)?;

        for pkg in candidates.iter().filter(|pkg| changed.contains(&pkg.id)) {
            sqlx::query(
                r#"
                UPDATE packages
                SET status = ?, picked_up_by = ?, picked_up_at = ?
                WHERE id = ? AND status = ?
                "#,
            )
            .bind(pkg.status)
            .bind(&pkg.picked_up_by)
            .bind(&pkg.picked_up_at)
            .bind(pkg.id)
            .bind(PackageStatus::AwaitingPickup)
            .execute(&mut *tx)
            .await?;
        }

        // Whatever group the pickup touched, count what is still waiting there.
        let group_key = match target {
            PickupTarget::Group { unit, block } => Some((unit.clone(), block.clone())),
            PickupTarget::Single(_) => candidates
                .first()
                .map(|pkg| (pkg.unit.clone(), desk::normalize_block(&pkg.block))),
        };

        let remaining_in_group = match group_key {
            Some((unit, block)) => {
                let query = format!(
                    "SELECT {PACKAGE_COLUMNS} FROM packages WHERE unit = ? AND status = ?"
                );
                sqlx::query_as::<_, Package>(&query)
                    .bind(&unit)
                    .bind(PackageStatus::AwaitingPickup)
                    .fetch_all(&mut *tx)
                    .await?
                    .iter()
                    .filter(|pkg| desk::in_group(pkg, &unit, &block))
                    .count()
            }
            None => 0,
        };

        tx.commit().await?;

        let updated: Vec<Package> = candidates
            .into_iter()
            .filter(|pkg| changed.contains(&pkg.id))
            .collect();

        Ok(PickupOutcome {
            updated,
            remaining_in_group,
        })
    }

    pub async fn delete_package(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM packages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn get_package_stats(&self) -> Result<PackageStats> {
        let rows = sqlx::query_as::<_, (PackageStatus, i64)>(
            "SELECT status, COUNT(*) FROM packages GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut stats = PackageStats::default();
        for (status, count) in rows {
            let count = count as usize;
            stats.total += count;
            match status {
                PackageStatus::AwaitingPickup => stats.pending += count,
                PackageStatus::PickedUp => stats.picked_up += count,
            }
        }

        Ok(stats)
    }
}
