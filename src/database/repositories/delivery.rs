use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{
    DeliveryDriver, DeliveryDriverInput, DeliveryVisit, NewDeliveryVisit,
};

const DRIVER_COLUMNS: &str = r#"
    id,
    name,
    company_id,
    company_name,
    phone,
    cpf,
    rg,
    status,
    observations,
    created_at,
    updated_at
"#;

const VISIT_COLUMNS: &str = r#"
    id,
    driver_id,
    driver_name,
    company_name,
    entry_time,
    package_count,
    shift,
    observations,
    created_at
"#;

/// Drivers and their drop-offs at the desk.
#[derive(Clone)]
pub struct DeliveryRepository {
    pool: SqlitePool,
}

impl DeliveryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_driver(
        &self,
        input: DeliveryDriverInput,
        company_name: String,
    ) -> Result<DeliveryDriver> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO
                delivery_drivers (
                    id,
                    name,
                    company_id,
                    company_name,
                    phone,
                    cpf,
                    rg,
                    status,
                    observations,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {DRIVER_COLUMNS}
            "#
        );

        let driver = sqlx::query_as::<_, DeliveryDriver>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(input.company_id)
            .bind(company_name)
            .bind(&input.phone)
            .bind(&input.cpf)
            .bind(&input.rg)
            .bind(input.status)
            .bind(&input.observations)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(driver)
    }

    /// Drivers ordered by name.
    pub async fn get_drivers(&self) -> Result<Vec<DeliveryDriver>> {
        let query = format!("SELECT {DRIVER_COLUMNS} FROM delivery_drivers ORDER BY name");

        let drivers = sqlx::query_as::<_, DeliveryDriver>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(drivers)
    }

    pub async fn get_driver_by_id(&self, id: Uuid) -> Result<Option<DeliveryDriver>> {
        let query = format!("SELECT {DRIVER_COLUMNS} FROM delivery_drivers WHERE id = ?");

        let driver = sqlx::query_as::<_, DeliveryDriver>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn update_driver(
        &self,
        id: Uuid,
        input: DeliveryDriverInput,
        company_name: String,
    ) -> Result<Option<DeliveryDriver>> {
        let query = format!(
            r#"
            UPDATE delivery_drivers
            SET
                name = ?,
                company_id = ?,
                company_name = ?,
                phone = ?,
                cpf = ?,
                rg = ?,
                status = ?,
                observations = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING {DRIVER_COLUMNS}
            "#
        );

        let driver = sqlx::query_as::<_, DeliveryDriver>(&query)
            .bind(&input.name)
            .bind(input.company_id)
            .bind(company_name)
            .bind(&input.phone)
            .bind(&input.cpf)
            .bind(&input.rg)
            .bind(input.status)
            .bind(&input.observations)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn delete_driver(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM delivery_drivers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn create_visit(
        &self,
        input: NewDeliveryVisit,
        entry_time: String,
    ) -> Result<DeliveryVisit> {
        let query = format!(
            r#"
            INSERT INTO
                delivery_visits (
                    id,
                    driver_id,
                    driver_name,
                    company_name,
                    entry_time,
                    package_count,
                    shift,
                    observations,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {VISIT_COLUMNS}
            "#
        );

        let visit = sqlx::query_as::<_, DeliveryVisit>(&query)
            .bind(Uuid::new_v4())
            .bind(input.driver_id)
            .bind(&input.driver_name)
            .bind(&input.company_name)
            .bind(entry_time)
            .bind(input.package_count)
            .bind(input.shift)
            .bind(&input.observations)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(visit)
    }

    /// All visits, newest first.
    pub async fn get_visits(&self) -> Result<Vec<DeliveryVisit>> {
        let query = format!(
            "SELECT {VISIT_COLUMNS} FROM delivery_visits ORDER BY created_at DESC, rowid DESC"
        );

        let visits = sqlx::query_as::<_, DeliveryVisit>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(visits)
    }

    /// Rewrites a visit. The entry time recorded at the desk is kept.
    pub async fn update_visit(
        &self,
        id: Uuid,
        input: NewDeliveryVisit,
    ) -> Result<Option<DeliveryVisit>> {
        let query = format!(
            r#"
            UPDATE delivery_visits
            SET
                driver_id = ?,
                driver_name = ?,
                company_name = ?,
                package_count = ?,
                shift = ?,
                observations = ?
            WHERE
                id = ?
            RETURNING {VISIT_COLUMNS}
            "#
        );

        let visit = sqlx::query_as::<_, DeliveryVisit>(&query)
            .bind(input.driver_id)
            .bind(&input.driver_name)
            .bind(&input.company_name)
            .bind(input.package_count)
            .bind(input.shift)
            .bind(&input.observations)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(visit)
    }

    pub async fn delete_visit(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM delivery_visits WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
