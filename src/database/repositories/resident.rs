use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Resident, ResidentInput};

#[derive(Clone)]
pub struct ResidentRepository {
    pool: SqlitePool,
}

impl ResidentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_resident(&self, input: ResidentInput) -> Result<Resident> {
        let now = Utc::now();
        let resident = sqlx::query_as::<_, Resident>(
            r#"
            INSERT INTO
                residents (
                    id,
                    name,
                    unit,
                    block,
                    resident_type,
                    status,
                    phone,
                    cpf,
                    email,
                    observations,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                name,
                unit,
                block,
                resident_type,
                status,
                phone,
                cpf,
                email,
                observations,
                created_at,
                updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.unit)
        .bind(&input.block)
        .bind(input.resident_type)
        .bind(input.status)
        .bind(&input.phone)
        .bind(&input.cpf)
        .bind(&input.email)
        .bind(&input.observations)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(resident)
    }

    pub async fn get_resident_by_id(&self, id: Uuid) -> Result<Option<Resident>> {
        let resident = sqlx::query_as::<_, Resident>(
            r#"
            SELECT
                id,
                name,
                unit,
                block,
                resident_type,
                status,
                phone,
                cpf,
                email,
                observations,
                created_at,
                updated_at
            FROM
                residents
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resident)
    }

    pub async fn get_all_residents(&self) -> Result<Vec<Resident>> {
        let residents = sqlx::query_as::<_, Resident>(
            r#"
            SELECT
                id,
                name,
                unit,
                block,
                resident_type,
                status,
                phone,
                cpf,
                email,
                observations,
                created_at,
                updated_at
            FROM
                residents
            ORDER BY
                name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(residents)
    }

    pub async fn update_resident(
        &self,
        id: Uuid,
        input: ResidentInput,
    ) -> Result<Option<Resident>> {
        let resident = sqlx::query_as::<_, Resident>(
            r#"
            UPDATE residents
            SET
                name = ?,
                unit = ?,
                block = ?,
                resident_type = ?,
                status = ?,
                phone = ?,
                cpf = ?,
                email = ?,
                observations = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                name,
                unit,
                block,
                resident_type,
                status,
                phone,
                cpf,
                email,
                observations,
                created_at,
                updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.unit)
        .bind(&input.block)
        .bind(input.resident_type)
        .bind(input.status)
        .bind(&input.phone)
        .bind(&input.cpf)
        .bind(&input.email)
        .bind(&input.observations)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resident)
    }

    pub async fn delete_resident(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM residents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
