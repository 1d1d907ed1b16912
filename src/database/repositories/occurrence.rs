use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{NewOccurrence, Occurrence};

#[derive(Clone)]
pub struct OccurrenceRepository {
    pool: SqlitePool,
}

impl OccurrenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_occurrence(&self, input: NewOccurrence) -> Result<Occurrence> {
        let occurrence = sqlx::query_as::<_, Occurrence>(
            r#"
            INSERT INTO
                occurrences (
                    id,
                    outgoing_employee_name,
                    incoming_employee_name,
                    description,
                    timestamp,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                outgoing_employee_name,
                incoming_employee_name,
                description,
                timestamp,
                created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.outgoing_employee_name)
        .bind(&input.incoming_employee_name)
        .bind(&input.description)
        .bind(&input.timestamp)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(occurrence)
    }

    /// All occurrences, newest first.
    pub async fn get_occurrences(&self) -> Result<Vec<Occurrence>> {
        let occurrences = sqlx::query_as::<_, Occurrence>(
            r#"
            SELECT
                id,
                outgoing_employee_name,
                incoming_employee_name,
                description,
                timestamp,
                created_at
            FROM
                occurrences
            ORDER BY
                created_at DESC,
                rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(occurrences)
    }

    pub async fn get_occurrence_by_id(&self, id: Uuid) -> Result<Option<Occurrence>> {
        let occurrence = sqlx::query_as::<_, Occurrence>(
            r#"
            SELECT
                id,
                outgoing_employee_name,
                incoming_employee_name,
                description,
                timestamp,
                created_at
            FROM
                occurrences
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(occurrence)
    }

    pub async fn delete_occurrence(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM occurrences WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
