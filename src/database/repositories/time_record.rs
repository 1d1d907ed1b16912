use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{TimeRecord, TimeRecordInput};

const TIME_RECORD_COLUMNS: &str = r#"
    id,
    employee_id,
    employee_name,
    record_date,
    shift,
    entry_time,
    exit_time,
    record_type,
    observations,
    created_at
"#;

#[derive(Clone)]
pub struct TimeRecordRepository {
    pool: SqlitePool,
}

impl TimeRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_record(
        &self,
        input: TimeRecordInput,
        employee_name: String,
    ) -> Result<TimeRecord> {
        let query = format!(
            r#"
            INSERT INTO
                time_records (
                    id,
                    employee_id,
                    employee_name,
                    record_date,
                    shift,
                    entry_time,
                    exit_time,
                    record_type,
                    observations,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {TIME_RECORD_COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, TimeRecord>(&query)
            .bind(Uuid::new_v4())
            .bind(input.employee_id)
            .bind(employee_name)
            .bind(input.record_date)
            .bind(input.shift)
            .bind(&input.entry_time)
            .bind(&input.exit_time)
            .bind(input.record_type)
            .bind(&input.observations)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    /// Most recent day first.
    pub async fn get_records(&self) -> Result<Vec<TimeRecord>> {
        let query = format!(
            "SELECT {TIME_RECORD_COLUMNS} FROM time_records ORDER BY record_date DESC, rowid DESC"
        );

        let records = sqlx::query_as::<_, TimeRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    pub async fn update_record(
        &self,
        id: Uuid,
        input: TimeRecordInput,
        employee_name: String,
    ) -> Result<Option<TimeRecord>> {
        let query = format!(
            r#"
            UPDATE time_records
            SET
                employee_id = ?,
                employee_name = ?,
                record_date = ?,
                shift = ?,
                entry_time = ?,
                exit_time = ?,
                record_type = ?,
                observations = ?
            WHERE
                id = ?
            RETURNING {TIME_RECORD_COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, TimeRecord>(&query)
            .bind(input.employee_id)
            .bind(employee_name)
            .bind(input.record_date)
            .bind(input.shift)
            .bind(&input.entry_time)
            .bind(&input.exit_time)
            .bind(input.record_type)
            .bind(&input.observations)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn delete_record(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM time_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Wipes the whole time sheet. Returns how many rows went.
    pub async fn clear_records(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM time_records")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
