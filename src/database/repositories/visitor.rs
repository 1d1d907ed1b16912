use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Visitor, VisitorStatus};

const VISITOR_COLUMNS: &str = r#"
    id,
    name,
    document,
    phone,
    unit,
    block,
    resident_name,
    resident_id,
    entry_time,
    exit_time,
    status,
    observations,
    created_at
"#;

/// Visitor entry with the visited unit already resolved.
#[derive(Debug, Clone)]
pub struct NewVisitor {
    pub name: String,
    pub document: Option<String>,
    pub phone: Option<String>,
    pub unit: String,
    pub block: String,
    pub resident_name: Option<String>,
    pub resident_id: Option<Uuid>,
    pub entry_time: String,
    pub observations: String,
}

#[derive(Clone)]
pub struct VisitorRepository {
    pool: SqlitePool,
}

impl VisitorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_visitor(&self, input: NewVisitor) -> Result<Visitor> {
        let query = format!(
            r#"
            INSERT INTO
                visitors (
                    id,
                    name,
                    document,
                    phone,
                    unit,
                    block,
                    resident_name,
                    resident_id,
                    entry_time,
                    status,
                    observations,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {VISITOR_COLUMNS}
            "#
        );

        let visitor = sqlx::query_as::<_, Visitor>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.document)
            .bind(&input.phone)
            .bind(&input.unit)
            .bind(&input.block)
            .bind(&input.resident_name)
            .bind(input.resident_id)
            .bind(&input.entry_time)
            .bind(VisitorStatus::Inside)
            .bind(&input.observations)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(visitor)
    }

    /// All visits, newest first.
    pub async fn get_visitors(&self) -> Result<Vec<Visitor>> {
        let query = format!(
            "SELECT {VISITOR_COLUMNS} FROM visitors ORDER BY created_at DESC, rowid DESC"
        );

        let visitors = sqlx::query_as::<_, Visitor>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(visitors)
    }

    pub async fn get_visitor_by_id(&self, id: Uuid) -> Result<Option<Visitor>> {
        let query = format!("SELECT {VISITOR_COLUMNS} FROM visitors WHERE id = ?");

        let visitor = sqlx::query_as::<_, Visitor>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(visitor)
    }

    /// Register the exit. A second call keeps the first exit time.
    pub async fn register_exit(&self, id: Uuid, exit_time: String) -> Result<Option<Visitor>> {
        let query = format!(
            r#"
            UPDATE visitors
            SET status = ?, exit_time = ?
            WHERE id = ? AND status = ?
            RETURNING {VISITOR_COLUMNS}
            "#
        );

        let visitor = sqlx::query_as::<_, Visitor>(&query)
            .bind(VisitorStatus::Left)
            .bind(exit_time)
            .bind(id)
            .bind(VisitorStatus::Inside)
            .fetch_optional(&self.pool)
            .await?;

        match visitor {
            Some(visitor) => Ok(Some(visitor)),
            None => self.get_visitor_by_id(id).await,
        }
    }

    pub async fn delete_visitor(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM visitors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
