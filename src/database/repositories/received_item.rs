use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{NewReceivedItem, PackageStatus, ReceivedItem};

const RECEIVED_ITEM_COLUMNS: &str = r#"
    id,
    operation_type,
    unit,
    block,
    recipient_name,
    resident_id,
    left_by,
    document,
    description,
    shift,
    observations,
    received_at,
    status,
    picked_up_by,
    picked_up_at,
    created_at
"#;

#[derive(Clone)]
pub struct ReceivedItemRepository {
    pool: SqlitePool,
}

impl ReceivedItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_item(&self, input: NewReceivedItem) -> Result<ReceivedItem> {
        let query = format!(
            r#"
            INSERT INTO
                received_items (
                    id,
                    operation_type,
                    unit,
                    block,
                    recipient_name,
                    resident_id,
                    left_by,
                    document,
                    description,
                    shift,
                    observations,
                    received_at,
                    status,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {RECEIVED_ITEM_COLUMNS}
            "#
        );

        let item = sqlx::query_as::<_, ReceivedItem>(&query)
            .bind(Uuid::new_v4())
            .bind(input.operation_type)
            .bind(&input.unit)
            .bind(&input.block)
            .bind(&input.recipient_name)
            .bind(input.resident_id)
            .bind(&input.left_by)
            .bind(&input.document)
            .bind(&input.description)
            .bind(&input.shift)
            .bind(&input.observations)
            .bind(&input.received_at)
            .bind(PackageStatus::AwaitingPickup)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(item)
    }

    /// All items, newest first.
    pub async fn get_items(&self) -> Result<Vec<ReceivedItem>> {
        let query = format!(
            r#"
            SELECT {RECEIVED_ITEM_COLUMNS}
            FROM received_items
            ORDER BY created_at DESC, rowid DESC
            "#
        );

        let items = sqlx::query_as::<_, ReceivedItem>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    pub async fn get_item_by_id(&self, id: Uuid) -> Result<Option<ReceivedItem>> {
        let query = format!("SELECT {RECEIVED_ITEM_COLUMNS} FROM received_items WHERE id = ?");

        let item = sqlx::query_as::<_, ReceivedItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    /// Hand the item over. A second pickup keeps the first picker and time.
    pub async fn record_pickup(
        &self,
        id: Uuid,
        picked_up_by: &str,
        picked_up_at: String,
    ) -> Result<Option<ReceivedItem>> {
        let query = format!(
            r#"
            UPDATE received_items
            SET status = ?, picked_up_by = ?, picked_up_at = ?
            WHERE id = ? AND status = ?
            RETURNING {RECEIVED_ITEM_COLUMNS}
            "#
        );

        let item = sqlx::query_as::<_, ReceivedItem>(&query)
            .bind(PackageStatus::PickedUp)
            .bind(picked_up_by)
            .bind(picked_up_at)
            .bind(id)
            .bind(PackageStatus::AwaitingPickup)
            .fetch_optional(&self.pool)
            .await?;

        match item {
            Some(item) => Ok(Some(item)),
            None => self.get_item_by_id(id).await,
        }
    }

    pub async fn delete_item(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM received_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
