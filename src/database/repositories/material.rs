use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{BorrowedMaterial, BorrowedMaterialInput, MaterialStatus};

const MATERIAL_COLUMNS: &str = r#"
    id,
    material_name,
    borrower_type,
    borrower_name,
    unit,
    block,
    document,
    phone,
    loan_date,
    return_date,
    status,
    observations,
    created_at
"#;

#[derive(Clone)]
pub struct MaterialRepository {
    pool: SqlitePool,
}

impl MaterialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_loan(
        &self,
        input: BorrowedMaterialInput,
        loan_date: String,
    ) -> Result<BorrowedMaterial> {
        let query = format!(
            r#"
            INSERT INTO
                borrowed_materials (
                    id,
                    material_name,
                    borrower_type,
                    borrower_name,
                    unit,
                    block,
                    document,
                    phone,
                    loan_date,
                    status,
                    observations,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {MATERIAL_COLUMNS}
            "#
        );

        let material = sqlx::query_as::<_, BorrowedMaterial>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.material_name)
            .bind(input.borrower_type)
            .bind(&input.borrower_name)
            .bind(&input.unit)
            .bind(&input.block)
            .bind(&input.document)
            .bind(&input.phone)
            .bind(loan_date)
            .bind(MaterialStatus::Borrowed)
            .bind(&input.observations)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(material)
    }

    /// All loans, newest first.
    pub async fn get_materials(&self) -> Result<Vec<BorrowedMaterial>> {
        let query = format!(
            "SELECT {MATERIAL_COLUMNS} FROM borrowed_materials ORDER BY created_at DESC, rowid DESC"
        );

        let materials = sqlx::query_as::<_, BorrowedMaterial>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(materials)
    }

    pub async fn get_material_by_id(&self, id: Uuid) -> Result<Option<BorrowedMaterial>> {
        let query = format!("SELECT {MATERIAL_COLUMNS} FROM borrowed_materials WHERE id = ?");

        let material = sqlx::query_as::<_, BorrowedMaterial>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(material)
    }

    /// Mark a loan as returned. Returning twice keeps the first return date.
    pub async fn mark_returned(
        &self,
        id: Uuid,
        return_date: String,
    ) -> Result<Option<BorrowedMaterial>> {
        let query = format!(
            r#"
            UPDATE borrowed_materials
            SET status = ?, return_date = ?
            WHERE id = ? AND status = ?
            RETURNING {MATERIAL_COLUMNS}
            "#
        );

        let returned = sqlx::query_as::<_, BorrowedMaterial>(&query)
            .bind(MaterialStatus::Returned)
            .bind(return_date)
            .bind(id)
            .bind(MaterialStatus::Borrowed)
            .fetch_optional(&self.pool)
            .await?;

        match returned {
            Some(material) => Ok(Some(material)),
            None => self.get_material_by_id(id).await,
        }
    }

    pub async fn delete_material(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM borrowed_materials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
