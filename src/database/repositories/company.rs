use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Company, CompanyInput};

const COMPANY_COLUMNS: &str = r#"
    id,
    name,
    company_type,
    phone,
    status,
    observations,
    created_at,
    updated_at
"#;

#[derive(Clone)]
pub struct CompanyRepository {
    pool: SqlitePool,
}

impl CompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_company(&self, input: CompanyInput) -> Result<Company> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO
                companies (
                    id,
                    name,
                    company_type,
                    phone,
                    status,
                    observations,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {COMPANY_COLUMNS}
            "#
        );

        let company = sqlx::query_as::<_, Company>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(input.company_type)
            .bind(&input.phone)
            .bind(input.status)
            .bind(&input.observations)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(company)
    }

    /// Companies ordered by name.
    pub async fn get_companies(&self) -> Result<Vec<Company>> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies ORDER BY name");

        let companies = sqlx::query_as::<_, Company>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(companies)
    }

    pub async fn get_company_by_id(&self, id: Uuid) -> Result<Option<Company>> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?");

        let company = sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(company)
    }

    pub async fn update_company(
        &self,
        id: Uuid,
        input: CompanyInput,
    ) -> Result<Option<Company>> {
        let query = format!(
            r#"
            UPDATE companies
            SET
                name = ?,
                company_type = ?,
                phone = ?,
                status = ?,
                observations = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING {COMPANY_COLUMNS}
            "#
        );

        let company = sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(input.company_type)
            .bind(&input.phone)
            .bind(input.status)
            .bind(&input.observations)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(company)
    }

    pub async fn delete_company(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
