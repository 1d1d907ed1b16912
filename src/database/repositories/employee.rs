use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{Employee, EmployeeInput, RosterEntry};

const EMPLOYEE_COLUMNS: &str = r#"
    id,
    name,
    cpf,
    role,
    shift,
    status,
    entry_time,
    exit_time,
    phone,
    email,
    admission_date,
    photo_url,
    observations,
    created_at,
    updated_at
"#;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_employee(&self, input: EmployeeInput) -> Result<Employee> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO
                employees (
                    id,
                    name,
                    cpf,
                    role,
                    shift,
                    status,
                    entry_time,
                    exit_time,
                    phone,
                    email,
                    admission_date,
                    photo_url,
                    observations,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );

        let employee = sqlx::query_as::<_, Employee>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.cpf)
            .bind(&input.role)
            .bind(input.shift)
            .bind(input.status)
            .bind(&input.entry_time)
            .bind(&input.exit_time)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.admission_date)
            .bind(&input.photo_url)
            .bind(&input.observations)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(employee)
    }

    pub async fn get_employee_by_id(&self, id: Uuid) -> Result<Option<Employee>> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");

        let employee = sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY name");

        let employees = sqlx::query_as::<_, Employee>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    /// Staff offered in the selectors, ordered by name.
    ///
    /// An empty table yields the fallback administrator so the desk stays
    /// usable before anyone is registered.
    pub async fn get_roster(&self) -> Result<Vec<RosterEntry>> {
        let employees = self.get_all_employees().await?;
        if employees.is_empty() {
            return Ok(vec![RosterEntry::fallback_admin()]);
        }
        Ok(employees.iter().map(RosterEntry::from).collect())
    }

    pub async fn update_employee(
        &self,
        id: Uuid,
        input: EmployeeInput,
    ) -> Result<Option<Employee>> {
        let query = format!(
            r#"
            UPDATE employees
            SET
                name = ?,
                cpf = ?,
                role = ?,
                shift = ?,
                status = ?,
                entry_time = ?,
                exit_time = ?,
                phone = ?,
                email = ?,
                admission_date = ?,
                photo_url = ?,
                observations = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );

        let employee = sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.cpf)
            .bind(&input.role)
            .bind(input.shift)
            .bind(input.status)
            .bind(&input.entry_time)
            .bind(&input.exit_time)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.admission_date)
            .bind(&input.photo_url)
            .bind(&input.observations)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    pub async fn delete_employee(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
