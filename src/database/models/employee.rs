use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub role: String,
    pub shift: EmployeeShift,
    pub status: EmployeeStatus,
    pub entry_time: String,
    pub exit_time: String,
    pub phone: String,
    pub email: String,
    pub admission_date: String,
    pub photo_url: Option<String>,
    pub observations: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub role: String,
    pub shift: EmployeeShift,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub entry_time: String,
    #[serde(default)]
    pub exit_time: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub admission_date: String,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub observations: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum EmployeeShift {
        Day => "day",
        Night => "night",
        Administrative => "administrative",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum EmployeeStatus {
        Active => "active",
        Inactive => "inactive",
        Vacation => "vacation",
    }
}

/// Staff entry offered in the operator and handover selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: Option<Uuid>,
    pub name: String,
    pub active: bool,
}

impl RosterEntry {
    /// Placeholder offered while no employee has been registered yet.
    pub fn fallback_admin() -> Self {
        Self {
            id: None,
            name: "Administrador (Acesso Inicial)".to_string(),
            active: true,
        }
    }
}

impl From<&Employee> for RosterEntry {
    fn from(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            name: employee.name.clone(),
            active: employee.status == EmployeeStatus::Active,
        }
    }
}
