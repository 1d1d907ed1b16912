use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: Uuid,
    pub name: String,
    pub unit: String,
    pub block: String,
    pub resident_type: ResidentType,
    pub status: ResidentStatus,
    pub phone: String,
    pub cpf: String,
    pub email: String,
    pub observations: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentInput {
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub block: String,
    pub resident_type: ResidentType,
    pub status: ResidentStatus,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub observations: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ResidentType {
        Owner => "owner",
        Tenant => "tenant",
        Other => "other",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ResidentStatus {
        Active => "active",
        Inactive => "inactive",
    }
}
