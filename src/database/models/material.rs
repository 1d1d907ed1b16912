use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// Tool or item lent out by the front desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedMaterial {
    pub id: Uuid,
    pub material_name: String,
    pub borrower_type: BorrowerType,
    pub borrower_name: String,
    pub unit: Option<String>,
    pub block: Option<String>,
    pub document: Option<String>,
    pub phone: String,
    pub loan_date: String,
    pub return_date: Option<String>,
    pub status: MaterialStatus,
    pub observations: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedMaterialInput {
    pub material_name: String,
    pub borrower_type: BorrowerType,
    pub borrower_name: String,
    pub unit: Option<String>,
    pub block: Option<String>,
    pub document: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub observations: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum BorrowerType {
        Resident => "resident",
        Employee => "employee",
        ThirdParty => "third_party",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MaterialStatus {
        Borrowed => "borrowed",
        Returned => "returned",
    }
}
