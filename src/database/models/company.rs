use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// Carrier or shop whose deliveries reach the desk. Offered as package sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub company_type: CompanyType,
    pub phone: String,
    pub status: CompanyStatus,
    pub observations: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub name: String,
    pub company_type: CompanyType,
    #[serde(default)]
    pub phone: String,
    pub status: CompanyStatus,
    #[serde(default)]
    pub observations: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum CompanyType {
        Marketplace => "marketplace",
        Carrier => "carrier",
        PostOffice => "post_office",
        Other => "other",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum CompanyStatus {
        Active => "active",
        Inactive => "inactive",
    }
}
