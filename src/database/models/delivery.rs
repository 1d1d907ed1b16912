use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::EmployeeShift;
use super::macros::string_enum;

/// Shown when a driver's company is missing or was deleted.
pub const UNKNOWN_COMPANY: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDriver {
    pub id: Uuid,
    pub name: String,
    pub company_id: Option<Uuid>,
    pub company_name: String,
    pub phone: String,
    pub cpf: String,
    pub rg: String,
    pub status: DeliveryDriverStatus,
    pub observations: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDriverInput {
    pub name: String,
    pub company_id: Option<Uuid>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub rg: String,
    pub status: DeliveryDriverStatus,
    #[serde(default)]
    pub observations: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum DeliveryDriverStatus {
        Active => "active",
        Inactive => "inactive",
        Blocked => "blocked",
    }
}

/// A driver dropping packages at the desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryVisit {
    pub id: Uuid,
    pub driver_id: Option<Uuid>,
    pub driver_name: String,
    pub company_name: String,
    pub entry_time: String, // DD/MM/YY HH:MM
    pub package_count: i64,
    pub shift: EmployeeShift,
    pub observations: String,
    pub created_at: DateTime<Utc>,
}

/// Either a registered driver or a name typed at the desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryVisitInput {
    pub driver_id: Option<Uuid>,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub company_name: String,
    pub package_count: i64,
    pub shift: EmployeeShift,
    #[serde(default)]
    pub observations: String,
}

#[derive(Debug, Clone)]
pub struct NewDeliveryVisit {
    pub driver_id: Option<Uuid>,
    pub driver_name: String,
    pub company_name: String,
    pub package_count: i64,
    pub shift: EmployeeShift,
    pub observations: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDayStats {
    pub visits_today: usize,
    pub packages_today: i64,
}
