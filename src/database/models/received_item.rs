use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;
use super::package::{PackageStatus, Recipient};

/// Something left at the desk for a resident, or by a resident for someone
/// outside. Shares the package status and pickup flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedItem {
    pub id: Uuid,
    pub operation_type: ReceivedItemOperation,
    pub unit: String,
    pub block: String,
    pub recipient_name: Option<String>,
    pub resident_id: Option<Uuid>,
    pub left_by: String,
    pub document: Option<String>,
    pub description: String,
    pub shift: String,
    pub observations: String,
    pub received_at: String,
    pub status: PackageStatus,
    pub picked_up_by: Option<String>,
    pub picked_up_at: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedItemInput {
    pub operation_type: ReceivedItemOperation,
    pub recipient: Recipient,
    pub left_by: String,
    pub document: Option<String>,
    pub description: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub observations: String,
}

#[derive(Debug, Clone)]
pub struct NewReceivedItem {
    pub operation_type: ReceivedItemOperation,
    pub unit: String,
    pub block: String,
    pub recipient_name: Option<String>,
    pub resident_id: Option<Uuid>,
    pub left_by: String,
    pub document: Option<String>,
    pub description: String,
    pub shift: String,
    pub observations: String,
    pub received_at: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ReceivedItemOperation {
        ExternalToResident => "external_to_resident",
        ResidentToExternal => "resident_to_external",
    }
}
