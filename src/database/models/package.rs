use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Uuid,
    pub unit: String,
    pub block: String,
    pub recipient_name: String,
    pub package_type: String,
    pub sender: Option<String>,
    pub tracking_code: Option<String>,
    pub withdrawal_code: String,
    pub received_at: String, // DD/MM/YY HH:MM
    pub status: PackageStatus,
    pub description: Option<String>,
    pub observations: Option<String>,
    pub picked_up_by: Option<String>,
    pub picked_up_at: Option<String>, // DD/MM/YY HH:MM
    pub created_at: DateTime<Utc>,
}

impl Package {
    pub fn is_pending(&self) -> bool {
        self.status == PackageStatus::AwaitingPickup
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PackageStatus {
        AwaitingPickup => "awaiting_pickup",
        PickedUp => "picked_up",
    }
}

/// Who the package is for: either a registered resident or typed in by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Recipient {
    #[serde(rename_all = "camelCase")]
    Linked { resident_id: Uuid },
    #[serde(rename_all = "camelCase")]
    Manual {
        recipient_name: String,
        unit: String,
        block: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInput {
    pub recipient: Recipient,
    pub package_type: String,
    pub sender: Option<String>,
    pub tracking_code: Option<String>,
    pub description: Option<String>,
    pub observations: Option<String>,
}

/// A package ready to be inserted, with the recipient already resolved.
#[derive(Debug, Clone)]
pub struct NewPackage {
    pub unit: String,
    pub block: String,
    pub recipient_name: String,
    pub package_type: String,
    pub sender: Option<String>,
    pub tracking_code: Option<String>,
    pub withdrawal_code: String,
    pub received_at: String,
    pub description: Option<String>,
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupInput {
    pub picked_up_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPickupInput {
    pub unit: String,
    pub block: String,
    pub picked_up_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupOutcome {
    pub updated: Vec<Package>,
    /// Packages still awaiting pickup in the targeted group. Zero means the
    /// group view has been emptied and the client should return to the list.
    pub remaining_in_group: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStats {
    pub total: usize,
    pub pending: usize,
    pub picked_up: usize,
}
