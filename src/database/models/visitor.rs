use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;
use super::package::Recipient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: Uuid,
    pub name: String,
    pub document: Option<String>,
    pub phone: Option<String>,
    pub unit: String,
    pub block: String,
    pub resident_name: Option<String>,
    pub resident_id: Option<Uuid>,
    pub entry_time: String,
    pub exit_time: Option<String>,
    pub status: VisitorStatus,
    pub observations: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorInput {
    pub name: String,
    pub document: Option<String>,
    pub phone: Option<String>,
    /// The unit being visited.
    pub host: Recipient,
    #[serde(default)]
    pub observations: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum VisitorStatus {
        Inside => "inside",
        Left => "left",
    }
}
