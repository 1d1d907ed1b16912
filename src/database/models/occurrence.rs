use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shift handover record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: Uuid,
    pub outgoing_employee_name: String,
    pub incoming_employee_name: String,
    pub description: String,
    pub timestamp: String, // "5 de março de 2025 às 08:07"
    pub created_at: DateTime<Utc>,
}

/// Validated occurrence, produced by the handover composer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOccurrence {
    pub outgoing_employee_name: String,
    pub incoming_employee_name: String,
    pub description: String,
    pub timestamp: String,
}

/// Body of the direct occurrence form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceInput {
    pub outgoing_employee_name: String,
    pub incoming_employee_name: String,
    pub description: String,
}
