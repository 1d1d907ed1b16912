use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::EmployeeShift;
use super::macros::string_enum;

/// One day of an employee's time sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub record_date: NaiveDate,
    pub shift: EmployeeShift,
    pub entry_time: String,
    pub exit_time: String,
    pub record_type: TimeRecordType,
    pub observations: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecordInput {
    pub employee_id: Uuid,
    pub record_date: NaiveDate,
    pub shift: EmployeeShift,
    #[serde(default)]
    pub entry_time: String,
    #[serde(default)]
    pub exit_time: String,
    pub record_type: TimeRecordType,
    #[serde(default)]
    pub observations: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TimeRecordType {
        Regular => "regular",
        Overtime => "overtime",
        Absence => "absence",
        DayOff => "day_off",
    }
}
