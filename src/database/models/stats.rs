use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub pending_packages: i64,
    pub total_packages: i64,
    pub total_occurrences: i64,
    pub active_employees: i64,
    pub total_employees: i64,
    pub visitors_inside: i64,
    pub materials_on_loan: i64,
}
