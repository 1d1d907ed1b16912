//! Front-desk workflow logic: package filtering and grouping, pickup
//! recording and shift handover composition.
//!
//! Everything in here is pure. Repositories load and store records, these
//! functions decide what changes.

use thiserror::Error;

pub mod codes;
pub mod filter;
pub mod grouping;
pub mod handover;
pub mod pickup;
pub mod timestamp;

pub use codes::{generate_withdrawal_code, unused_withdrawal_code};
pub use filter::{StatusFilter, filter_packages, matches};
pub use grouping::{
    BlockGroup, FALLBACK_BLOCK, UnitGroup, group_pending, in_group, natural_cmp, normalize_block,
};
pub use handover::{HandoverDraft, compose_handover};
pub use pickup::{PickupTarget, record_pickup, validate_picker};
pub use timestamp::{local_now, long_timestamp, short_date, short_timestamp};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    #[error("Name of the person picking up is required")]
    MissingPickerName,

    #[error("The {0} employee must be selected")]
    EmployeeNotSelected(&'static str),

    #[error("Employee is not on the roster: {0}")]
    UnknownEmployee(String),

    #[error("Handover note is empty")]
    EmptyNote,

    #[error("Field is required: {0}")]
    MissingField(&'static str),

    #[error("Package count cannot be negative")]
    NegativePackageCount,
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Trims `value` and fails with `MissingField(field)` when nothing is left.
pub fn require(value: &str, field: &'static str) -> Result<String, DeskError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DeskError::MissingField(field));
    }
    Ok(trimmed.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignore_case_folds_both_sides() {
        assert!(contains_ignore_case("Maria Souza", "souza"));
        assert!(contains_ignore_case("apto 12b", "12B"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Maria", "joão"));
    }

    #[test]
    fn require_rejects_blank_values() {
        assert_eq!(require("  Bloco A ", "block"), Ok("Bloco A".to_string()));
        assert_eq!(require("   ", "unit"), Err(DeskError::MissingField("unit")));
    }
}
