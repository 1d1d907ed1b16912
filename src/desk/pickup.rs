use chrono::NaiveDateTime;
use uuid::Uuid;

use super::DeskError;
use super::grouping::{in_group, normalize_block};
use super::timestamp::short_timestamp;
use crate::database::models::{Package, PackageStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupTarget {
    Single(Uuid),
    /// Every package still awaiting pickup for this unit and block.
    Group { unit: String, block: String },
}

impl PickupTarget {
    /// Builds a group target, normalizing `block` the way grouping does.
    pub fn group(unit: impl Into<String>, block: &str) -> Self {
        PickupTarget::Group {
            unit: unit.into(),
            block: normalize_block(block),
        }
    }

    pub fn selects(&self, pkg: &Package) -> bool {
        match self {
            PickupTarget::Single(id) => pkg.id == *id,
            PickupTarget::Group { unit, block } => in_group(pkg, unit, block),
        }
    }
}

pub fn validate_picker(picker_name: &str) -> Result<&str, DeskError> {
    let trimmed = picker_name.trim();
    if trimmed.is_empty() {
        return Err(DeskError::MissingPickerName);
    }
    Ok(trimmed)
}

/// Marks every selected package that is still awaiting pickup as picked up.
///
/// All packages touched by one call share the same `picked_up_at`. Packages
/// already picked up are left alone. Returns the ids that changed; on error
/// nothing has changed.
pub fn record_pickup(
    packages: &mut [Package],
    target: &PickupTarget,
    picker_name: &str,
    now: NaiveDateTime,
) -> Result<Vec<Uuid>, DeskError> {
    let picker = validate_picker(picker_name)?;
    let stamp = short_timestamp(now);

    let mut updated = Vec::new();
    for pkg in packages
        .iter_mut()
        .filter(|pkg| pkg.is_pending() && target.selects(pkg))
    {
        pkg.status = PackageStatus::PickedUp;
        pkg.picked_up_by = Some(picker.to_string());
        pkg.picked_up_at = Some(stamp.clone());
        updated.push(pkg.id);
    }

    Ok(updated)
}
