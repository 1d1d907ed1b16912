use serde::{Deserialize, Serialize};

use super::contains_ignore_case;
use crate::database::models::{Package, PackageStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    #[default]
    Pending,
    PickedUp,
}

impl StatusFilter {
    pub fn accepts(self, status: PackageStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == PackageStatus::AwaitingPickup,
            StatusFilter::PickedUp => status == PackageStatus::PickedUp,
        }
    }
}

/// Search matches recipient, unit, block or withdrawal code, ignoring case.
pub fn matches(pkg: &Package, search_term: &str, status_filter: StatusFilter) -> bool {
    let found = contains_ignore_case(&pkg.recipient_name, search_term)
        || contains_ignore_case(&pkg.unit, search_term)
        || contains_ignore_case(&pkg.block, search_term)
        || contains_ignore_case(&pkg.withdrawal_code, search_term);

    found && status_filter.accepts(pkg.status)
}

/// Keeps the packages accepted by [`matches`], in their original order.
pub fn filter_packages(
    packages: Vec<Package>,
    search_term: &str,
    status_filter: StatusFilter,
) -> Vec<Package> {
    packages
        .into_iter()
        .filter(|pkg| matches(pkg, search_term, status_filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk::fixtures::package;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_covers_every_field_case_insensitively() {
        let mut pkg = package("12B", "torre norte", PackageStatus::AwaitingPickup);
        pkg.recipient_name = "Ana Lima".to_string();
        pkg.withdrawal_code = "482913".to_string();

        assert!(matches(&pkg, "ana", StatusFilter::All));
        assert!(matches(&pkg, "12b", StatusFilter::All));
        assert!(matches(&pkg, "NORTE", StatusFilter::All));
        assert!(matches(&pkg, "8291", StatusFilter::All));
        assert!(!matches(&pkg, "bruno", StatusFilter::All));
    }

    #[test]
    fn status_filter_narrows_by_exact_status() {
        let pending = package("1", "A", PackageStatus::AwaitingPickup);
        let picked = package("1", "A", PackageStatus::PickedUp);

        assert!(matches(&pending, "", StatusFilter::Pending));
        assert!(!matches(&picked, "", StatusFilter::Pending));
        assert!(matches(&picked, "", StatusFilter::PickedUp));
        assert!(!matches(&pending, "", StatusFilter::PickedUp));
        assert!(matches(&pending, "", StatusFilter::All));
        assert!(matches(&picked, "", StatusFilter::All));
    }

    #[test]
    fn default_filter_shows_pending_only() {
        assert_eq!(StatusFilter::default(), StatusFilter::Pending);
        assert!(StatusFilter::default().accepts(PackageStatus::AwaitingPickup));
        assert!(!StatusFilter::default().accepts(PackageStatus::PickedUp));
    }

    #[test]
    fn empty_search_with_all_returns_everything_in_order() {
        let packages = vec![
            package("10", "B", PackageStatus::PickedUp),
            package("2", "A", PackageStatus::AwaitingPickup),
            package("7", "", PackageStatus::AwaitingPickup),
        ];

        let filtered = filter_packages(packages.clone(), "", StatusFilter::All);

        assert_eq!(filtered, packages);
    }
}
