use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::database::models::Package;

/// Group key for packages registered without a block.
pub const FALLBACK_BLOCK: &str = "OUTROS";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitGroup {
    pub unit: String,
    /// Normalized block this unit was grouped under.
    pub block: String,
    pub count: usize,
    pub items: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockGroup {
    pub block_name: String,
    pub total_count: usize,
    pub unit_groups: Vec<UnitGroup>,
}

pub fn normalize_block(block: &str) -> String {
    if block.is_empty() {
        FALLBACK_BLOCK.to_string()
    } else {
        block.to_uppercase()
    }
}

/// Groups packages awaiting pickup by normalized block, then by raw unit.
///
/// Blocks come out in plain string order, units within a block in natural
/// order (see [`natural_cmp`]). Items keep their input order.
pub fn group_pending(packages: Vec<Package>) -> Vec<BlockGroup> {
    let mut blocks: BTreeMap<String, Vec<Package>> = BTreeMap::new();
    for pkg in packages.into_iter().filter(Package::is_pending) {
        blocks.entry(normalize_block(&pkg.block)).or_default().push(pkg);
    }

    blocks
        .into_iter()
        .map(|(block_name, items)| {
            let total_count = items.len();

            let mut units: Vec<(String, Vec<Package>)> = Vec::new();
            for pkg in items {
                match units.iter_mut().find(|(unit, _)| *unit == pkg.unit) {
                    Some((_, bucket)) => bucket.push(pkg),
                    None => units.push((pkg.unit.clone(), vec![pkg])),
                }
            }
            units.sort_by(|(a, _), (b, _)| natural_cmp(a, b));

            let unit_groups = units
                .into_iter()
                .map(|(unit, items)| UnitGroup {
                    unit,
                    block: block_name.clone(),
                    count: items.len(),
                    items,
                })
                .collect();

            BlockGroup {
                block_name,
                total_count,
                unit_groups,
            }
        })
        .collect()
}

/// True when `pkg` belongs to the group keyed by `unit` and normalized `block`.
pub fn in_group(pkg: &Package, unit: &str, block: &str) -> bool {
    pkg.unit == unit && normalize_block(&pkg.block) == block
}

#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    })
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Numeric-aware comparison for unit labels: "2" < "10", "1" < "1A" < "2".
///
/// Digit runs compare by value, text runs case-insensitively, and digits
/// sort before text. Labels equal under those rules fall back to plain
/// string order so the result is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => cmp_text(x, y),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::PackageStatus;
    use crate::desk::fixtures::package;
    use pretty_assertions::assert_eq;

    fn sorted(units: &[&str]) -> Vec<String> {
        let mut units: Vec<String> = units.iter().map(|u| u.to_string()).collect();
        units.sort_by(|a, b| natural_cmp(a, b));
        units
    }

    #[test]
    fn unit_sort_is_numeric_aware() {
        assert_eq!(sorted(&["10", "2", "1A", "1"]), vec!["1", "1A", "2", "10"]);
        assert_eq!(sorted(&["101", "11", "1001", "9"]), vec!["9", "11", "101", "1001"]);
        assert_eq!(sorted(&["10A", "2", "10"]), vec!["2", "10", "10A"]);
    }

    #[test]
    fn unit_sort_ignores_case_then_breaks_ties() {
        assert_eq!(natural_cmp("1a", "1B"), Ordering::Less);
        assert_eq!(natural_cmp("1A", "1a"), "1A".cmp("1a"));
        assert_eq!(natural_cmp("07", "7"), Ordering::Less);
        assert_eq!(natural_cmp("12", "12"), Ordering::Equal);
    }

    #[test]
    fn empty_and_outros_blocks_share_one_group() {
        let packages = vec![
            package("1", "", PackageStatus::AwaitingPickup),
            package("2", "outros", PackageStatus::AwaitingPickup),
            package("3", "OUTROS", PackageStatus::AwaitingPickup),
        ];

        let groups = group_pending(packages);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].block_name, FALLBACK_BLOCK);
        assert_eq!(groups[0].total_count, 3);
        assert_eq!(groups[0].unit_groups.len(), 3);
    }

    #[test]
    fn block_case_is_folded_but_unit_is_not() {
        let packages = vec![
            package("07", "a", PackageStatus::AwaitingPickup),
            package("07", "A", PackageStatus::AwaitingPickup),
        ];

        let groups = group_pending(packages);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].block_name, "A");
        assert_eq!(groups[0].unit_groups.len(), 1);
        let unit = &groups[0].unit_groups[0];
        assert_eq!(unit.unit, "07");
        assert_eq!(unit.block, "A");
        assert_eq!(unit.count, 2);

        let mixed = group_pending(vec![
            package("7b", "A", PackageStatus::AwaitingPickup),
            package("7B", "A", PackageStatus::AwaitingPickup),
        ]);
        assert_eq!(mixed[0].unit_groups.len(), 2);
    }

    #[test]
    fn blocks_sort_alphabetically_without_special_cases() {
        let packages = vec![
            package("1", "torre", PackageStatus::AwaitingPickup),
            package("1", "", PackageStatus::AwaitingPickup),
            package("1", "B", PackageStatus::AwaitingPickup),
            package("1", "A", PackageStatus::AwaitingPickup),
        ];

        let names: Vec<String> = group_pending(packages)
            .into_iter()
            .map(|group| group.block_name)
            .collect();

        assert_eq!(names, vec!["A", "B", "OUTROS", "TORRE"]);
    }

    #[test]
    fn units_within_a_block_are_naturally_ordered() {
        let packages = vec![
            package("10", "A", PackageStatus::AwaitingPickup),
            package("2", "A", PackageStatus::AwaitingPickup),
            package("1A", "A", PackageStatus::AwaitingPickup),
            package("1", "A", PackageStatus::AwaitingPickup),
            package("2", "A", PackageStatus::AwaitingPickup),
        ];

        let groups = group_pending(packages);
        let units: Vec<(&str, usize)> = groups[0]
            .unit_groups
            .iter()
            .map(|g| (g.unit.as_str(), g.count))
            .collect();

        assert_eq!(units, vec![("1", 1), ("1A", 1), ("2", 2), ("10", 1)]);
        assert_eq!(groups[0].total_count, 5);
    }

    #[test]
    fn picked_up_packages_are_not_grouped() {
        let packages = vec![
            package("1", "A", PackageStatus::PickedUp),
            package("2", "B", PackageStatus::AwaitingPickup),
        ];

        let groups = group_pending(packages);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].block_name, "B");
    }

    #[test]
    fn no_pending_packages_yields_no_groups() {
        assert!(group_pending(Vec::new()).is_empty());
    }

    #[test]
    fn in_group_uses_normalized_block() {
        let pkg = package("101", "b", PackageStatus::AwaitingPickup);
        assert!(in_group(&pkg, "101", "B"));
        assert!(!in_group(&pkg, "101", "b"));
        assert!(!in_group(&pkg, "102", "B"));
    }
}
