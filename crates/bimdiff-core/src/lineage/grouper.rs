//! Grouping of snapshots into version lineages.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::lineage::model::{LineageVersion, VersionLineage};
use crate::model::VersionSnapshot;
use crate::{log_op_end, log_op_start};

/// Trailing `_v<digits>` version suffix.
static VERSION_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"_v[0-9]+$").unwrap());

/// Derive the lineage base name of a snapshot name.
///
/// Strips one trailing `_v<digits>` suffix; names without it are their own
/// base name. Case-sensitive: `_V2` is not a suffix.
pub fn base_name(name: &str) -> String {
    VERSION_SUFFIX.replace(name, "").into_owned()
}

/// Group snapshots by [`base_name`].
///
/// Lineages appear in order of their first snapshot in the input. Inside a
/// lineage versions are sorted by `created_at`; ties keep input order.
/// Version numbers are 1-based ranks.
pub fn group_lineages(snapshots: &[VersionSnapshot]) -> Vec<VersionLineage> {
    log_op_start!("group_lineages", snapshot_len = snapshots.len() as u64);
    let start = std::time::Instant::now();

    let mut groups: Vec<(String, Vec<&VersionSnapshot>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for snapshot in snapshots {
        let base = base_name(&snapshot.name);
        match index.get(&base) {
            Some(&slot) => groups[slot].1.push(snapshot),
            None => {
                index.insert(base.clone(), groups.len());
                groups.push((base, vec![snapshot]));
            }
        }
    }

    let lineages: Vec<VersionLineage> = groups
        .into_iter()
        .map(|(base_name, mut members)| {
            // sort_by_key is stable
            members.sort_by_key(|s| s.created_at);
            let versions = members
                .into_iter()
                .enumerate()
                .map(|(rank, snapshot)| LineageVersion {
                    version_number: rank as u32 + 1,
                    snapshot: snapshot.clone(),
                })
                .collect();
            VersionLineage {
                base_name,
                versions,
            }
        })
        .collect();

    log_op_end!(
        "group_lineages",
        duration_ms = start.elapsed().as_millis() as u64,
        lineage_len = lineages.len() as u64
    );

    lineages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::snapshot::parse_timestamp;

    fn snapshot(id: i64, name: &str, date: &str) -> VersionSnapshot {
        VersionSnapshot::new(id, name, parse_timestamp(date).unwrap())
    }

    #[test]
    fn test_version_suffix_pattern_compiles() {
        assert!(VERSION_SUFFIX.is_match("Tower_v3"));
        assert!(!VERSION_SUFFIX.is_match("Tower_v3a"));
    }

    #[test]
    fn test_many_lineages_keep_first_occurrence_order() {
        let snapshots: Vec<VersionSnapshot> = (0..200)
            .rev()
            .flat_map(|i| {
                [
                    snapshot(i * 2, &format!("Block{}_v2", i), "2024-02-01"),
                    snapshot(i * 2 + 1, &format!("Block{}_v1", i), "2024-01-01"),
                ]
            })
            .collect();

        let lineages = group_lineages(&snapshots);
        assert_eq!(lineages.len(), 200);
        assert_eq!(lineages[0].base_name, "Block199");
        assert_eq!(lineages[199].base_name, "Block0");
        for lineage in &lineages {
            assert_eq!(lineage.len(), 2);
            assert_eq!(lineage.versions[0].snapshot.name, format!("{}_v1", lineage.base_name));
        }
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("B_v2"), "B");
        assert_eq!(base_name("Tower_v10"), "Tower");
        assert_eq!(base_name("Tower"), "Tower");
        assert_eq!(base_name("Tower_V2"), "Tower_V2");
        assert_eq!(base_name("Tower_v"), "Tower_v");
        assert_eq!(base_name("Tower_v1_v2"), "Tower_v1");
        assert_eq!(base_name("_v3"), "");
    }

    #[test]
    fn test_orders_lineage_chronologically() {
        let snapshots = vec![
            snapshot(1, "B_v2", "2024-01-02"),
            snapshot(2, "B_v1", "2024-01-01"),
        ];

        let lineages = group_lineages(&snapshots);
        assert_eq!(lineages.len(), 1);
        assert_eq!(lineages[0].base_name, "B");
        let placed: Vec<(i64, u32)> = lineages[0]
            .versions
            .iter()
            .map(|v| (v.snapshot.id, v.version_number))
            .collect();
        assert_eq!(placed, vec![(2, 1), (1, 2)]);
    }

    #[test]
    fn test_groups_in_first_occurrence_order() {
        let snapshots = vec![
            snapshot(1, "Zeta_v1", "2024-01-01"),
            snapshot(2, "Alpha_v1", "2024-01-01"),
            snapshot(3, "Zeta_v2", "2024-02-01"),
        ];

        let names: Vec<String> = group_lineages(&snapshots)
            .into_iter()
            .map(|l| l.base_name)
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let snapshots = vec![
            snapshot(9, "Hall_v1", "2024-03-01"),
            snapshot(4, "Hall_v2", "2024-03-01"),
        ];

        let lineages = group_lineages(&snapshots);
        let ids: Vec<i64> = lineages[0].versions.iter().map(|v| v.snapshot.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_lineages(&[]).is_empty());
    }
}
