//! Resolution of user snapshot selections into comparison order.
//!
//! A selection is a set of snapshot ids picked from one or more lineages.
//! Resolution validates it and orders it oldest first so consecutive ids can
//! be fed to [`compare`](crate::diff::compare) as `(old, new)`.

use std::collections::HashSet;

use crate::errors::{BimDiffError, Result};
use crate::lineage::model::{find_version, LineageVersion, VersionLineage};
use crate::{log_op_end, log_op_error, log_op_start};

/// Smallest selection accepted by [`resolve_sequence`]
pub const MIN_SELECTION: usize = 2;
/// Largest selection accepted by [`resolve_sequence`]
pub const MAX_SELECTION: usize = 5;

/// Resolve exactly two ids into `(older_id, newer_id)`.
///
/// Ordered by `created_at`; equal timestamps put the smaller id first.
///
/// # Errors
///
/// - `SelectionSize` unless exactly two ids are given
/// - `DuplicateSelection` when both ids are the same
/// - `UnknownSnapshot` when an id is in no lineage
pub fn resolve_pair(lineages: &[VersionLineage], ids: &[i64]) -> Result<(i64, i64)> {
    log_op_start!("resolve_pair", selection_len = ids.len() as u64);
    let start = std::time::Instant::now();

    match resolve_ordered("resolve_pair", lineages, ids, 2, 2) {
        Ok(ordered) => {
            log_op_end!("resolve_pair", duration_ms = start.elapsed().as_millis() as u64);
            Ok((ordered[0], ordered[1]))
        }
        Err(e) => {
            log_op_error!(
                "resolve_pair",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

/// Resolve 2 to 5 ids into chronological order.
///
/// Same ordering rule as [`resolve_pair`]. Ids may come from different
/// lineages. Oversized selections are rejected, never truncated.
///
/// # Errors
///
/// - `SelectionSize` for fewer than 2 or more than 5 ids
/// - `DuplicateSelection` when an id repeats
/// - `UnknownSnapshot` when an id is in no lineage
pub fn resolve_sequence(lineages: &[VersionLineage], ids: &[i64]) -> Result<Vec<i64>> {
    log_op_start!("resolve_sequence", selection_len = ids.len() as u64);
    let start = std::time::Instant::now();

    let resolved = resolve_ordered("resolve_sequence", lineages, ids, MIN_SELECTION, MAX_SELECTION);
    match &resolved {
        Ok(ordered) => {
            log_op_end!(
                "resolve_sequence",
                duration_ms = start.elapsed().as_millis() as u64,
                selection_len = ordered.len() as u64
            );
        }
        Err(e) => {
            log_op_error!(
                "resolve_sequence",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    resolved
}

/// Consecutive `(old, new)` pairs of a resolved sequence.
///
/// A sequence of n ids yields n - 1 pairs; shorter inputs yield none.
pub fn chain_pairs(sequence: &[i64]) -> Vec<(i64, i64)> {
    sequence.windows(2).map(|w| (w[0], w[1])).collect()
}

fn resolve_ordered(
    op: &'static str,
    lineages: &[VersionLineage],
    ids: &[i64],
    min: usize,
    max: usize,
) -> Result<Vec<i64>> {
    if ids.len() < min || ids.len() > max {
        return Err(BimDiffError::SelectionSize {
            op,
            actual: ids.len(),
            min,
            max,
        });
    }

    let mut seen = HashSet::with_capacity(ids.len());
    for &id in ids {
        if !seen.insert(id) {
            return Err(BimDiffError::DuplicateSelection { snapshot_id: id });
        }
    }

    let mut selected: Vec<&LineageVersion> = ids
        .iter()
        .map(|&id| {
            find_version(lineages, id).ok_or(BimDiffError::UnknownSnapshot { snapshot_id: id })
        })
        .collect::<Result<_>>()?;

    selected.sort_by_key(|v| (v.snapshot.created_at, v.snapshot.id));
    Ok(selected.into_iter().map(|v| v.snapshot.id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineage::grouper::group_lineages;
    use crate::model::snapshot::parse_timestamp;
    use crate::model::VersionSnapshot;

    fn lineages() -> Vec<VersionLineage> {
        let snapshots = vec![
            VersionSnapshot::new(1, "B_v2", parse_timestamp("2024-01-02").unwrap()),
            VersionSnapshot::new(2, "B_v1", parse_timestamp("2024-01-01").unwrap()),
            VersionSnapshot::new(3, "B_v3", parse_timestamp("2024-01-03").unwrap()),
            VersionSnapshot::new(7, "C_v1", parse_timestamp("2024-01-02").unwrap()),
            VersionSnapshot::new(8, "D_v1", parse_timestamp("2024-01-04").unwrap()),
            VersionSnapshot::new(9, "D_v2", parse_timestamp("2024-01-05").unwrap()),
        ];
        group_lineages(&snapshots)
    }

    #[test]
    fn test_pair_orders_older_first() {
        assert_eq!(resolve_pair(&lineages(), &[1, 2]).unwrap(), (2, 1));
        assert_eq!(resolve_pair(&lineages(), &[2, 1]).unwrap(), (2, 1));
    }

    #[test]
    fn test_pair_tie_puts_smaller_id_first() {
        assert_eq!(resolve_pair(&lineages(), &[7, 1]).unwrap(), (1, 7));
    }

    #[test]
    fn test_pair_requires_exactly_two() {
        let err = resolve_pair(&lineages(), &[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            BimDiffError::SelectionSize {
                op: "resolve_pair",
                actual: 3,
                min: 2,
                max: 2,
            }
        );
        assert!(resolve_pair(&lineages(), &[1]).is_err());
    }

    #[test]
    fn test_unknown_and_duplicate_ids() {
        assert_eq!(
            resolve_pair(&lineages(), &[1, 42]).unwrap_err(),
            BimDiffError::UnknownSnapshot { snapshot_id: 42 }
        );
        assert_eq!(
            resolve_pair(&lineages(), &[3, 3]).unwrap_err(),
            BimDiffError::DuplicateSelection { snapshot_id: 3 }
        );
    }

    #[test]
    fn test_sequence_sorts_chronologically() {
        let ordered = resolve_sequence(&lineages(), &[9, 3, 1, 2, 8]).unwrap();
        assert_eq!(ordered, vec![2, 1, 3, 8, 9]);
        assert_eq!(chain_pairs(&ordered), vec![(2, 1), (1, 3), (3, 8), (8, 9)]);
    }

    #[test]
    fn test_sequence_size_bounds() {
        assert!(matches!(
            resolve_sequence(&lineages(), &[1]),
            Err(BimDiffError::SelectionSize { actual: 1, .. })
        ));
        assert!(matches!(
            resolve_sequence(&lineages(), &[1, 2, 3, 7, 8, 9]),
            Err(BimDiffError::SelectionSize { actual: 6, .. })
        ));
        assert_eq!(resolve_sequence(&lineages(), &[3, 2]).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_chain_pairs_short_input() {
        assert!(chain_pairs(&[]).is_empty());
        assert!(chain_pairs(&[4]).is_empty());
    }
}
