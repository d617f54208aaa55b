//! Snapshot comparison engine.
//!
//! The entry point is [`compare`], which matches elements by identity key,
//! diffs the properties of matched pairs and aggregates statistics.

use crate::diff::matcher::match_elements;
use crate::diff::model::{ComparisonResult, ComparisonStatistics, ElementChange};
use crate::diff::properties::diff_properties;
use crate::model::Element;
use crate::{log_op_end, log_op_start};

fn added_change(element: &Element) -> ElementChange {
    ElementChange::Added {
        id: element.local_id,
        identity_key: element.identity_key(),
        element_type: element.element_type.clone(),
        external_id: element.external_id.clone(),
        new_properties: element.properties.clone(),
    }
}

fn removed_change(element: &Element) -> ElementChange {
    ElementChange::Removed {
        id: element.local_id,
        identity_key: element.identity_key(),
        element_type: element.element_type.clone(),
        external_id: element.external_id.clone(),
        old_properties: element.properties.clone(),
    }
}

/// Diff a matched pair; `None` when no property differs.
fn modified_change(old: &Element, new: &Element) -> Option<ElementChange> {
    let property_changes = diff_properties(&old.properties, &new.properties);
    if property_changes.is_empty() {
        return None;
    }
    Some(ElementChange::Modified {
        id: new.local_id,
        identity_key: new.identity_key(),
        element_type: new.element_type.clone(),
        external_id: new.external_id.clone(),
        old_properties: old.properties.clone(),
        new_properties: new.properties.clone(),
        property_changes,
    })
}

/// Build statistics with one pass over each output list.
fn aggregate_statistics(
    added: &[ElementChange],
    removed: &[ElementChange],
    modified: &[ElementChange],
    unchanged_count: usize,
) -> ComparisonStatistics {
    let mut statistics = ComparisonStatistics {
        unchanged_count,
        ..Default::default()
    };
    for change in added.iter().chain(removed).chain(modified) {
        statistics.record(change.element_type(), change.kind());
    }
    statistics.total_count = statistics.changed_count() + unchanged_count;
    statistics
}

/// Compare two element snapshots.
///
/// - elements only in `new` become `Added`, in `new` order
/// - elements only in `old` become `Removed`, in `old` order
/// - matched pairs with at least one differing property become `Modified`,
///   in `new` order; the rest only increment `unchanged_count`
///
/// Empty inputs are valid. The function is pure apart from log events and
/// returns identical results for identical inputs.
pub fn compare(old: &[Element], new: &[Element]) -> ComparisonResult {
    log_op_start!(
        "compare",
        old_len = old.len() as u64,
        new_len = new.len() as u64
    );
    let start = std::time::Instant::now();

    let matched = match_elements(old, new);

    let added: Vec<ElementChange> = matched.only_new.iter().map(|e| added_change(e)).collect();
    let removed: Vec<ElementChange> = matched.only_old.iter().map(|e| removed_change(e)).collect();

    let mut modified = Vec::new();
    let mut unchanged_count = 0usize;
    for (old_element, new_element) in &matched.pairs {
        match modified_change(old_element, new_element) {
            Some(change) => modified.push(change),
            None => unchanged_count += 1,
        }
    }

    let statistics = aggregate_statistics(&added, &removed, &modified, unchanged_count);

    log_op_end!(
        "compare",
        duration_ms = start.elapsed().as_millis() as u64,
        added = statistics.added_count as u64,
        removed = statistics.removed_count as u64,
        modified = statistics.modified_count as u64,
        unchanged = statistics.unchanged_count as u64
    );

    ComparisonResult {
        added,
        removed,
        modified,
        unchanged_count,
        statistics,
    }
}
