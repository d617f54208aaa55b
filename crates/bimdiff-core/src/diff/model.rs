//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Maps are `BTreeMap` so serialized output is deterministic.

use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest as _, Sha256};
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::{Properties, PropertyValue};

/// Kind of change detected for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl ChangeKind {
    /// Lowercase verb used in descriptions and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property that differs between the old and new element.
///
/// `None` on either side means the property is missing on that side; at least
/// one side is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyChange {
    pub property_name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub old_value: Option<PropertyValue>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub new_value: Option<PropertyValue>,
}

/// A key that is present always decodes to `Some`, so `null` stays
/// `Some(PropertyValue::Null)`; an absent key falls back to `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<PropertyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    PropertyValue::deserialize(deserializer).map(Some)
}

impl PropertyChange {
    /// Property only exists in the new element
    pub fn is_addition(&self) -> bool {
        self.old_value.is_none() && self.new_value.is_some()
    }

    /// Property only exists in the old element
    pub fn is_removal(&self) -> bool {
        self.old_value.is_some() && self.new_value.is_none()
    }
}

/// Change record for one element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "change_kind", rename_all = "snake_case")]
pub enum ElementChange {
    Added {
        id: i64,
        identity_key: String,
        element_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        external_id: Option<String>,
        new_properties: Properties,
    },
    Removed {
        id: i64,
        identity_key: String,
        element_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        external_id: Option<String>,
        old_properties: Properties,
    },
    /// `property_changes` is never empty
    Modified {
        id: i64,
        identity_key: String,
        element_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        external_id: Option<String>,
        old_properties: Properties,
        new_properties: Properties,
        property_changes: Vec<PropertyChange>,
    },
}

impl ElementChange {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ElementChange::Added { .. } => ChangeKind::Added,
            ElementChange::Removed { .. } => ChangeKind::Removed,
            ElementChange::Modified { .. } => ChangeKind::Modified,
        }
    }

    /// Local id of the element (the new element's id for modifications)
    pub fn id(&self) -> i64 {
        match self {
            ElementChange::Added { id, .. }
            | ElementChange::Removed { id, .. }
            | ElementChange::Modified { id, .. } => *id,
        }
    }

    pub fn identity_key(&self) -> &str {
        match self {
            ElementChange::Added { identity_key, .. }
            | ElementChange::Removed { identity_key, .. }
            | ElementChange::Modified { identity_key, .. } => identity_key,
        }
    }

    pub fn element_type(&self) -> &str {
        match self {
            ElementChange::Added { element_type, .. }
            | ElementChange::Removed { element_type, .. }
            | ElementChange::Modified { element_type, .. } => element_type,
        }
    }

    pub fn external_id(&self) -> Option<&str> {
        match self {
            ElementChange::Added { external_id, .. }
            | ElementChange::Removed { external_id, .. }
            | ElementChange::Modified { external_id, .. } => external_id.as_deref(),
        }
    }

    /// Property-level changes; empty for additions and removals
    pub fn property_changes(&self) -> &[PropertyChange] {
        match self {
            ElementChange::Modified {
                property_changes, ..
            } => property_changes,
            _ => &[],
        }
    }
}

/// Added/removed/modified counters for one element type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeChangeCounts {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl TypeChangeCounts {
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// Aggregate counts of a comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComparisonStatistics {
    /// Distinct identity keys across both snapshots
    pub total_count: usize,
    pub added_count: usize,
    pub removed_count: usize,
    pub modified_count: usize,
    pub unchanged_count: usize,
    /// Counts per `element_type`; types with no changes are absent
    pub by_type: BTreeMap<String, TypeChangeCounts>,
}

impl ComparisonStatistics {
    /// Record one change against its element type.
    pub fn record(&mut self, element_type: &str, kind: ChangeKind) {
        let counts = self.by_type.entry(element_type.to_string()).or_default();
        match kind {
            ChangeKind::Added => {
                self.added_count += 1;
                counts.added += 1;
            }
            ChangeKind::Removed => {
                self.removed_count += 1;
                counts.removed += 1;
            }
            ChangeKind::Modified => {
                self.modified_count += 1;
                counts.modified += 1;
            }
        }
    }

    pub fn changed_count(&self) -> usize {
        self.added_count + self.removed_count + self.modified_count
    }
}

/// Complete result of comparing two element snapshots.
///
/// `added` and `modified` follow the new snapshot's input order, `removed`
/// follows the old snapshot's.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    pub added: Vec<ElementChange>,
    pub removed: Vec<ElementChange>,
    pub modified: Vec<ElementChange>,
    pub unchanged_count: usize,
    pub statistics: ComparisonStatistics,
}

impl ComparisonResult {
    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty())
    }

    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    /// All changes in report order: added, removed, modified
    pub fn changes(&self) -> impl Iterator<Item = &ElementChange> {
        self.added
            .iter()
            .chain(self.removed.iter())
            .chain(self.modified.iter())
    }

    /// Changes whose element type equals `element_type` (exact match)
    pub fn filter_by_type(&self, element_type: &str) -> Vec<&ElementChange> {
        self.changes()
            .filter(|c| c.element_type() == element_type)
            .collect()
    }

    /// Look up the change recorded for an identity key
    pub fn find(&self, identity_key: &str) -> Option<&ElementChange> {
        self.changes().find(|c| c.identity_key() == identity_key)
    }

    /// SHA-256 (hex) of the canonical JSON form.
    ///
    /// Equal inputs always produce equal digests; downstream consumers use it
    /// to detect whether a re-run produced the same delta.
    ///
    /// # Errors
    ///
    /// Returns `BimDiffError::Serialization` if JSON encoding fails.
    pub fn digest(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}
