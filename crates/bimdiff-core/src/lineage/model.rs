//! Lineage output types.

use serde::{Deserialize, Serialize};

use crate::model::VersionSnapshot;

/// One snapshot placed in its lineage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageVersion {
    /// 1-based chronological rank inside the lineage
    pub version_number: u32,
    #[serde(flatten)]
    pub snapshot: VersionSnapshot,
}

/// Snapshots sharing a base name, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionLineage {
    pub base_name: String,
    pub versions: Vec<LineageVersion>,
}

impl VersionLineage {
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn find(&self, snapshot_id: i64) -> Option<&LineageVersion> {
        self.versions.iter().find(|v| v.snapshot.id == snapshot_id)
    }

    pub fn latest(&self) -> Option<&LineageVersion> {
        self.versions.last()
    }
}

/// Look a snapshot up across all lineages.
pub fn find_version(lineages: &[VersionLineage], snapshot_id: i64) -> Option<&LineageVersion> {
    lineages.iter().find_map(|lineage| lineage.find(snapshot_id))
}
