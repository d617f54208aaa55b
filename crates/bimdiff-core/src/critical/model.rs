//! Critical-change report types.

use serde::{Deserialize, Serialize};

use crate::diff::model::ChangeKind;

/// Structural impact of a change. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One change to a structurally relevant element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalChangeEntry {
    pub element_id: i64,
    pub identity_key: String,
    pub element_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub change_kind: ChangeKind,
    pub severity: Severity,
    pub description: String,
    /// Changed properties that matched the critical set (modifications only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_properties: Vec<String>,
}

/// Per-severity counters of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalSummary {
    pub total_critical: usize,
    pub high_severity: usize,
    pub medium_severity: usize,
    pub low_severity: usize,
}

impl CriticalSummary {
    fn record(&mut self, severity: Severity) {
        self.total_critical += 1;
        match severity {
            Severity::High => self.high_severity += 1,
            Severity::Medium => self.medium_severity += 1,
            Severity::Low => self.low_severity += 1,
        }
    }
}

/// Critical-change report derived from a comparison result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticalChangeReport {
    /// True iff `critical_changes` is non-empty
    pub has_critical_changes: bool,
    pub critical_changes: Vec<CriticalChangeEntry>,
    pub summary: CriticalSummary,
}

impl CriticalChangeReport {
    /// Build a report, deriving the flag and counters from `entries`.
    pub fn from_entries(entries: Vec<CriticalChangeEntry>) -> Self {
        let mut summary = CriticalSummary::default();
        for entry in &entries {
            summary.record(entry.severity);
        }
        Self {
            has_critical_changes: !entries.is_empty(),
            critical_changes: entries,
            summary,
        }
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.critical_changes.iter().map(|e| e.severity).max()
    }

    pub fn entries_with_severity(&self, severity: Severity) -> Vec<&CriticalChangeEntry> {
        self.critical_changes
            .iter()
            .filter(|e| e.severity == severity)
            .collect()
    }
}
