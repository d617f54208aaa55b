//! Critical-change classification of a comparison result.

use crate::critical::config::{CriticalityPolicy, DEFAULT_CONFIG};
use crate::critical::model::{CriticalChangeEntry, CriticalChangeReport, Severity};
use crate::diff::model::{ChangeKind, ComparisonResult, ElementChange};
use crate::{log_op_end, log_op_start};

/// Classify `result` with the built-in critical sets.
pub fn classify_critical(result: &ComparisonResult) -> CriticalChangeReport {
    classify_critical_with(result, &*DEFAULT_CONFIG)
}

/// Classify `result` against an injected policy.
///
/// Only changes whose element type is critical are reported:
/// - added → medium
/// - removed → high
/// - modified → high when a changed property is critical, low otherwise
///
/// Entries come out added, then removed, then modified, each in result
/// order. Never fails.
pub fn classify_critical_with<P>(result: &ComparisonResult, policy: &P) -> CriticalChangeReport
where
    P: CriticalityPolicy + ?Sized,
{
    log_op_start!("classify_critical", changes = result.change_count() as u64);
    let start = std::time::Instant::now();

    let entries: Vec<CriticalChangeEntry> = result
        .changes()
        .filter(|change| policy.is_critical_type(change.element_type()))
        .map(|change| classify_change(change, policy))
        .collect();

    let report = CriticalChangeReport::from_entries(entries);

    log_op_end!(
        "classify_critical",
        duration_ms = start.elapsed().as_millis() as u64,
        critical = report.summary.total_critical as u64,
        high = report.summary.high_severity as u64
    );

    report
}

fn classify_change<P>(change: &ElementChange, policy: &P) -> CriticalChangeEntry
where
    P: CriticalityPolicy + ?Sized,
{
    let element_type = change.element_type();
    let id = change.id();

    let (severity, description, critical_properties) = match change.kind() {
        ChangeKind::Added => (
            Severity::Medium,
            format!("{} element added (id {})", element_type, id),
            Vec::new(),
        ),
        ChangeKind::Removed => (
            Severity::High,
            format!("{} element removed (id {})", element_type, id),
            Vec::new(),
        ),
        ChangeKind::Modified => {
            let property_changes = change.property_changes();
            let critical: Vec<String> = property_changes
                .iter()
                .filter(|p| policy.is_critical_property(&p.property_name))
                .map(|p| p.property_name.clone())
                .collect();

            let mut description = format!(
                "{} element modified (id {}): {} property change(s)",
                element_type,
                id,
                property_changes.len()
            );
            let severity = if critical.is_empty() {
                Severity::Low
            } else {
                description.push_str("; critical properties: ");
                description.push_str(&critical.join(", "));
                Severity::High
            };
            (severity, description, critical)
        }
    };

    CriticalChangeEntry {
        element_id: id,
        identity_key: change.identity_key().to_string(),
        element_type: element_type.to_string(),
        external_id: change.external_id().map(str::to_string),
        change_kind: change.kind(),
        severity,
        description,
        critical_properties,
    }
}
