//! Human-readable summary renderer for critical-change reports.

use crate::critical::model::{CriticalChangeReport, Severity};

/// Render a Markdown summary of a [`CriticalChangeReport`].
///
/// Entries are grouped by severity, highest first, keeping report order
/// inside each group.
pub fn render_critical_summary(report: &CriticalChangeReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    out.push_str("## Critical Changes\n\n");

    if !report.has_critical_changes {
        out.push_str("_No critical changes detected._\n");
        return out;
    }

    out.push_str(&format!(
        "**Total**: {}  \n**High**: {}  \n**Medium**: {}  \n**Low**: {}\n\n",
        summary.total_critical,
        summary.high_severity,
        summary.medium_severity,
        summary.low_severity,
    ));

    for severity in [Severity::High, Severity::Medium, Severity::Low] {
        let entries = report.entries_with_severity(severity);
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("### {} ({})\n\n", heading(severity), entries.len()));
        for entry in entries {
            out.push_str(&format!("- {}\n", entry.description));
        }
        out.push('\n');
    }

    out
}

fn heading(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "High",
        Severity::Medium => "Medium",
        Severity::Low => "Low",
    }
}
