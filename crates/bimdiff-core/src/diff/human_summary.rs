//! Human-readable summary renderer for comparison results.

use crate::diff::model::{ComparisonResult, ElementChange, PropertyChange};

/// Render a Markdown summary of a [`ComparisonResult`].
///
/// Intended for review workflows; informational only. Output is
/// deterministic for a given result.
pub fn render_comparison_summary(result: &ComparisonResult) -> String {
    let mut out = String::new();
    let stats = &result.statistics;

    out.push_str("## Model Comparison\n\n");
    out.push_str(&format!(
        "**Elements**: {}  \n**Added**: {}  \n**Removed**: {}  \n**Modified**: {}  \n**Unchanged**: {}\n\n",
        stats.total_count,
        stats.added_count,
        stats.removed_count,
        stats.modified_count,
        stats.unchanged_count,
    ));

    if !result.has_changes() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    out.push_str("### By Element Type\n\n");
    out.push_str("| Type | Added | Removed | Modified |\n|---|---|---|---|\n");
    for (element_type, counts) in &stats.by_type {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            display_type(element_type),
            counts.added,
            counts.removed,
            counts.modified
        ));
    }
    out.push('\n');

    if !result.added.is_empty() {
        out.push_str(&format!("### Added ({})\n\n", result.added.len()));
        for change in &result.added {
            out.push_str(&format!("- {}\n", element_label(change)));
        }
        out.push('\n');
    }

    if !result.removed.is_empty() {
        out.push_str(&format!("### Removed ({})\n\n", result.removed.len()));
        for change in &result.removed {
            out.push_str(&format!("- {}\n", element_label(change)));
        }
        out.push('\n');
    }

    if !result.modified.is_empty() {
        out.push_str(&format!("### Modified ({})\n\n", result.modified.len()));
        for change in &result.modified {
            out.push_str(&format!("- {}\n", element_label(change)));
            for property in change.property_changes() {
                out.push_str(&format!("  - {}\n", property_line(property)));
            }
        }
        out.push('\n');
    }

    out
}

fn display_type(element_type: &str) -> &str {
    if element_type.is_empty() {
        "(untyped)"
    } else {
        element_type
    }
}

fn element_label(change: &ElementChange) -> String {
    format!(
        "{} #{} (`{}`)",
        display_type(change.element_type()),
        change.id(),
        change.identity_key()
    )
}

fn property_line(change: &PropertyChange) -> String {
    let render = |v: &Option<crate::model::PropertyValue>| match v {
        Some(value) => value.to_string(),
        None => "(missing)".to_string(),
    };
    format!(
        "`{}`: {} -> {}",
        change.property_name,
        render(&change.old_value),
        render(&change.new_value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::compare;
    use crate::model::Element;

    #[test]
    fn test_summary_for_identical_snapshots() {
        let snapshot = vec![Element::new(1, "IfcWall")];
        let summary = render_comparison_summary(&compare(&snapshot, &snapshot));
        assert!(summary.contains("**Unchanged**: 1"));
        assert!(summary.contains("_No changes detected._"));
    }

    #[test]
    fn test_summary_lists_property_changes() {
        let old = vec![Element::new(1, "IfcWall")
            .with_external_id("w1")
            .with_property("Height", 3.0)
            .with_property("Color", "red")];
        let new = vec![
            Element::new(1, "IfcWall")
                .with_external_id("w1")
                .with_property("Height", 3.5),
            Element::new(2, ""),
        ];

        let summary = render_comparison_summary(&compare(&old, &new));
        assert!(summary.contains("### Added (1)"));
        assert!(summary.contains("(untyped) #2 (`_2`)"));
        assert!(summary.contains("### Modified (1)"));
        assert!(summary.contains("`Height`: 3 -> 3.5"));
        assert!(summary.contains("`Color`: \"red\" -> (missing)"));
        assert!(summary.contains("| IfcWall | 0 | 0 | 1 |"));
    }
}
