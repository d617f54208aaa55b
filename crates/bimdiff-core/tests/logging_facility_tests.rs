#![allow(clippy::unwrap_used, clippy::expect_used)]

use bimdiff_core::errors::BimDiffError;
use bimdiff_core::logging_facility::test_capture::init_test_capture;
use bimdiff_core::model::{Element, VersionSnapshot};
use bimdiff_core::{classify_critical, compare, group_lineages, resolve_pair};
use bimdiff_core::{log_op_end, log_op_error, log_op_start};
use bimdiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ADDED, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42u64);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = BimDiffError::UnknownSnapshot { snapshot_id: 5 };
    log_op_error!(op_name, err, duration_ms = 10u64);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(error_events.len(), 1);
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_every_macro_stamps_component_and_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_macro_extra_fields_unique_4";

    log_op_start!(op_name, snapshot_len = 3u64);
    log_op_end!(op_name, duration_ms = 5u64, lineage_len = 2u64);
    log_op_error!(
        op_name,
        BimDiffError::DuplicateSelection { snapshot_id: 8 },
        duration_ms = 6u64,
        selection_len = 4u64
    );

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 3);
    for event in &events {
        assert_eq!(
            event.component.as_deref(),
            Some("logging_facility_tests"),
            "component missing on {:?}",
            event.event
        );
    }
    assert_eq!(events[0].field("snapshot_len"), Some("3"));
    assert_eq!(events[1].field("lineage_len"), Some("2"));
    assert_eq!(events[2].field("selection_len"), Some("4"));
    assert_eq!(events[2].field(FIELD_ERR_CODE), Some("ERR_DUPLICATE_SELECTION"));
}

#[test]
fn test_compare_emits_start_and_end_with_counts() {
    let capture = init_test_capture();
    // Distinctive sizes so parallel tests calling compare don't collide.
    let new: Vec<Element> = (0..37).map(|i| Element::new(i, "IfcMember")).collect();

    compare(&[], &new);

    let ends: Vec<_> = capture
        .events_for_op("compare")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END) && e.field(FIELD_ADDED) == Some("37"))
        .collect();
    assert_eq!(ends.len(), 1);
    assert!(ends[0].field(FIELD_DURATION_MS).is_some());
    assert_eq!(
        ends[0].component.as_deref(),
        Some("bimdiff_core::diff::engine")
    );
}

#[test]
fn test_classify_and_group_emit_events() {
    let capture = init_test_capture();

    classify_critical(&compare(&[], &[Element::new(1, "IfcWall")]));
    group_lineages(&[]);

    capture.assert_event_exists("classify_critical", EVENT_START);
    capture.assert_event_exists("classify_critical", EVENT_END);
    capture.assert_event_exists("group_lineages", EVENT_END);
}

#[test]
fn test_failed_selection_emits_end_error() {
    let capture = init_test_capture();
    let snapshot = VersionSnapshot::new(
        1,
        "Depot_v1",
        chrono::DateTime::parse_from_rfc3339("2024-05-01T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc),
    );
    let lineages = group_lineages(&[snapshot]);

    assert!(resolve_pair(&lineages, &[1, 314_159]).is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("resolve_pair")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_NOT_FOUND")
    });
    assert!(errors >= 1);
}
