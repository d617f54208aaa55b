//! Canonical field keys and event names for structured logging
//!
//! Shared by the logging macros and by tests that assert on captured events.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Collection sizes
pub const FIELD_OLD_LEN: &str = "old_len";
pub const FIELD_NEW_LEN: &str = "new_len";
pub const FIELD_SNAPSHOT_LEN: &str = "snapshot_len";
pub const FIELD_LINEAGE_LEN: &str = "lineage_len";
pub const FIELD_SELECTION_LEN: &str = "selection_len";
pub const FIELD_CHANGES: &str = "changes";

// Result counters
pub const FIELD_ADDED: &str = "added";
pub const FIELD_REMOVED: &str = "removed";
pub const FIELD_MODIFIED: &str = "modified";
pub const FIELD_UNCHANGED: &str = "unchanged";
pub const FIELD_CRITICAL: &str = "critical";
pub const FIELD_HIGH: &str = "high";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
