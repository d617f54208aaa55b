//! bimdiff Core - building-model snapshot comparison kernel
//!
//! This crate compares two element snapshots of a parsed building model and
//! derives everything downstream consumers need from the delta:
//! - Element identity matching and per-property diffs with deep value equality
//! - Added/removed/modified classification with aggregate statistics
//! - Critical-change scoring for structurally relevant element types
//! - Version lineage grouping and selection resolution for picking snapshots
//! - Markdown summaries for review workflows
//!
//! Everything is synchronous and free of I/O apart from optional config file
//! loading and log events.

pub mod critical;
pub mod diff;
pub mod errors;
pub mod lineage;
pub mod logging_facility;
pub mod model;

pub use bimdiff_core_types::schema;

// Re-export commonly used types
pub use critical::{
    classify_critical, classify_critical_with, CriticalChangeReport, CriticalConfig, Severity,
};
pub use diff::{compare, ComparisonResult, ElementChange, PropertyChange};
pub use errors::{BimDiffError, ExError, ExErrorKind, Result};
pub use lineage::{group_lineages, resolve_pair, resolve_sequence, VersionLineage};
pub use model::{Element, PropertyValue, VersionSnapshot};
