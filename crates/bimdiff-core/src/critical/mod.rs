//! Critical-change classification.
//!
//! Narrows a [`ComparisonResult`](crate::diff::ComparisonResult) to changes of
//! structurally relevant element types and assigns each a [`Severity`].
//! The critical sets come from a [`CriticalityPolicy`]; [`classify_critical`]
//! uses the built-in [`CriticalConfig`] defaults.

pub mod classifier;
pub mod config;
pub mod human_summary;
pub mod model;

pub use classifier::{classify_critical, classify_critical_with};
pub use config::{
    normalize_property_name, normalize_type_name, CriticalConfig, CriticalityPolicy,
    DEFAULT_CONFIG, DEFAULT_CRITICAL_PROPERTIES, DEFAULT_CRITICAL_TYPES,
};
pub use human_summary::render_critical_summary;
pub use model::{CriticalChangeEntry, CriticalChangeReport, CriticalSummary, Severity};
