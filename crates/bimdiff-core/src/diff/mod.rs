//! Element snapshot comparison.
//!
//! Compares two element snapshots of a building model and produces a
//! structured, deterministic delta for downstream highlighting, statistics
//! widgets and report generation.
//!
//! ## Entry point
//!
//! ```
//! use bimdiff_core::diff::{compare, render_comparison_summary};
//! use bimdiff_core::model::Element;
//!
//! let old = vec![Element::new(1, "IfcWall").with_external_id("w1").with_property("Height", 3.0)];
//! let new = vec![Element::new(1, "IfcWall").with_external_id("w1").with_property("Height", 3.5)];
//!
//! let result = compare(&old, &new);
//! assert_eq!(result.modified.len(), 1);
//! let summary = render_comparison_summary(&result);
//! assert!(summary.contains("Height"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical results and digests.
//! - **Partition totality**: `added + removed + modified + unchanged` equals
//!   the number of distinct identity keys across both snapshots.
//! - **No rename inference**: a changed identity key is a removal plus an
//!   addition.

pub mod engine;
pub mod equality;
pub mod human_summary;
pub mod matcher;
pub mod model;
pub mod properties;

pub use engine::compare;
pub use equality::{property_values_equal, values_equal};
pub use human_summary::render_comparison_summary;
pub use matcher::{match_elements, ElementMatch};
pub use model::{
    ChangeKind, ComparisonResult, ComparisonStatistics, ElementChange, PropertyChange,
    TypeChangeCounts,
};
pub use properties::diff_properties;
