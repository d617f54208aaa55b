//! Critical type and property sets
//!
//! The classifier asks a [`CriticalityPolicy`] whether an element type or a
//! property name is structurally relevant. [`CriticalConfig`] is the standard
//! implementation, built from the built-in defaults or loaded from TOML:
//!
//! ```toml
//! [critical]
//! element_types = ["wall", "column"]
//! properties = ["load-bearing"]
//! ```
//!
//! Names are compared after normalization (see [`normalize_type_name`] and
//! [`normalize_property_name`]), so `IfcWallStandardCase`,
//! `wall-standard-case` and `WALL_STANDARD_CASE` are the same type.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::errors::{BimDiffError, ExError, ExErrorKind};

/// Built-in structurally relevant element types
pub const DEFAULT_CRITICAL_TYPES: &[&str] = &[
    "wall",
    "wall-standard-case",
    "column",
    "beam",
    "slab",
    "footing",
    "pile",
    "roof",
];

/// Built-in structurally relevant property names
pub const DEFAULT_CRITICAL_PROPERTIES: &[&str] = &[
    "load-bearing",
    "is-external",
    "thickness",
    "width",
    "height",
    "depth",
    "length",
    "material",
];

/// Process-wide default configuration used by `classify_critical`.
pub static DEFAULT_CONFIG: Lazy<CriticalConfig> = Lazy::new(CriticalConfig::default);

/// Decides which element types and properties count as critical.
///
/// Injected into `classify_critical_with` so callers can swap the sets
/// without touching the classifier.
pub trait CriticalityPolicy {
    /// Whether changes to elements of this type are reported at all
    fn is_critical_type(&self, element_type: &str) -> bool;

    /// Whether a change to this property escalates a modification to high
    fn is_critical_property(&self, property_name: &str) -> bool;
}

/// Normalize an element type name for matching.
///
/// Lowercases, drops every non-alphanumeric character and strips a leading
/// `ifc` schema prefix when something remains after it.
pub fn normalize_type_name(name: &str) -> String {
    let folded = normalize_property_name(name);
    match folded.strip_prefix("ifc") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => folded,
    }
}

/// Normalize a property name for matching: lowercase alphanumerics only.
pub fn normalize_property_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Critical element types and properties, stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalConfig {
    element_types: BTreeSet<String>,
    properties: BTreeSet<String>,
}

impl Default for CriticalConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_CRITICAL_TYPES.iter().copied(),
            DEFAULT_CRITICAL_PROPERTIES.iter().copied(),
        )
    }
}

impl CriticalConfig {
    pub fn new<T, P>(element_types: T, properties: P) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self {
            element_types: element_types
                .into_iter()
                .map(|t| normalize_type_name(t.as_ref()))
                .collect(),
            properties: properties
                .into_iter()
                .map(|p| normalize_property_name(p.as_ref()))
                .collect(),
        }
    }

    /// Normalized critical types, sorted
    pub fn element_types(&self) -> impl Iterator<Item = &str> {
        self.element_types.iter().map(String::as_str)
    }

    /// Normalized critical properties, sorted
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(String::as_str)
    }

    /// Parse a TOML document. Keys missing from `[critical]` (or a missing
    /// section) keep their defaults.
    ///
    /// # Errors
    ///
    /// `ERR_INVALID_CONFIG` when the document is not valid TOML or a list has
    /// the wrong shape.
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, ExError> {
        let file: ConfigFile = toml::from_str(source)
            .map_err(|e| ExError::from(BimDiffError::from(e)).with_op("load_config"))?;

        let section = file.critical;
        let config = match (section.element_types, section.properties) {
            (None, None) => Self::default(),
            (types, properties) => Self::new(
                types.unwrap_or_else(|| owned(DEFAULT_CRITICAL_TYPES)),
                properties.unwrap_or_else(|| owned(DEFAULT_CRITICAL_PROPERTIES)),
            ),
        };
        Ok(config)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// `ERR_IO` when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: impl AsRef<Path>) -> std::result::Result<Self, ExError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_entity_id(path.display().to_string())
                .with_message(e.to_string())
        })?;
        Self::from_toml_str(&source)
            .map_err(|e| e.with_entity_id(path.display().to_string()))
    }
}

impl CriticalityPolicy for CriticalConfig {
    fn is_critical_type(&self, element_type: &str) -> bool {
        self.element_types.contains(&normalize_type_name(element_type))
    }

    fn is_critical_property(&self, property_name: &str) -> bool {
        self.properties
            .contains(&normalize_property_name(property_name))
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    critical: CriticalSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CriticalSection {
    element_types: Option<Vec<String>>,
    properties: Option<Vec<String>>,
}
