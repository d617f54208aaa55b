//! Property values carried by model elements.
//!
//! Values produced by the model parser are heterogeneous: primitives, ordered
//! lists and nested mappings (material layers, dimension sub-objects). They
//! are modelled as a closed variant so equality is a structural match.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Property name → value mapping of one element.
///
/// `BTreeMap` keeps iteration (and therefore diff output) deterministic.
pub type Properties = BTreeMap<String, PropertyValue>;

/// A single property value.
///
/// (De)serialized untagged so it maps 1:1 onto JSON. Values are tree-shaped by
/// construction; nothing in the crate builds cyclic values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<PropertyValue>),
    Map(BTreeMap<String, PropertyValue>),
}

/// Runtime kind of a [`PropertyValue`], used to reject cross-kind comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    List,
    Map,
}

impl PropertyValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Null => ValueKind::Null,
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::Number(_) => ValueKind::Number,
            PropertyValue::String(_) => ValueKind::String,
            PropertyValue::List(_) => ValueKind::List,
            PropertyValue::Map(_) => ValueKind::Map,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => f.write_str("null"),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            PropertyValue::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value as f64)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(value: Vec<PropertyValue>) -> Self {
        PropertyValue::List(value)
    }
}

impl From<BTreeMap<String, PropertyValue>> for PropertyValue {
    fn from(value: BTreeMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_plain_json() {
        let value: PropertyValue = serde_json::from_str(
            r#"{"layers": [{"material": "Concrete", "thickness": 0.2}], "fire_rated": true, "note": null}"#,
        )
        .unwrap();

        let PropertyValue::Map(map) = &value else {
            panic!("expected map, got {:?}", value);
        };
        assert_eq!(map["fire_rated"], PropertyValue::Bool(true));
        assert_eq!(map["note"], PropertyValue::Null);
        assert_eq!(map["layers"].kind(), ValueKind::List);
    }

    #[test]
    fn test_integers_become_numbers() {
        let value: PropertyValue = serde_json::from_str("3").unwrap();
        assert_eq!(value, PropertyValue::Number(3.0));
    }

    #[test]
    fn test_display_is_compact() {
        let value = PropertyValue::List(vec![1i64.into(), "a".into(), PropertyValue::Null]);
        assert_eq!(value.to_string(), "[1, \"a\", null]");
    }
}
