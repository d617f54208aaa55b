use serde::{Deserialize, Serialize};

use super::value::{Properties, PropertyValue};

/// One element of a model snapshot, as produced by the model parser.
///
/// Field names accept both the Rust spelling and the upstream camelCase one
/// (`localId`, `elementType`, `externalId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique within one snapshot, not stable across snapshots
    #[serde(alias = "localId")]
    pub local_id: i64,

    /// Domain type tag (e.g. `IfcWall`); a missing tag reads as `""`
    #[serde(alias = "elementType", default)]
    pub element_type: String,

    /// Globally stable identifier, when the source format provides one
    #[serde(
        alias = "externalId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_id: Option<String>,

    #[serde(default)]
    pub properties: Properties,
}

impl Element {
    pub fn new(local_id: i64, element_type: impl Into<String>) -> Self {
        Self {
            local_id,
            element_type: element_type.into(),
            external_id: None,
            properties: Properties::new(),
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Key used to correlate this element across snapshots.
    ///
    /// See [`identity_key`].
    pub fn identity_key(&self) -> String {
        identity_key(self.external_id.as_deref(), &self.element_type, self.local_id)
    }

    /// Non-empty external id, if any
    pub fn stable_external_id(&self) -> Option<&str> {
        self.external_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Derive the identity key of an element.
///
/// The external id wins when present and non-empty; otherwise the key falls
/// back to `"{element_type}_{local_id}"`. Keys are assumed unique within one
/// snapshot; the core does not deduplicate.
pub fn identity_key(external_id: Option<&str>, element_type: &str, local_id: i64) -> String {
    match external_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("{}_{}", element_type, local_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_key_prefers_external_id() {
        let element = Element::new(12, "IfcWall").with_external_id("2O2Fr$t4X7Zf8NOew3FLOH");
        assert_eq!(element.identity_key(), "2O2Fr$t4X7Zf8NOew3FLOH");
    }

    #[test]
    fn test_identity_key_falls_back_on_empty_external_id() {
        let element = Element::new(12, "IfcWall").with_external_id("");
        assert_eq!(element.identity_key(), "IfcWall_12");
        assert_eq!(element.stable_external_id(), None);
    }

    #[test]
    fn test_identity_key_falls_back_without_external_id() {
        assert_eq!(identity_key(None, "IfcSlab", 3), "IfcSlab_3");
    }

    #[test]
    fn test_deserializes_camel_case_and_defaults() {
        let element: Element =
            serde_json::from_str(r#"{"localId": 5, "externalId": "x1"}"#).unwrap();
        assert_eq!(element.local_id, 5);
        assert_eq!(element.element_type, "");
        assert_eq!(element.external_id.as_deref(), Some("x1"));
        assert!(element.properties.is_empty());
    }

    #[test]
    fn test_missing_type_uses_empty_category_in_fallback_key() {
        let element: Element = serde_json::from_str(r#"{"local_id": 9}"#).unwrap();
        assert_eq!(element.identity_key(), "_9");
    }
}
