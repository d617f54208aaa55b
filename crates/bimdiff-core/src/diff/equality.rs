//! Deep equality over property values.
//!
//! `None` is the "missing" marker (property not present on the element);
//! `Some(PropertyValue::Null)` is an explicit null. The two are never equal.
//!
//! Precondition: values are tree-shaped (parser output) and shallow, so the
//! recursion needs no cycle detection or explicit stack.

use crate::model::PropertyValue;

/// Compare two possibly-missing property values.
///
/// Rules, in order:
/// 1. both missing, or identical primitives → equal
/// 2. exactly one side missing or null → not equal
/// 3. different kinds → not equal
/// 4. lists: same length and element-wise equal (order-sensitive)
/// 5. maps: same key count and every key of `a` present in `b` with an equal value
pub fn values_equal(a: Option<&PropertyValue>, b: Option<&PropertyValue>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => property_values_equal(a, b),
        _ => false,
    }
}

/// Compare two present property values. See [`values_equal`].
pub fn property_values_equal(a: &PropertyValue, b: &PropertyValue) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    match (a, b) {
        (PropertyValue::Null, PropertyValue::Null) => true,
        (PropertyValue::Bool(x), PropertyValue::Bool(y)) => x == y,
        (PropertyValue::Number(x), PropertyValue::Number(y)) => x == y,
        (PropertyValue::String(x), PropertyValue::String(y)) => x == y,
        (PropertyValue::List(xs), PropertyValue::List(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| property_values_equal(x, y))
        }
        (PropertyValue::Map(xs), PropertyValue::Map(ys)) => {
            // Equal sizes make the one-directional key check sufficient.
            xs.len() == ys.len()
                && xs.iter().all(|(key, x)| match ys.get(key) {
                    Some(y) => property_values_equal(x, y),
                    None => false,
                })
        }
        _ => false,
    }
}
