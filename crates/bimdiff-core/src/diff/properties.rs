//! Per-property diff of two element property maps.

use std::collections::BTreeSet;

use crate::diff::equality::values_equal;
use crate::diff::model::PropertyChange;
use crate::model::Properties;

/// List the properties whose values differ between `old` and `new`.
///
/// Keys are visited in sorted order over the union of both maps, so output is
/// deterministic. A property present on only one side yields a change with the
/// other side missing. An empty result means no property-level difference.
pub fn diff_properties(old: &Properties, new: &Properties) -> Vec<PropertyChange> {
    let keys: BTreeSet<&str> = old
        .keys()
        .chain(new.keys())
        .map(|k| k.as_str())
        .collect();

    keys.into_iter()
        .filter_map(|key| {
            let old_value = old.get(key);
            let new_value = new.get(key);
            if values_equal(old_value, new_value) {
                None
            } else {
                Some(PropertyChange {
                    property_name: key.to_string(),
                    old_value: old_value.cloned(),
                    new_value: new_value.cloned(),
                })
            }
        })
        .collect()
}
