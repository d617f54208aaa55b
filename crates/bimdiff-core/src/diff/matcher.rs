//! Identity matching of elements across two snapshots.

use std::collections::{HashMap, HashSet};

use crate::model::Element;

/// Three-way partition of two element sets by identity key.
#[derive(Debug, Default)]
pub struct ElementMatch<'a> {
    /// `(old, new)` pairs sharing a key, in new-snapshot order
    pub pairs: Vec<(&'a Element, &'a Element)>,
    /// Elements only in the old snapshot, in old-snapshot order
    pub only_old: Vec<&'a Element>,
    /// Elements only in the new snapshot, in new-snapshot order
    pub only_new: Vec<&'a Element>,
}

impl ElementMatch<'_> {
    /// Number of distinct identity keys across both snapshots
    pub fn distinct_count(&self) -> usize {
        self.pairs.len() + self.only_old.len() + self.only_new.len()
    }
}

/// Partition `old` and `new` into matched pairs and one-sided elements.
///
/// Keys come from [`Element::identity_key`]. Keys are assumed unique per
/// snapshot; with duplicates the later old element shadows earlier ones.
/// Runs in O(n) using hash maps.
pub fn match_elements<'a>(old: &'a [Element], new: &'a [Element]) -> ElementMatch<'a> {
    let old_keys: Vec<String> = old.iter().map(Element::identity_key).collect();
    let old_by_key: HashMap<&str, &Element> = old_keys
        .iter()
        .map(String::as_str)
        .zip(old.iter())
        .collect();

    let mut result = ElementMatch::default();
    let mut new_keys: HashSet<String> = HashSet::with_capacity(new.len());

    for element in new {
        let key = element.identity_key();
        match old_by_key.get(key.as_str()) {
            Some(old_element) => result.pairs.push((*old_element, element)),
            None => result.only_new.push(element),
        }
        new_keys.insert(key);
    }

    for (key, element) in old_keys.iter().zip(old.iter()) {
        if !new_keys.contains(key) {
            result.only_old.push(element);
        }
    }

    result
}
