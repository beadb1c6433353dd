//! Recursive merge of attribute stores.

use crate::value::{AttributeStore, AttributeValue};

/// Merge `overlay` into `base`, key by key.
///
/// When both sides hold a mapping for the same key the mappings are merged
/// recursively. Any other combination replaces the base value with the
/// overlay value, so sequences are never merged element-wise and a scalar
/// may replace a sequence (or the reverse). Existing keys keep their position.
pub fn merge_into(base: &mut AttributeStore, overlay: AttributeStore) {
    for (key, incoming) in overlay {
        let incoming_map = match incoming {
            AttributeValue::Mapping(map) => map,
            other => {
                base.insert(key, other);
                continue;
            }
        };

        if let Some(AttributeValue::Mapping(existing)) = base.get_mut(&key) {
            merge_into(existing, incoming_map);
        } else {
            base.insert(key, AttributeValue::Mapping(incoming_map));
        }
    }
}

/// Return a new store with `overlay` merged over a copy of `base`.
#[must_use]
pub fn merged(base: &AttributeStore, overlay: &AttributeStore) -> AttributeStore {
    let mut result = base.clone();
    merge_into(&mut result, overlay.clone());
    result
}
