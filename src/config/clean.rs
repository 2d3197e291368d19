use std::collections::BTreeMap;

pub const HIDDEN_KEY_PREFIX: &str = "__";
pub const SELF_KEY: &str = "self";

pub fn is_hidden_key(key: &str) -> bool {
    key.starts_with(HIDDEN_KEY_PREFIX) || key == SELF_KEY
}

/// Drops bindings that are internal rather than option values.
pub fn clean_hidden_keys<V>(bindings: BTreeMap<String, V>) -> BTreeMap<String, V> {
    bindings
        .into_iter()
        .filter(|(key, _)| !is_hidden_key(key))
        .collect()
}
