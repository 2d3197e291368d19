use manta_config::config::{clean_hidden_keys, is_hidden_key};
use std::collections::BTreeMap;

#[test]
fn hidden_and_self_bindings_are_removed() {
    let bindings: BTreeMap<String, i32> = [
        ("__name__", 1),
        ("__", 2),
        ("self", 3),
        ("libexecDir", 4),
        ("_private", 5),
        ("selfish", 6),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    let cleaned = clean_hidden_keys(bindings);
    let keys: Vec<&str> = cleaned.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["_private", "libexecDir", "selfish"]);
    assert_eq!(cleaned["libexecDir"], 4);
}

#[test]
fn hidden_key_rules() {
    assert!(is_hidden_key("__doc__"));
    assert!(is_hidden_key("self"));
    assert!(!is_hidden_key("Self"));
    assert!(!is_hidden_key("run__dir"));
}

#[test]
fn empty_bindings_stay_empty() {
    assert!(clean_hidden_keys(BTreeMap::<String, String>::new()).is_empty());
}
