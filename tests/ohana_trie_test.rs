// Copyright (c) 2025 Ohana Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Ohana Trie through the public library API.

use std::collections::HashSet;
use std::io::Write;

use ohana_trie_lib::data_structures::ohana_trie::{
    Limit, OhanaTrie, OhanaTrieConfig, OhanaTrieError, TraversalOrder,
};

/// The three-key trie used across the autocomplete scenarios
fn setup_cat_car_cap() -> OhanaTrie<i32> {
    let mut trie = OhanaTrie::new();
    trie.insert("cat", 1);
    trie.insert("car", 2);
    trie.insert("cap", 3);
    trie
}

#[test]
fn test_round_trip_and_overwrite() {
    let mut trie = OhanaTrie::new();
    trie.insert("lanai", "porch".to_string());
    assert_eq!(trie.get("lanai").map(String::as_str), Some("porch"));

    let nodes = trie.node_count();
    let previous = trie.insert("lanai", "veranda".to_string());
    assert_eq!(previous.as_deref(), Some("porch"));
    assert_eq!(trie.get("lanai").map(String::as_str), Some("veranda"));
    assert_eq!(trie.node_count(), nodes);
}

#[test]
fn test_delete_then_delete_again() {
    let mut trie = OhanaTrie::new();
    trie.insert("key", 10u64);
    assert!(trie.remove("key"));
    assert_eq!(trie.get("key"), None);
    assert!(!trie.remove("key"));
}

#[test]
fn test_pruning_keeps_shared_prefix() {
    let mut trie = OhanaTrie::new();
    trie.insert("cat", 1);
    trie.insert("car", 2);

    assert!(trie.remove("cat"));
    assert_eq!(trie.get("car"), Some(&2));
    assert_eq!(trie.get("cat"), None);
    assert!(trie.prefix_search("ca"));
    assert_eq!(trie.node_count(), 4);
}

#[test]
fn test_removing_inner_key_keeps_longer_key() {
    let mut trie = OhanaTrie::new();
    trie.insert("car", 1);
    trie.insert("cart", 2);

    assert!(trie.remove("car"));
    assert!(trie.prefix_search("car"));
    assert_eq!(trie.get("cart"), Some(&2));
    assert_eq!(trie.get("car"), None);
}

#[test]
fn test_prefix_is_not_membership() {
    let mut trie = OhanaTrie::new();
    trie.insert("cartoon", ());
    assert!(trie.prefix_search("car"));
    assert_eq!(trie.get("car"), None);
    assert!(!trie.contains_key("car"));
}

#[test]
fn test_autocomplete_limits() {
    let trie = setup_cat_car_cap();

    assert_eq!(trie.autocomplete("ca", 2usize).len(), 2);

    let everything: HashSet<i32> = trie.autocomplete("ca", -1i32).into_iter().copied().collect();
    assert_eq!(everything, HashSet::from([1, 2, 3]));

    assert!(trie.autocomplete("dog", Limit::default()).is_empty());
    assert_eq!(trie.suggest("c").len(), 3);
}

#[test]
fn test_unordered_autocomplete_membership() {
    let mut trie = OhanaTrie::with_config(
        OhanaTrieConfig::new().with_traversal(TraversalOrder::Unordered),
    );
    trie.extend([("cat", 1), ("car", 2), ("cap", 3)]);

    let two = trie.autocomplete("ca", 2usize);
    assert_eq!(two.len(), 2);
    let distinct: HashSet<&i32> = two.into_iter().collect();
    assert_eq!(distinct.len(), 2);
    assert!(distinct.iter().all(|v| [1, 2, 3].contains(*v)));
}

#[test]
fn test_empty_key_lifecycle() {
    let mut trie = OhanaTrie::new();
    trie.insert("", 42);
    assert_eq!(trie.get(""), Some(&42));
    assert!(trie.remove(""));
    assert_eq!(trie.get(""), None);

    trie.insert("aloha", 1);
    assert_eq!(trie.autocomplete("", Limit::Unbounded), vec![&1]);
}

#[test]
fn test_missing_removal_leaves_trie_unchanged() {
    let mut trie = setup_cat_car_cap();
    let nodes = trie.node_count();

    for missing in ["c", "ca", "cats", "dog", ""] {
        assert!(!trie.remove(missing), "{missing:?} should not be removable");
    }

    assert_eq!(trie.node_count(), nodes);
    assert_eq!(trie.get("cat"), Some(&1));
    assert_eq!(trie.get("car"), Some(&2));
    assert_eq!(trie.get("cap"), Some(&3));
}

#[test]
fn test_load_word_list_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "honu").unwrap();
    writeln!(file, "honua").unwrap();
    writeln!(file, "mahina").unwrap();
    file.flush().unwrap();

    let reader = std::io::BufReader::new(std::fs::File::open(file.path()).unwrap());
    let mut trie = OhanaTrie::new();
    let loaded = trie.load_word_list(reader, |word| word.chars().count()).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(trie.keys_with_prefix("hon", Limit::Unbounded), vec!["honu", "honua"]);
    assert_eq!(trie.get("mahina"), Some(&6));
}

#[test]
fn test_load_entries_reports_bad_line() {
    let mut trie = OhanaTrie::<i32>::new();
    let input = std::io::Cursor::new("one\t1\ntwo\tzwei\n");
    match trie.load_entries(input) {
        Err(OhanaTrieError::InvalidEntry { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected invalid entry, got {other:?}"),
    }
}

#[test]
fn test_trie_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OhanaTrie<String>>();
}
