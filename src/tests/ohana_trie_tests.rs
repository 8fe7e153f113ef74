//! Property-based tests for the Ohana Trie.
//!
//! Every test drives the trie and a `HashMap` model with the same operations
//! and compares them afterwards.

use super::test_utils::{key_strategy, op_strategy, word_strategy, TrieOp};
use crate::data_structures::ohana_trie::{Limit, OhanaTrie, OhanaTrieConfig, TraversalOrder};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Apply `ops` to a fresh trie and to a model map.
fn build(ops: &[TrieOp]) -> (OhanaTrie<u32>, HashMap<String, u32>) {
    let mut trie = OhanaTrie::new();
    let mut model = HashMap::new();
    for op in ops {
        match op {
            TrieOp::Insert(key, value) => {
                assert_eq!(trie.insert(key, *value), model.insert(key.clone(), *value));
            }
            TrieOp::Remove(key) => {
                assert_eq!(trie.remove(key), model.remove(key).is_some());
            }
        }
    }
    (trie, model)
}

/// Number of nodes a trie holding exactly `keys` needs: one per distinct
/// prefix, the empty prefix (root) included.
fn minimal_node_count<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    let mut prefixes = BTreeSet::new();
    prefixes.insert(String::new());
    for key in keys {
        let mut prefix = String::new();
        for c in key.chars() {
            prefix.push(c);
            prefixes.insert(prefix.clone());
        }
    }
    prefixes.len()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_matches_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let (trie, model) = build(&ops);

        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.is_empty(), model.is_empty());
        for (key, value) in &model {
            prop_assert_eq!(trie.get(key), Some(value));
        }
    }

    #[test]
    fn prop_no_dangling_nodes(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let (trie, model) = build(&ops);
        prop_assert_eq!(trie.node_count(), minimal_node_count(model.keys()));
    }

    #[test]
    fn prop_round_trip(key in word_strategy(32), value in any::<u64>()) {
        let mut trie = OhanaTrie::new();
        trie.insert(&key, value);
        prop_assert_eq!(trie.get(&key), Some(&value));
        prop_assert!(trie.prefix_search(&key));

        prop_assert!(trie.remove(&key));
        prop_assert_eq!(trie.get(&key), None);
        prop_assert!(!trie.remove(&key));
        prop_assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn prop_missing_remove_is_noop(
        ops in proptest::collection::vec(op_strategy(), 0..32),
        probe in key_strategy(),
    ) {
        let (mut trie, model) = build(&ops);
        prop_assume!(!model.contains_key(&probe));

        let nodes = trie.node_count();
        prop_assert!(!trie.remove(&probe));
        prop_assert_eq!(trie.node_count(), nodes);
        for (key, value) in &model {
            prop_assert_eq!(trie.get(key), Some(value));
        }
    }

    #[test]
    fn prop_prefix_search_matches_model(
        ops in proptest::collection::vec(op_strategy(), 0..32),
        prefix in key_strategy(),
    ) {
        let (trie, model) = build(&ops);
        let expected = prefix.is_empty() || model.keys().any(|k| k.starts_with(&prefix));
        prop_assert_eq!(trie.prefix_search(&prefix), expected);
    }

    #[test]
    fn prop_sorted_keys_with_prefix(
        ops in proptest::collection::vec(op_strategy(), 0..32),
        prefix in key_strategy(),
    ) {
        let (trie, model) = build(&ops);
        let mut expected: Vec<String> = model
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect();
        expected.sort();

        prop_assert_eq!(trie.keys_with_prefix(&prefix, Limit::Unbounded), expected);
    }

    #[test]
    fn prop_autocomplete_respects_limit(
        ops in proptest::collection::vec(op_strategy(), 0..32),
        prefix in key_strategy(),
        limit in 0usize..8,
    ) {
        let (_, model) = build(&ops);
        let config = OhanaTrieConfig::new().with_traversal(TraversalOrder::Unordered);
        let mut trie = OhanaTrie::with_config(config);
        trie.extend(model.iter().map(|(k, v)| (k.as_str(), *v)));

        let matches: Vec<u32> = model
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, v)| *v)
            .collect();

        let found = trie.autocomplete(&prefix, limit);
        prop_assert_eq!(found.len(), matches.len().min(limit));
        for value in found {
            prop_assert!(matches.contains(value));
        }
    }
}
