// Copyright (c) 2025 Ohana Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ohana Trie Implementation
//!
//! This module provides an associative prefix tree mapping string keys to
//! values of any type, with point lookups, removal that prunes dead branches,
//! prefix existence tests and bounded prefix enumeration (autocomplete).
//!
//! # Example
//!
//! ```
//! use ohana_trie_lib::data_structures::ohana_trie::{Limit, OhanaTrie};
//!
//! let mut trie = OhanaTrie::new();
//! trie.insert("cat", 1);
//! trie.insert("car", 2);
//! trie.insert("dog", 3);
//!
//! assert_eq!(trie.get("car"), Some(&2));
//! assert!(trie.prefix_search("do"));
//! assert_eq!(trie.autocomplete("ca", Limit::Unbounded), vec![&2, &1]);
//!
//! assert!(trie.remove("cat"));
//! assert_eq!(trie.get("cat"), None);
//! ```
//!
//! # Ownership
//!
//! Every node owns its children by value, so the structure is a strict tree:
//! detaching an edge frees the whole subtree behind it, and dropping the trie
//! frees everything. Teardown is iterative, so very long keys are safe to drop.
//!
//! The trie has no internal synchronization. Wrap it in a lock if it must be
//! shared between threads.

mod config;
mod error;
mod limit;
mod node;

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

pub use config::{OhanaTrieConfig, TraversalOrder};
pub use error::OhanaTrieError;
pub use limit::{Limit, DEFAULT_LIMIT};
pub use node::TrieNode;

/// Result type for Ohana Trie operations
pub type OhanaTrieResult<T> = Result<T, OhanaTrieError>;

/// Ohana Trie maps string keys to values, sharing storage between keys with
/// common prefixes.
///
/// Key features:
/// * Any `char` sequence is a valid key, including the empty string
/// * Removal prunes nodes no other key depends on
/// * Prefix enumeration with an explicit result [`Limit`]
/// * Deterministic, key-ordered enumeration by default
#[derive(Clone)]
pub struct OhanaTrie<V> {
    /// The root node, standing for the empty prefix
    root: TrieNode<V>,

    /// Configuration options
    config: OhanaTrieConfig,
}

impl<V> OhanaTrie<V> {
    /// Creates a new empty `OhanaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(OhanaTrieConfig::default())
    }

    /// Creates a new empty `OhanaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: OhanaTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &OhanaTrieConfig {
        &self.config
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// Nodes along the key are created as needed. The empty key is stored on
    /// the root node.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// The value previously stored under `key`, or `None` if the key is new.
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str>,
    {
        let mut current = &mut self.root;
        for c in key.as_ref().chars() {
            current = current.add_child(c);
        }
        current.set_value(value)
    }

    /// Retrieves the value stored under a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up.
    ///
    /// # Returns
    ///
    /// The value for `key`, or `None` if the path is missing or the node at
    /// the end of it does not hold a value.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        self.find_node(key.as_ref())?.get_value()
    }

    /// Mutable counterpart of [`OhanaTrie::get`].
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut V>
    where
        K: AsRef<str>,
    {
        let mut current = &mut self.root;
        for c in key.as_ref().chars() {
            current = current.get_child_mut(c)?;
        }
        current.value_mut()
    }

    /// Checks if a key is stored in the trie.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Removes a key from the trie and prunes nodes that are no longer needed.
    ///
    /// A key is present only if its node holds a value; a node that merely
    /// sits on the path of longer keys does not count. After the value is
    /// cleared, the chain of nodes that now have neither children nor a
    /// value is detached, starting at the end of the key and stopping at the
    /// first ancestor that is still needed. The root is never detached.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove.
    ///
    /// # Returns
    ///
    /// `true` if the key was present and has been removed, `false` if it was
    /// not present, in which case the trie is unchanged.
    pub fn remove<K>(&mut self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.take(key).is_some()
    }

    /// Removes a key and returns the value that was stored under it.
    ///
    /// Pruning behaves exactly as in [`OhanaTrie::remove`].
    pub fn take<K>(&mut self, key: K) -> Option<V>
    where
        K: AsRef<str>,
    {
        let symbols: Vec<char> = key.as_ref().chars().collect();

        // `keep` ends up as the depth of the deepest node on the path that
        // survives pruning: the root, a terminal node, or a branch point.
        let mut keep = 0;
        let mut current = &mut self.root;
        for (depth, &c) in symbols.iter().enumerate() {
            if current.is_end() || current.child_count() > 1 {
                keep = depth;
            }
            current = current.get_child_mut(c)?;
        }

        let value = current.clear_value()?;
        if current.has_children() || symbols.is_empty() {
            return Some(value);
        }

        let mut parent = &mut self.root;
        for &c in &symbols[..keep] {
            match parent.get_child_mut(c) {
                Some(child) => parent = child,
                None => return Some(value),
            }
        }
        parent.remove_child(symbols[keep]);

        tracing::trace!(
            key_len = symbols.len(),
            pruned = symbols.len() - keep,
            "Pruned trie branch after removal"
        );

        Some(value)
    }

    /// Checks whether any stored key starts with `prefix`.
    ///
    /// The prefix itself need not be a stored key. The empty prefix always
    /// matches because the root always exists.
    pub fn prefix_search<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Collects the values of keys starting with `prefix`.
    ///
    /// The node at the end of `prefix` is included if it holds a value.
    /// Enumeration is depth first and stops once `limit` values have been
    /// collected. With [`TraversalOrder::Sorted`] the values come back in key
    /// order; with [`TraversalOrder::Unordered`] callers may rely only on the
    /// count and on every value belonging to a matching key.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    /// * `limit` - Maximum number of values to return. Accepts a [`Limit`],
    ///   a `usize`, or a signed sentinel where any negative means unbounded.
    ///
    /// # Returns
    ///
    /// Exactly `min(matches, limit)` values, or an empty vector when no key
    /// starts with `prefix`.
    pub fn autocomplete<P, L>(&self, prefix: P, limit: L) -> Vec<&V>
    where
        P: AsRef<str>,
        L: Into<Limit>,
    {
        let mut results = Vec::new();
        self.walk_prefix(prefix.as_ref(), limit.into(), |_, value| results.push(value));
        results
    }

    /// Autocomplete using the configured default limit.
    pub fn suggest<P>(&self, prefix: P) -> Vec<&V>
    where
        P: AsRef<str>,
    {
        self.autocomplete(prefix, self.config.get_default_limit())
    }

    /// Collects the keys starting with `prefix`, under the same traversal
    /// and limit rules as [`OhanaTrie::autocomplete`].
    pub fn keys_with_prefix<P, L>(&self, prefix: P, limit: L) -> Vec<String>
    where
        P: AsRef<str>,
        L: Into<Limit>,
    {
        let mut results = Vec::new();
        self.walk_prefix(prefix.as_ref(), limit.into(), |key, _| results.push(key.to_string()));
        results
    }

    /// Collects `(key, value)` pairs for keys starting with `prefix`.
    pub fn entries_with_prefix<P, L>(&self, prefix: P, limit: L) -> Vec<(String, &V)>
    where
        P: AsRef<str>,
        L: Into<Limit>,
    {
        let mut results = Vec::new();
        self.walk_prefix(prefix.as_ref(), limit.into(), |key, value| {
            results.push((key.to_string(), value))
        });
        results
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// This walks the whole trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.nodes().filter(|node| node.is_end()).count()
    }

    /// Checks if the trie holds no keys.
    ///
    /// Pruning guarantees that an empty trie is a bare root.
    pub fn is_empty(&self) -> bool {
        !self.root.is_end() && !self.root.has_children()
    }

    /// Number of nodes reachable from the root, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Removes every key, keeping the root node.
    pub fn clear(&mut self) {
        let branches = self.root.child_count();
        self.root.reset();
        tracing::debug!(branches, "Cleared trie");
    }

    /// Inserts every word from `words`, computing each value from its word.
    ///
    /// # Arguments
    ///
    /// * `words` - The keys to insert.
    /// * `value_fn` - Produces the value for each key.
    pub fn add_word_list<I, K, F>(&mut self, words: I, mut value_fn: F)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
        F: FnMut(&str) -> V,
    {
        for word in words {
            let word = word.as_ref();
            let value = value_fn(word);
            self.insert(word, value);
        }
    }

    /// Reads one key per line from `reader` and inserts each of them.
    ///
    /// Blank lines are skipped and a trailing `\r` is stripped, so files with
    /// Windows line endings load the same keys.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of lines inserted.
    /// * `Err(OhanaTrieError)` - If reading failed or no key was found.
    pub fn load_word_list<R, F>(&mut self, reader: R, mut value_fn: F) -> OhanaTrieResult<usize>
    where
        R: BufRead,
        F: FnMut(&str) -> V,
    {
        let mut inserted = 0;
        for line in reader.lines() {
            let line = line?;
            let word = line.strip_suffix('\r').unwrap_or(&line);
            if word.is_empty() {
                continue;
            }
            let value = value_fn(word);
            self.insert(word, value);
            inserted += 1;
        }

        if inserted == 0 {
            return Err(OhanaTrieError::EmptyWordList);
        }
        tracing::debug!(inserted, "Loaded word list");
        Ok(inserted)
    }

    /// Reads `key<TAB>value` lines from `reader` and inserts each entry.
    ///
    /// Blank lines are skipped. Values are parsed with [`FromStr`].
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of entries inserted.
    /// * `Err(OhanaTrieError)` - On a read failure, a line without a tab, an
    ///   unparsable value, or an input with no entries. Entries before the
    ///   failing line stay inserted.
    pub fn load_entries<R>(&mut self, reader: R) -> OhanaTrieResult<usize>
    where
        R: BufRead,
        V: FromStr,
        V::Err: std::fmt::Display,
    {
        let mut inserted = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                continue;
            }

            let (key, raw) = line.split_once('\t').ok_or_else(|| OhanaTrieError::InvalidEntry {
                line: index + 1,
                reason: "missing tab separator".to_string(),
            })?;
            let value = raw.parse::<V>().map_err(|e| OhanaTrieError::InvalidEntry {
                line: index + 1,
                reason: format!("cannot parse value '{raw}': {e}"),
            })?;

            self.insert(key, value);
            inserted += 1;
        }

        if inserted == 0 {
            return Err(OhanaTrieError::EmptyWordList);
        }
        tracing::debug!(inserted, "Loaded trie entries");
        Ok(inserted)
    }

    /// Resolves the node at the end of `prefix`.
    fn find_node(&self, prefix: &str) -> Option<&TrieNode<V>> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }

    /// Iterates over every node reachable from the root.
    fn nodes(&self) -> impl Iterator<Item = &TrieNode<V>> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().map(|(_, child)| child));
            Some(node)
        })
    }

    /// Depth-first walk over the terminal nodes under `prefix`, handing each
    /// key and value to `visit` until `limit` is reached.
    ///
    /// Uses an explicit stack so enumeration depth is not bounded by the
    /// thread's stack size.
    fn walk_prefix<'a, F>(&'a self, prefix: &str, limit: Limit, mut visit: F)
    where
        F: FnMut(&str, &'a V),
    {
        let Some(start) = self.find_node(prefix) else {
            return;
        };

        let mut key = String::from(prefix);
        // (node, key length before its edge, edge symbol)
        let mut stack: Vec<(&'a TrieNode<V>, usize, Option<char>)> = vec![(start, key.len(), None)];
        let mut found = 0;

        while let Some((node, base_len, symbol)) = stack.pop() {
            if limit.is_reached(found) {
                break;
            }

            key.truncate(base_len);
            if let Some(c) = symbol {
                key.push(c);
            }

            if let Some(value) = node.get_value() {
                visit(&key, value);
                found += 1;
            }

            let len = key.len();
            match self.config.get_traversal() {
                // Pushed in reverse so the smallest symbol is popped first
                TraversalOrder::Sorted => stack.extend(
                    node.sorted_children()
                        .into_iter()
                        .rev()
                        .map(|(c, child)| (child, len, Some(c))),
                ),
                TraversalOrder::Unordered => {
                    stack.extend(node.children().map(|(c, child)| (child, len, Some(c))))
                }
            }
        }
    }
}

impl<V> fmt::Debug for OhanaTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OhanaTrie")
            .field("len", &self.len())
            .field("node_count", &self.node_count())
            .field("config", &self.config)
            .finish()
    }
}

impl<V> Default for OhanaTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for OhanaTrie<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<K, V> Extend<(K, V)> for OhanaTrie<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
