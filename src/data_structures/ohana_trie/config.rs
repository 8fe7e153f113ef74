// Copyright (c) 2025 Ohana Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Ohana Trie.

use serde::{Deserialize, Serialize};

use super::limit::{Limit, DEFAULT_LIMIT};

/// Order in which prefix enumeration visits the children of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Visit children by ascending symbol, so results come back in key order
    #[default]
    Sorted,
    /// Visit children in whatever order the child map yields them
    Unordered,
}

/// Configuration for the Ohana Trie.
///
/// Only enumeration behaviour is tunable; insertion, lookup and removal have
/// no knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhanaTrieConfig {
    /// Limit applied by [`OhanaTrie::suggest`](super::OhanaTrie::suggest)
    default_limit: Limit,

    /// Child visiting order for prefix enumeration
    traversal: TraversalOrder,
}

impl OhanaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - default_limit: 50
    /// - traversal: sorted
    pub fn new() -> Self {
        Self {
            default_limit: Limit::Bounded(DEFAULT_LIMIT),
            traversal: TraversalOrder::Sorted,
        }
    }

    /// Set the limit used when no explicit limit is given.
    pub fn with_default_limit(mut self, limit: impl Into<Limit>) -> Self {
        self.default_limit = limit.into();
        self
    }

    /// Set the child visiting order for prefix enumeration.
    pub fn with_traversal(mut self, traversal: TraversalOrder) -> Self {
        self.traversal = traversal;
        self
    }

    /// Get the default enumeration limit
    pub fn get_default_limit(&self) -> Limit {
        self.default_limit
    }

    /// Get the traversal order
    pub fn get_traversal(&self) -> TraversalOrder {
        self.traversal
    }
}

impl Default for OhanaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
