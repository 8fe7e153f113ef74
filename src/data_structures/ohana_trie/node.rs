// Copyright (c) 2025 Ohana Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Ohana Trie.
//!
//! Nodes are the building blocks of the trie. Each node owns its children
//! outright, keyed by the character on the edge leading to them, and may hold
//! a value marking the end of a stored key.

use std::fmt;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child map type: one exclusively owned node per outgoing symbol.
pub(crate) type Children<V> = HashMap<char, TrieNode<V>, FnvBuildHasher>;

/// A node in the Ohana Trie.
///
/// A node is terminal exactly when it holds a value. There is no separate
/// end-of-key flag that could disagree with the value slot.
pub struct TrieNode<V> {
    /// Map of characters to owned child nodes
    children: Children<V>,

    /// Value stored under the key spelled by the path to this node
    value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new node with no children and no value.
    pub fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FnvBuildHasher::default()),
            value: None,
        }
    }

    /// Returns `true` if this node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the child reached through `symbol`, if there is one.
    pub fn get_child(&self, symbol: char) -> Option<&TrieNode<V>> {
        self.children.get(&symbol)
    }

    /// Mutable counterpart of [`TrieNode::get_child`].
    pub fn get_child_mut(&mut self, symbol: char) -> Option<&mut TrieNode<V>> {
        self.children.get_mut(&symbol)
    }

    /// Returns the child for `symbol`, creating an empty one first if needed.
    ///
    /// Calling this twice with the same symbol yields the same child.
    pub fn add_child(&mut self, symbol: char) -> &mut TrieNode<V> {
        self.children.entry(symbol).or_insert_with(TrieNode::new)
    }

    /// Detaches the child for `symbol` along with its whole subtree.
    ///
    /// Returns the detached node, or `None` if there was no such edge.
    pub fn remove_child(&mut self, symbol: char) -> Option<TrieNode<V>> {
        self.children.remove(&symbol)
    }

    /// Returns `true` if this node marks the end of a stored key.
    pub fn is_end(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the value held by this node.
    pub fn get_value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns the value held by this node for in-place update.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Installs `value`, returning whatever was stored before.
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// Takes the value out of this node, leaving it non-terminal.
    ///
    /// Children are left untouched.
    pub fn clear_value(&mut self) -> Option<V> {
        self.value.take()
    }

    /// Iterates over the children in map order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode<V>)> {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }

    /// Children ordered by symbol.
    pub fn sorted_children(&self) -> Vec<(char, &TrieNode<V>)> {
        let mut children: Vec<_> = self.children().collect();
        children.sort_unstable_by_key(|(symbol, _)| *symbol);
        children
    }

    /// Drops every child and the value, keeping the node itself.
    pub(crate) fn reset(&mut self) {
        self.value = None;
        // Go through `Drop` so a deep subtree is torn down iteratively.
        let detached = std::mem::take(&mut self.children);
        drop(TrieNode {
            children: detached,
            value: None,
        });
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TrieNode<V> {
    // Same depth concern as `Drop`: a derived clone recurses once per level.
    fn clone(&self) -> Self {
        // (edge symbol into the node, source children still to copy, copy so far)
        let mut stack: Vec<(Option<char>, Vec<(char, &TrieNode<V>)>, TrieNode<V>)> =
            vec![(None, self.children().collect(), self.clone_shallow())];
        let mut root = None;

        while let Some((symbol, mut pending, node)) = stack.pop() {
            if let Some((c, child)) = pending.pop() {
                stack.push((symbol, pending, node));
                stack.push((Some(c), child.children().collect(), child.clone_shallow()));
                continue;
            }

            match (symbol, stack.last_mut()) {
                (Some(c), Some((_, _, parent))) => {
                    parent.children.insert(c, node);
                }
                _ => root = Some(node),
            }
        }

        root.unwrap_or_default()
    }
}

impl<V: Clone> TrieNode<V> {
    /// Copy of the value with room for the children, but no children yet.
    fn clone_shallow(&self) -> Self {
        Self {
            children: HashMap::with_capacity_and_hasher(
                self.children.len(),
                FnvBuildHasher::default(),
            ),
            value: self.value.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieNode<V> {
    // Lists edge symbols only, so formatting never descends the subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<char> = self.sorted_children().into_iter().map(|(c, _)| c).collect();
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("children", &symbols)
            .finish()
    }
}

impl<V> Drop for TrieNode<V> {
    // A key of length n nests n maps; the default recursive drop would use
    // one stack frame per level.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<V>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
