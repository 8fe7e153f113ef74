//! Data structures for Ohana Trie.
//!
//! All implementations are plain owned structures with no unsafe code and
//! no internal locking.

pub mod ohana_trie;

// Re-export common data structures
pub use ohana_trie::{
    Limit, OhanaTrie, OhanaTrieConfig, OhanaTrieError, OhanaTrieResult, TraversalOrder,
};
