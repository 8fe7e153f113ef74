//! Test modules for Ohana Trie.
//!
//! This module contains the crate-internal test suite:
//! - Property-based tests of the trie against a `HashMap` model
//! - Configuration loading and validation tests
//! - Error reporting tests
//! - Shared strategies and fixtures

pub mod ohana_trie_tests;

pub use test_utils::{key_strategy, op_strategy, word_strategy, TestFixture, TrieOp};
