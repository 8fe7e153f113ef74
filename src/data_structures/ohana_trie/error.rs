// Copyright (c) 2025 Ohana Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Ohana Trie.
//!
//! The core trie operations are total and never fail. These errors come from
//! the bulk loading helpers that read keys from an external source.

/// Errors that can occur while filling an Ohana Trie from external input.
#[derive(Debug, thiserror::Error)]
pub enum OhanaTrieError {
    /// Reading from the underlying source failed.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be turned into a key/value entry.
    #[error("Invalid entry on line {line}: {reason}")]
    InvalidEntry {
        /// 1-based line number of the offending entry.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The source contained no keys at all.
    #[error("Word list contains no keys")]
    EmptyWordList,
}
