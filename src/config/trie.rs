//! Trie configuration module.
//!
//! This module defines the settings that shape prefix enumeration: the
//! result limit used when callers don't pass one, and the order in which
//! children are visited.

use super::{ConfigResult, Validate};
use crate::data_structures::ohana_trie::{Limit, OhanaTrieConfig, TraversalOrder, DEFAULT_LIMIT};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Default number of autocomplete results; negative means unbounded
    pub default_limit: i64,

    /// Child visiting order for autocomplete
    pub traversal: TraversalOrder,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT as i64,
            traversal: TraversalOrder::Sorted,
        }
    }
}

impl TrieConfig {
    /// The configured default limit as a [`Limit`].
    pub fn limit(&self) -> Limit {
        Limit::from(self.default_limit)
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.default_limit".to_string(),
                message: "must be positive, or negative for unbounded".to_string(),
            });
        }
        Ok(())
    }
}

impl From<&TrieConfig> for OhanaTrieConfig {
    fn from(config: &TrieConfig) -> Self {
        OhanaTrieConfig::new()
            .with_default_limit(config.limit())
            .with_traversal(config.traversal)
    }
}
