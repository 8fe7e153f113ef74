//! Ohana Trie Library
//!
//! An in-memory prefix tree mapping string keys to values of any type, with
//! removal that prunes dead branches and bounded prefix enumeration for
//! search-as-you-type, routing tables or symbol tables.
//!
//! Around the trie sit the pieces a host program needs to embed it:
//! layered configuration, error types with a pluggable reporter, and a small
//! driver binary.

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{Limit, OhanaTrie};

/// Version information for Ohana Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and loads the default global
/// configuration.
pub fn init() -> error::OhanaResult<()> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    config::init_default_config()?;

    Ok(())
}
