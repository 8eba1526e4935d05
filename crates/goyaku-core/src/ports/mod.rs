//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `sqlx` types in any signature
//! - Absent cache slots are `None`, never errors
//! - Implementations report their own failures before propagating them

pub mod glossary_cache;
pub mod glossary_source;

use thiserror::Error;

pub use glossary_cache::GlossaryCache;
pub use glossary_source::GlossarySource;

/// Errors from remote glossary source operations.
///
/// These are domain-level errors; implementation-specific errors
/// (HTTP status, JSON decode) are mapped to these at the adapter boundary.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document request failed with an HTTP error status.
    #[error("glossary request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or connectivity error.
    #[error("network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The response body was not the expected flat string map.
    #[error("invalid glossary document: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Source configuration error (e.g. malformed document URL).
    #[error("source configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Errors from persistent glossary cache operations.
///
/// Absence of a cached slot is not an error; these cover the storage
/// medium itself failing.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
