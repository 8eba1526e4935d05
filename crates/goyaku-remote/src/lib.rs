//! Remote glossary document client.
//!
//! Implements the `GlossarySource` port from `goyaku-core` over plain
//! HTTPS GET: two independently versioned JSON documents, each a flat
//! string-to-string map with no envelope. The HTTP transport is behind a
//! trait so tests can inject canned responses.

mod client;
mod config;
mod error;
mod http;

// ============================================================================
// Public API
// ============================================================================

pub use client::{DefaultRemoteGlossary, RemoteGlossary};
pub use config::RemoteConfig;
pub use error::RemoteError;
pub use http::{HttpBackend, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
