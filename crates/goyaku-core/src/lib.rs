//! Core domain types and port definitions for goyaku.
//!
//! This crate owns the glossary data model, the port traits that
//! infrastructure adapters implement, and the tiered resolver that turns
//! those ports into one authoritative glossary. It has no knowledge of
//! HTTP or storage details; those live in `goyaku-remote` and
//! `goyaku-store`.

pub mod bundled;
pub mod dictionary;
pub mod glossary;
pub mod paths;
pub mod ports;
pub mod resolver;

// Re-export commonly used types for convenience
pub use dictionary::Dictionary;
pub use glossary::{CachedGlossary, Glossary, GlossaryOrigin, ResolvedGlossary};
pub use paths::{PathError, data_root, database_path};
pub use ports::{CacheError, GlossaryCache, GlossarySource, SourceError};
pub use resolver::GlossaryResolver;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
