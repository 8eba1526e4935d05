//! SQLite-backed glossary cache.
//!
//! Implements the `GlossaryCache` port from `goyaku-core`: the last
//! successfully fetched glossary pair, stored as JSON text under two
//! fixed slots in a key-value table.

mod repository;
mod setup;

pub use repository::SqliteGlossaryCache;
pub use setup::setup_database;

#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
