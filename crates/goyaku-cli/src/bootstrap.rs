//! CLI bootstrap - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together for the
//! CLI adapter: the database pool and cache repository (via goyaku-store),
//! the remote document client (via goyaku-remote), and the resolver
//! (via goyaku-core). Command handlers receive the composed context.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use goyaku_core::ports::{GlossarySource, SourceError};
use goyaku_core::{GlossaryResolver, database_path};
use goyaku_remote::{DefaultRemoteGlossary, RemoteConfig};
use goyaku_store::{SqliteGlossaryCache, setup_database};

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The tiered glossary resolver.
    pub resolver: GlossaryResolver,
}

/// A source that never succeeds, for `--offline` runs.
///
/// Resolution then starts at the cache tier, exactly as if the network
/// were unreachable.
struct OfflineSource;

#[async_trait]
impl GlossarySource for OfflineSource {
    async fn fetch_dic(&self) -> Result<HashMap<String, String>, SourceError> {
        Err(SourceError::Network {
            message: "offline mode".to_string(),
        })
    }

    async fn fetch_word2stem(&self) -> Result<HashMap<String, String>, SourceError> {
        Err(SourceError::Network {
            message: "offline mode".to_string(),
        })
    }
}

/// Wire the adapters into a resolver.
pub async fn bootstrap(offline: bool) -> Result<CliContext> {
    let db_path = database_path()?;
    let pool = setup_database(&db_path).await?;
    let cache = Arc::new(SqliteGlossaryCache::new(pool));

    let source: Arc<dyn GlossarySource> = if offline {
        Arc::new(OfflineSource)
    } else {
        Arc::new(DefaultRemoteGlossary::new(RemoteConfig::new()))
    };

    Ok(CliContext {
        resolver: GlossaryResolver::new(source, cache),
    })
}
