//! Tiered glossary resolution.
//!
//! Produces exactly one glossary pair from three ordered tiers: the remote
//! documents, the persistent cache, and finally the bundled snapshot. Each
//! tier is all-or-nothing; the pair is never mixed across tiers, so a
//! stale `dic` can never be paired with a fresher `word2stem`.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::bundled;
use crate::glossary::{Glossary, GlossaryOrigin, ResolvedGlossary};
use crate::ports::{GlossaryCache, GlossarySource};

/// Resolves one authoritative glossary pair per call.
///
/// Built at the composition root from the concrete adapters. Resolution is
/// infallible: every failure above the bundled tier is absorbed here.
pub struct GlossaryResolver {
    source: Arc<dyn GlossarySource>,
    cache: Arc<dyn GlossaryCache>,
    bundled: Glossary,
}

impl GlossaryResolver {
    /// Create a resolver over the given source and cache adapters.
    pub fn new(source: Arc<dyn GlossarySource>, cache: Arc<dyn GlossaryCache>) -> Self {
        Self {
            source,
            cache,
            bundled: bundled::glossary(),
        }
    }

    /// Substitute the bundled fallback table.
    #[must_use]
    pub fn with_bundled(mut self, bundled: Glossary) -> Self {
        self.bundled = bundled;
        self
    }

    /// Resolve one glossary pair, trying remote, then cache, then bundled.
    ///
    /// Tiers are consulted strictly in order and none is retried within a
    /// single call. The bundled tier cannot fail, so neither can this.
    pub async fn resolve(&self) -> ResolvedGlossary {
        if let Some(glossary) = self.try_remote().await {
            return ResolvedGlossary {
                glossary,
                origin: GlossaryOrigin::Remote,
            };
        }

        if let Some(glossary) = self.try_cache().await {
            return ResolvedGlossary {
                glossary,
                origin: GlossaryOrigin::Cache,
            };
        }

        ResolvedGlossary {
            glossary: self.bundled.clone(),
            origin: GlossaryOrigin::Bundled,
        }
    }

    /// Remote tier: both documents must be fetched for the tier to count.
    ///
    /// On joint success the cache is refreshed as a courtesy; a write
    /// failure is logged and does not unwind the remote result.
    async fn try_remote(&self) -> Option<Glossary> {
        let (dic, word2stem) =
            tokio::join!(self.source.fetch_dic(), self.source.fetch_word2stem());

        match (dic, word2stem) {
            (Ok(dic), Ok(word2stem)) => {
                let glossary = Glossary::new(dic, word2stem);
                if let Err(e) = self.cache.write(&glossary).await {
                    warn!("failed to refresh glossary cache: {e}");
                }
                Some(glossary)
            }
            _ => {
                // Detail was already reported by the source
                debug!("remote glossary unavailable, falling back to cache");
                None
            }
        }
    }

    /// Cache tier: only a complete pair is used; a read error or a partial
    /// cache both fall through to the bundled tier.
    async fn try_cache(&self) -> Option<Glossary> {
        match self.cache.read().await {
            Ok(cached) => cached.into_complete(),
            Err(e) => {
                warn!("failed to read glossary cache: {e}");
                None
            }
        }
    }
}
