//! Persistent glossary cache port trait.

use async_trait::async_trait;

use super::CacheError;
use crate::glossary::{CachedGlossary, Glossary};

/// Port trait for the durable glossary cache.
///
/// The implementation lives in `goyaku-store`. The cache holds the last
/// successfully fetched pair under two named slots (`dic`, `word2stem`);
/// either slot may be absent independently, and only the resolver ever
/// writes, so the two slots change together.
#[async_trait]
pub trait GlossaryCache: Send + Sync {
    /// Store both slots of the pair, overwriting any prior values.
    ///
    /// Callers treat this as best-effort: a write failure is logged and
    /// never unwinds a successful remote resolution.
    async fn write(&self, glossary: &Glossary) -> Result<(), CacheError>;

    /// Read both slots. An absent slot comes back as `None`, not an error.
    async fn read(&self) -> Result<CachedGlossary, CacheError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn GlossaryCache>) {}
}
