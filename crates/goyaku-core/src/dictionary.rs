//! The query-facing dictionary.

use tracing::info;

use crate::glossary::{Glossary, GlossaryOrigin};
use crate::resolver::GlossaryResolver;

/// Answers `lookup(word) -> meaning` over one resolved glossary pair.
///
/// A `Dictionary` resolves exactly once at construction and never
/// refreshes itself; it exclusively owns its pair for its lifetime.
pub struct Dictionary {
    glossary: Glossary,
    origin: GlossaryOrigin,
}

impl Dictionary {
    /// Build a dictionary by running one tier resolution.
    ///
    /// Infallible: the resolver always yields a pair, bundled at worst.
    pub async fn load(resolver: &GlossaryResolver) -> Self {
        let resolved = resolver.resolve().await;
        info!(
            origin = resolved.origin.as_str(),
            entries = resolved.glossary.dic.len(),
            "glossary resolved"
        );
        Self {
            glossary: resolved.glossary,
            origin: resolved.origin,
        }
    }

    /// Build a dictionary directly over a glossary, skipping resolution.
    ///
    /// No tier was consulted, so `origin()` reports `Bundled` regardless
    /// of where the glossary actually came from; use [`Dictionary::load`]
    /// when tier provenance matters.
    pub const fn from_glossary(glossary: Glossary) -> Self {
        Self {
            glossary,
            origin: GlossaryOrigin::Bundled,
        }
    }

    /// Which tier served this dictionary's pair.
    pub const fn origin(&self) -> GlossaryOrigin {
        self.origin
    }

    /// Look up the meaning of a surface word.
    ///
    /// The word is lower-cased (locale-independent) before lookup, so
    /// `"Goroutine"` and `"goroutine"` resolve identically. Any miss,
    /// whether the word is unknown or its stem has no meaning entry,
    /// returns the empty string; lookup never fails. The two miss kinds
    /// are deliberately indistinguishable.
    pub fn lookup(&self, word: &str) -> &str {
        let normalized = word.to_lowercase();
        let Some(stem) = self.glossary.word2stem.get(&normalized) else {
            return "";
        };
        self.glossary
            .dic
            .get(stem)
            .map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn map_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_glossary(Glossary::new(
            map_of(&[("goroutine", "軽量スレッド"), ("channel", "チャネル")]),
            map_of(&[
                ("goroutine", "goroutine"),
                ("goroutines", "goroutine"),
                ("channels", "channel"),
                // stem with no dic entry
                ("orphan", "orphaned-stem"),
            ]),
        ))
    }

    #[test]
    fn lookup_resolves_word_through_stem() {
        let dict = dictionary();
        assert_eq!(dict.lookup("goroutine"), "軽量スレッド");
        assert_eq!(dict.lookup("goroutines"), "軽量スレッド");
        assert_eq!(dict.lookup("channels"), "チャネル");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = dictionary();
        assert_eq!(dict.lookup("Goroutine"), dict.lookup("goroutine"));
        assert_eq!(dict.lookup("GOROUTINES"), "軽量スレッド");
    }

    #[test]
    fn unknown_word_returns_empty_string() {
        let dict = dictionary();
        assert_eq!(dict.lookup("monad"), "");
        assert_eq!(dict.lookup(""), "");
    }

    #[test]
    fn direct_construction_reports_bundled_origin() {
        assert_eq!(dictionary().origin(), GlossaryOrigin::Bundled);
    }

    #[test]
    fn stem_without_meaning_returns_empty_string() {
        let dict = dictionary();
        assert_eq!(dict.lookup("orphan"), "");
    }

    #[tokio::test]
    async fn load_with_unreachable_tiers_serves_bundled_scenario() {
        use crate::ports::{CacheError, GlossaryCache, GlossarySource, SourceError};
        use crate::{CachedGlossary, GlossaryResolver};
        use async_trait::async_trait;
        use std::sync::Arc;

        struct DownSource;

        #[async_trait]
        impl GlossarySource for DownSource {
            async fn fetch_dic(&self) -> Result<HashMap<String, String>, SourceError> {
                Err(SourceError::Network {
                    message: "offline".to_string(),
                })
            }

            async fn fetch_word2stem(&self) -> Result<HashMap<String, String>, SourceError> {
                Err(SourceError::Network {
                    message: "offline".to_string(),
                })
            }
        }

        struct EmptyCache;

        #[async_trait]
        impl GlossaryCache for EmptyCache {
            async fn write(&self, _: &Glossary) -> Result<(), CacheError> {
                Ok(())
            }

            async fn read(&self) -> Result<CachedGlossary, CacheError> {
                Ok(CachedGlossary::default())
            }
        }

        let resolver = GlossaryResolver::new(Arc::new(DownSource), Arc::new(EmptyCache))
            .with_bundled(Glossary::new(
                map_of(&[("goroutine", "軽量スレッド")]),
                map_of(&[("goroutine", "goroutine")]),
            ));

        let dict = Dictionary::load(&resolver).await;
        assert_eq!(dict.origin(), GlossaryOrigin::Bundled);
        assert_eq!(dict.lookup("Goroutine"), "軽量スレッド");
        assert_eq!(dict.lookup("channel"), "");
    }
}
