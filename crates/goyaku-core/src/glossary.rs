//! Glossary data model.
//!
//! A glossary is the paired `(dic, word2stem)` mappings that together
//! answer a lookup: `word2stem` folds surface words (plurals, inflections,
//! case variants) down to a canonical stem, and `dic` maps that stem to a
//! human-readable Japanese meaning.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The paired glossary mappings.
///
/// Both maps are flat string-to-string tables with no envelope, matching
/// the shape of the published glossary documents. A `Glossary` is built
/// once per resolution and is immutable afterwards; the two maps always
/// come from the same tier, never mixed across tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    /// Stem (canonical headword) to meaning.
    pub dic: HashMap<String, String>,
    /// Surface word (lower-cased) to stem.
    pub word2stem: HashMap<String, String>,
}

impl Glossary {
    /// Create a glossary from its two maps.
    pub const fn new(dic: HashMap<String, String>, word2stem: HashMap<String, String>) -> Self {
        Self { dic, word2stem }
    }
}

/// The possibly-partial result of a cache read.
///
/// Either slot may be absent independently; a partial cache is detected
/// here and never promoted to a usable glossary.
#[derive(Debug, Clone, Default)]
pub struct CachedGlossary {
    /// Cached `dic` slot, if present and decodable.
    pub dic: Option<HashMap<String, String>>,
    /// Cached `word2stem` slot, if present and decodable.
    pub word2stem: Option<HashMap<String, String>>,
}

impl CachedGlossary {
    /// Promote to a full glossary, only when both slots are present.
    pub fn into_complete(self) -> Option<Glossary> {
        match (self.dic, self.word2stem) {
            (Some(dic), Some(word2stem)) => Some(Glossary { dic, word2stem }),
            _ => None,
        }
    }
}

/// Which tier served a resolved glossary.
///
/// Informational only: used for logging and CLI status display, never to
/// change lookup behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlossaryOrigin {
    /// Fetched from the remote glossary documents this resolution.
    Remote,
    /// Read back from the persistent cache.
    Cache,
    /// The build-time bundled fallback table.
    Bundled,
}

impl GlossaryOrigin {
    /// Human-readable tier name for display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Cache => "cache",
            Self::Bundled => "bundled",
        }
    }
}

/// A glossary together with the tier that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedGlossary {
    /// The resolved pair.
    pub glossary: Glossary,
    /// The tier that served it.
    pub origin: GlossaryOrigin,
}
