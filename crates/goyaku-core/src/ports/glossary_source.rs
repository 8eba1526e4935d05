//! Remote glossary source port trait.

use std::collections::HashMap;

use async_trait::async_trait;

use super::SourceError;

/// Port trait for fetching the two glossary documents.
///
/// The implementation lives in `goyaku-remote`. Each method performs one
/// GET against a fixed, versioned document URL and decodes the body as a
/// flat string-to-string map.
///
/// # Design
///
/// - The two fetches are independent and may be issued concurrently
/// - No retry: a failure is reported (logged with the document identity)
///   and propagated; the resolver decides what happens next
/// - A partial result is never returned
#[async_trait]
pub trait GlossarySource: Send + Sync {
    /// Fetch the stem-to-meaning document.
    async fn fetch_dic(&self) -> Result<HashMap<String, String>, SourceError>;

    /// Fetch the surface-word-to-stem document.
    async fn fetch_word2stem(&self) -> Result<HashMap<String, String>, SourceError>;
}
