//! Glossary document client and its `GlossarySource` port implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;
use url::Url;

use goyaku_core::ports::{GlossarySource, SourceError};

use crate::config::RemoteConfig;
use crate::error::RemoteError;
use crate::http::{HttpBackend, ReqwestBackend};

/// The production remote glossary source.
pub type DefaultRemoteGlossary = RemoteGlossary<ReqwestBackend>;

/// Fetches the two glossary documents over a pluggable HTTP backend.
///
/// Each fetch is one GET against a fixed document URL, decoded as a flat
/// string-to-string map. Failures are logged here with the identity of
/// the failing document, then propagated as port errors; there is no
/// retry and never a partial result.
pub struct RemoteGlossary<B: HttpBackend> {
    backend: B,
    config: RemoteConfig,
}

impl DefaultRemoteGlossary {
    /// Create a client over reqwest with the given configuration.
    pub fn new(config: RemoteConfig) -> Self {
        let backend = ReqwestBackend::new(config.timeout, &config.user_agent);
        Self { backend, config }
    }
}

impl<B: HttpBackend> RemoteGlossary<B> {
    /// Create a client over a custom HTTP backend.
    pub const fn with_backend(backend: B, config: RemoteConfig) -> Self {
        Self { backend, config }
    }

    async fn fetch_document(
        &self,
        name: &str,
        raw_url: &str,
    ) -> Result<HashMap<String, String>, SourceError> {
        let result = match Url::parse(raw_url) {
            Ok(url) => self.backend.get_json(&url).await,
            Err(e) => Err(RemoteError::InvalidUrl(e)),
        };

        result.map_err(|e| {
            warn!("failed to fetch {name}: {e}");
            map_error(e)
        })
    }
}

/// Convert internal `RemoteError` to the core `SourceError`.
fn map_error(err: RemoteError) -> SourceError {
    match err {
        RemoteError::RequestFailed { status, url } => SourceError::RequestFailed { status, url },
        RemoteError::Network(e) => SourceError::Network {
            message: e.to_string(),
        },
        RemoteError::InvalidUrl(e) => SourceError::Configuration {
            message: e.to_string(),
        },
        RemoteError::JsonParse(e) => SourceError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> GlossarySource for RemoteGlossary<B> {
    async fn fetch_dic(&self) -> Result<HashMap<String, String>, SourceError> {
        self.fetch_document("dic", &self.config.dic_url).await
    }

    async fn fetch_word2stem(&self) -> Result<HashMap<String, String>, SourceError> {
        self.fetch_document("word2stem", &self.config.word2stem_url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn config() -> RemoteConfig {
        RemoteConfig::new()
            .with_dic_url("https://glossary.test/dic.ja.json")
            .with_word2stem_url("https://glossary.test/word2stem.json")
    }

    #[tokio::test]
    async fn fetches_both_documents() {
        let backend = FakeBackend::new()
            .with_response("dic.ja.json", json!({"goroutine": "軽量スレッド"}))
            .with_response("word2stem.json", json!({"goroutines": "goroutine"}));

        let client = RemoteGlossary::with_backend(backend, config());

        let dic = client.fetch_dic().await.unwrap();
        assert_eq!(dic["goroutine"], "軽量スレッド");

        let word2stem = client.fetch_word2stem().await.unwrap();
        assert_eq!(word2stem["goroutines"], "goroutine");
    }

    #[tokio::test]
    async fn http_error_maps_to_request_failed() {
        // Fake backend 404s anything without a canned response
        let client = RemoteGlossary::with_backend(FakeBackend::new(), config());

        let err = client.fetch_dic().await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::RequestFailed { status: 404, .. }
        ));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_invalid_response() {
        let backend = FakeBackend::new().with_response("dic.ja.json", json!([1, 2, 3]));
        let client = RemoteGlossary::with_backend(backend, config());

        let err = client.fetch_dic().await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn bad_url_maps_to_configuration_error() {
        let client = RemoteGlossary::with_backend(
            FakeBackend::new(),
            RemoteConfig::new().with_dic_url("not a url"),
        );

        let err = client.fetch_dic().await.unwrap_err();
        assert!(matches!(err, SourceError::Configuration { .. }));
    }

    #[tokio::test]
    async fn one_document_failing_leaves_the_other_untouched() {
        let backend =
            FakeBackend::new().with_response("word2stem.json", json!({"slices": "slice"}));
        let client = RemoteGlossary::with_backend(backend, config());

        assert!(client.fetch_dic().await.is_err());
        assert!(client.fetch_word2stem().await.is_ok());
    }
}
