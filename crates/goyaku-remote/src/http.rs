//! HTTP backend abstraction for glossary document fetches.
//!
//! Trait-based so the client can be tested with canned responses. The
//! production implementation uses reqwest. There is no retry: a failed
//! document fetch voids the whole remote tier and the resolver moves on.

use crate::error::{RemoteError, RemoteResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `GlossarySource` port on `RemoteGlossary`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a backend with the given timeout and user agent.
    pub fn new(timeout: std::time::Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// A fake HTTP backend that returns canned JSON per URL pattern.
    ///
    /// URLs with no matching pattern fail with a 404.
    pub struct FakeBackend {
        responses: Mutex<HashMap<String, serde_json::Value>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(HashMap::new()),
            }
        }

        /// Add a canned response for a URL substring.
        pub fn with_response(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), json);
            self
        }

        fn find_response(&self, url: &str) -> Option<serde_json::Value> {
            let responses = self.responses.lock().unwrap();
            responses
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, json)| json.clone())
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T> {
            let json = self
                .find_response(url.as_str())
                .ok_or_else(|| RemoteError::RequestFailed {
                    status: 404,
                    url: url.to_string(),
                })?;

            serde_json::from_value(json).map_err(Into::into)
        }
    }
}
