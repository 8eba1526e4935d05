//! Public configuration for the remote glossary client.

use std::time::Duration;

/// Base URL the published glossary documents live under.
const DEFAULT_BASE: &str = "https://raw.githubusercontent.com/DQNEO/gospec/main/docs";

/// Configuration for the remote glossary client.
///
/// # Example
///
/// ```
/// use goyaku_remote::RemoteConfig;
/// use std::time::Duration;
///
/// let config = RemoteConfig::new().with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// URL of the stem-to-meaning document
    pub(crate) dic_url: String,
    /// URL of the surface-word-to-stem document
    pub(crate) word2stem_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            dic_url: format!("{DEFAULT_BASE}/dic.ja.json"),
            word2stem_url: format!("{DEFAULT_BASE}/word2stem.json"),
            user_agent: concat!("goyaku/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RemoteConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL of the stem-to-meaning document.
    #[must_use]
    pub fn with_dic_url(mut self, url: impl Into<String>) -> Self {
        self.dic_url = url.into();
        self
    }

    /// Set the URL of the surface-word-to-stem document.
    #[must_use]
    pub fn with_word2stem_url(mut self, url: impl Into<String>) -> Self {
        self.word2stem_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
