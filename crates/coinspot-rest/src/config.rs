//! Client configuration

use coinspot_auth::Credentials;
use reqwest::Url;

use crate::error::{RestError, RestResult};

/// Default public API base URL
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://www.coinspot.com.au/pubapi/v2";
/// Default read-only API base URL
pub const DEFAULT_READ_ONLY_BASE_URL: &str = "https://www.coinspot.com.au/api/v2/ro";
/// Default full-access API base URL
pub const DEFAULT_PRIVATE_BASE_URL: &str = "https://www.coinspot.com.au/api/v2";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
///
/// # Example
///
/// ```
/// use coinspot_rest::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(10)
///     .with_public_base_url("http://localhost:8080/pubapi/v2");
/// assert_eq!(config.timeout_secs, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Base URL of the public market data API
    pub public_base_url: String,
    /// Base URL of the read-only authenticated API
    pub read_only_base_url: String,
    /// Base URL of the full-access authenticated API
    pub private_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            read_only_base_url: DEFAULT_READ_ONLY_BASE_URL.to_string(),
            private_base_url: DEFAULT_PRIVATE_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Point public endpoints at another host (sandbox, test double)
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into();
        self
    }

    /// Point read-only endpoints at another host
    pub fn with_read_only_base_url(mut self, url: impl Into<String>) -> Self {
        self.read_only_base_url = url.into();
        self
    }

    /// Point full-access endpoints at another host
    pub fn with_private_base_url(mut self, url: impl Into<String>) -> Self {
        self.private_base_url = url.into();
        self
    }

    /// Check that every base URL is an absolute http(s) URL
    pub fn validate(&self) -> RestResult<()> {
        for (name, url) in [
            ("public_base_url", &self.public_base_url),
            ("read_only_base_url", &self.read_only_base_url),
            ("private_base_url", &self.private_base_url),
        ] {
            let parsed = Url::parse(url)
                .map_err(|e| RestError::InvalidConfig(format!("{name} `{url}`: {e}")))?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(RestError::InvalidConfig(format!(
                    "{name} `{url}`: unsupported scheme `{}`",
                    parsed.scheme()
                )));
            }
        }

        Ok(())
    }
}
