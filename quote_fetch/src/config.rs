//! Fetch configuration: API base URL and static key.
//!
//! The key is deliberately external configuration (CLI flag or environment
//! variable, see `quote_common::net::API_KEY_ENV`) so it never lives in the
//! source tree.
use quote_common::net::DEFAULT_BASE_URL;

/// Settings for [`crate::QuoteFetchClient`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// API base URL, without the `/v1/quotes` path.
    pub base_url: String,
    /// Static API key sent as `X-Api-Key` on every request.
    pub api_key: String,
}

impl FetchConfig {
    /// Creates a config against the default API base with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a config with an explicit base URL and key.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}
