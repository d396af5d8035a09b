//! HTTP client for the quotes endpoint.
//!
//! `QuoteFetchClient` performs exactly one GET per call against
//! `{base}/v1/quotes` with a static `X-Api-Key` header and projects the JSON
//! array response onto its first record. A failed attempt is final: there are
//! no retries, no caching, and no request timeout is configured.
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Url};

use quote_common::net::{API_KEY_HEADER, quotes_url};
use quote_common::{FetchError, FetchOutcome, QuoteRecord};

use crate::config::FetchConfig;

/// Source of single quote records.
///
/// The seam between the coordinator and the concrete HTTP client; tests
/// substitute scripted sources through it.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetches one quote record, reporting a typed outcome.
    ///
    /// Every failure kind is terminal for the attempt; callers decide whether
    /// and when to issue another call.
    async fn fetch(&self) -> FetchOutcome;
}

/// HTTP fetcher for single quote records.
#[derive(Debug, Clone)]
pub struct QuoteFetchClient {
    http: Client,
    config: FetchConfig,
}

impl QuoteFetchClient {
    /// Creates a client with a fresh connection pool for the given config.
    pub fn new(config: FetchConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Issues one GET and returns the first record of the response array.
    ///
    /// Error mapping, in request order:
    /// - [`FetchError::BadUrl`] — the configured base does not form a URL.
    /// - [`FetchError::BadResponse`] — the transport failed (refused, reset,
    ///   DNS) before or while reading the body.
    /// - [`FetchError::InvalidData`] — the body was empty, or the array was.
    /// - [`FetchError::DecodeError`] — the body is not an array of records.
    pub async fn fetch(&self) -> FetchOutcome {
        let url = Url::parse(&quotes_url(&self.config.base_url))
            .map_err(|e| FetchError::BadUrl(e.to_string()))?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .send()
            .await
            .map_err(|e| FetchError::BadResponse(e.to_string()))?;

        // The status line is not inspected: any delivered body counts as
        // data, and an error body simply fails to decode.
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::BadResponse(e.to_string()))?;
        if body.is_empty() {
            return Err(FetchError::InvalidData);
        }

        let records: Vec<QuoteRecord> = serde_json::from_slice(&body)?;
        // Only the first record is consumed; trailing elements are discarded.
        let record = records.into_iter().next().ok_or(FetchError::InvalidData)?;
        info!("Fetched quote by {} ({})", record.author, record.category);
        Ok(record)
    }
}

#[async_trait]
impl QuoteSource for QuoteFetchClient {
    async fn fetch(&self) -> FetchOutcome {
        QuoteFetchClient::fetch(self).await
    }
}
