//! HTTP quote service client.
//!
//! Issues `GET {base_url}/quote` and expects `{ "quote": string }` back. Any other
//! status or body shape is a fetch failure.

use crate::error::{Result, RquoteError};
use crate::quote::{Quote, QuoteSource};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Message shown for a non-success HTTP status.
pub const STATUS_FAILURE_MESSAGE: &str = "Failed to fetch quote.";

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    quote: String,
}

/// reqwest-backed [`QuoteSource`].
#[derive(Debug, Clone)]
pub struct HttpQuoteService {
    http: Client,
    base_url: String,
}

impl HttpQuoteService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Build on top of an existing client (shared connection pool, custom TLS)
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the quote endpoint
    pub fn quote_url(&self) -> String {
        format!("{}/quote", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteService {
    async fn fetch_quote(&self) -> Result<Quote> {
        let url = self.quote_url();
        log::info!("Calling API at: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("quote service answered {}", status);
            return Err(RquoteError::fetch(STATUS_FAILURE_MESSAGE));
        }

        let body: QuoteResponse = response
            .json()
            .await
            .map_err(|e| RquoteError::fetch(format!("Malformed quote response: {}", e)))?;

        Ok(Quote::new(body.quote))
    }
}
