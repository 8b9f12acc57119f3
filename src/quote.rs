//! Quote values and the quote source abstraction.
//!
//! A [`Quote`] has no identity beyond its text. Quotes are produced by a
//! [`QuoteSource`]; the production implementation talks HTTP to the quote service.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod service;
pub mod worker;

pub use service::HttpQuoteService;
pub use worker::fetch_worker_loop;

/// Text shown before the first successful fetch.
pub const PLACEHOLDER_QUOTE: &str = "Press \"g\" to fetch a random quote!";

/// A quote, compared by exact text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(String);

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The placeholder displayed at startup
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_QUOTE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_QUOTE
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Quote {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Quote {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Quote {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Anything that can hand out a random quote.
///
/// Every failure is reported as [`RquoteError::FetchFailure`](crate::RquoteError)
/// so callers can show it to the user verbatim.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch one quote. No retries and no timeout.
    async fn fetch_quote(&self) -> Result<Quote>;
}
