//! Quotable API source
//!
//! Implementation of `QuoteSource` for the Quotable service
//! (<https://github.com/lukePeavey/quotable>).

use crate::config::network::{DEFAULT_API_URL, RANDOM_PATH};
use crate::data::types::Quote;
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::QuoteSource;

use serde::Deserialize;

/// `GET /random` response; fields beyond these are ignored
#[derive(Debug, Deserialize)]
struct QuotableQuote {
    content: String,
    author: String,
}

impl From<QuotableQuote> for Quote {
    fn from(q: QuotableQuote) -> Self {
        Quote::new(q.content, q.author)
    }
}

/// Quotable API source
pub struct QuotableSource {
    client: HttpClient,
    base_url: String,
}

impl QuotableSource {
    /// Create a source using the default server
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(HttpClient::new()?, DEFAULT_API_URL))
    }

    /// Create a source with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(HttpClient::new()?, base_url))
    }

    /// Create a source with a preconfigured client
    pub fn with_client(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the random-quote endpoint
    pub fn random_url(&self) -> String {
        format!("{}{}", self.base_url, RANDOM_PATH)
    }
}

impl QuoteSource for QuotableSource {
    fn name(&self) -> &'static str {
        "Quotable"
    }

    fn fetch_random(&self) -> Result<Quote> {
        let quote: QuotableQuote = self.client.get_json(&self.random_url())?;
        Ok(quote.into())
    }
}
