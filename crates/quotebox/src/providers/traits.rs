//! Quote source trait
//!
//! Defines the interface every quote service must implement.

use crate::data::types::Quote;
use crate::error::Result;

/// A source of random quotes
///
/// Implementations block until the quote arrives or the request fails;
/// callers run them off the controller thread.
pub trait QuoteSource: Send + Sync {
    /// Display name for the source (e.g., "Quotable")
    fn name(&self) -> &'static str;

    /// Fetch one random quote
    fn fetch_random(&self) -> Result<Quote>;
}
