//! Quote providers
//!
//! Remote services that hand out random quotes.

pub mod quotable;
pub mod traits;

// Re-exports
pub use quotable::QuotableSource;
pub use traits::QuoteSource;
