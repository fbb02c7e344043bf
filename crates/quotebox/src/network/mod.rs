//! Network operations
//!
//! HTTP client and utilities.

pub mod client;

#[cfg(test)]
pub(crate) mod stub;

// Re-export commonly used types
pub use client::HttpClient;
