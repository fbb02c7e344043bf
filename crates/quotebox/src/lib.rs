//! Quotebox
//!
//! Random quote session, persisted favorites, and the command-driven
//! controller that frontends talk to.
//!
//! ## Quick start
//!
//! ```no_run
//! use quotebox::data::{FavoritesStore, FileStore};
//! use quotebox::providers::{QuotableSource, QuoteSource};
//! use quotebox::session::QuoteSession;
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;
pub mod session;
