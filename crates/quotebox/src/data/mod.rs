//! Data persistence
//!
//! Handles favorites, settings, and the key-value storage they sit on.

pub mod favorites;
pub mod settings;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::FavoritesStore;
pub use settings::Settings;
pub use storage::{config_dir, FileStore, KeyValueStore, MemoryStore};
pub use types::Quote;
