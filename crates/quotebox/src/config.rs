//! Configuration constants for quotebox

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quotebox";

    /// Settings file name inside the config directory
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Log file name used by interactive frontends
    pub const LOG_FILE: &str = "quotebox.log";
}

/// Network-related configuration
pub mod network {
    /// Default quote service
    pub const DEFAULT_API_URL: &str = "https://api.quotable.io";

    /// Endpoint returning one random quote
    pub const RANDOM_PATH: &str = "/random";

    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Quotebox/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Persistence configuration
pub mod storage {
    /// Key the favorites list is stored under
    pub const FAVORITES_KEY: &str = "favorites";
}

/// User-facing messages
pub mod messages {
    /// Shown in place of the quote when a fetch fails
    pub const FETCH_FAILED: &str = "Failed to load quote. Please try again.";

    /// Acknowledgment after a successful clipboard copy
    pub const COPIED: &str = "Quote copied to clipboard!";
}
