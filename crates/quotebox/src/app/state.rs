//! Application commands
//!
//! `AppCommand` is the unified command type sent by any frontend. Each
//! variant is one named UI event with exactly one handler in the controller.

use crate::data::types::Quote;
use crate::error::QuoteError;

/// Commands sent by frontends (and by fetch workers, for `QuoteFetched`)
#[derive(Debug)]
pub enum AppCommand {
    /// Fetch a new random quote
    Refresh,
    /// Add or remove the current quote from favorites
    ToggleFavorite,
    /// Copy the current quote to the clipboard
    CopyQuote,
    /// Remove every favorite and close the panel
    ClearFavorites,
    ShowFavorites,
    HideFavorites,

    // Shutdown the app
    Shutdown,

    // Internal: fetch finished on a worker thread (not sent by frontends)
    QuoteFetched {
        generation: u64,
        result: Result<Quote, QuoteError>,
    },
}
