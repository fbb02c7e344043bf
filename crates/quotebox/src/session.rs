//! Quote session
//!
//! Holds the currently displayed quote and the favorites store, and tracks
//! which fetch is the latest so out-of-order responses cannot overwrite a
//! newer quote.

use crate::data::favorites::FavoritesStore;
use crate::data::storage::KeyValueStore;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use crate::providers::QuoteSource;

/// Identifies one fetch started by `begin_refresh`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    /// Rebuild a ticket from its generation (e.g. after crossing a channel)
    pub fn from_generation(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a completed fetch did to the session
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The quote replaced CurrentQuote
    Loaded(Quote),
    /// The fetch failed; CurrentQuote is unchanged
    Failed(QuoteError),
    /// A newer fetch was started after this one; result discarded
    Stale,
}

/// Session state owned by the controller for the lifetime of the app
pub struct QuoteSession<S: KeyValueStore> {
    current: Option<Quote>,
    favorites: FavoritesStore<S>,
    /// Monotonically increasing counter to discard stale fetch results
    generation: u64,
    in_flight: bool,
}

impl<S: KeyValueStore> QuoteSession<S> {
    pub fn new(favorites: FavoritesStore<S>) -> Self {
        Self {
            current: None,
            favorites,
            generation: 0,
            in_flight: false,
        }
    }

    /// Quote currently shown, if any fetch has succeeded yet
    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    /// True between `begin_refresh` and the completion of its latest ticket
    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore<S> {
        &mut self.favorites
    }

    /// Whether `quote` is in the favorites store
    pub fn favorite_status(&self, quote: &Quote) -> bool {
        self.favorites.is_favorite(quote)
    }

    /// Fetch synchronously and apply the result
    ///
    /// On failure CurrentQuote is left untouched and the error returned.
    pub fn refresh(&mut self, source: &dyn QuoteSource) -> Result<Quote> {
        // Supersedes any ticket still in flight
        self.generation += 1;
        self.in_flight = false;

        let quote = source.fetch_random()?;
        self.current = Some(quote.clone());
        Ok(quote)
    }

    /// Start a fetch; any earlier in-flight ticket becomes stale
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.generation += 1;
        self.in_flight = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply the result of the fetch identified by `ticket`
    pub fn complete_refresh(&mut self, ticket: FetchTicket, result: Result<Quote>) -> RefreshOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "Discarding stale quote fetch"
            );
            return RefreshOutcome::Stale;
        }

        self.in_flight = false;
        match result {
            Ok(quote) => {
                self.current = Some(quote.clone());
                RefreshOutcome::Loaded(quote)
            }
            Err(e) => RefreshOutcome::Failed(e),
        }
    }

    /// Toggle CurrentQuote in favorites
    ///
    /// Returns the new favorite status, or `None` if no quote has loaded.
    pub fn toggle_current(&mut self) -> Result<Option<bool>> {
        let Some(quote) = self.current.as_ref() else {
            return Ok(None);
        };
        self.favorites.toggle(quote)?;
        Ok(Some(self.favorites.is_favorite(quote)))
    }
}
