//! Application controller
//!
//! Owns the quote session and processes commands from the frontend through
//! a single crossbeam channel. Fetches run on worker threads and report back
//! through the same channel, so every state change happens on the
//! controller thread in the order commands arrive.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::config::messages::{COPIED, FETCH_FAILED};
use crate::data::storage::KeyValueStore;
use crate::data::types::Quote;
use crate::error::Result;
use crate::providers::QuoteSource;
use crate::session::{FetchTicket, QuoteSession, RefreshOutcome};

use super::clipboard::Clipboard;
use super::display::Display;
use super::state::AppCommand;

pub struct AppController<S: KeyValueStore> {
    cmd_rx: Receiver<AppCommand>,
    cmd_tx: Sender<AppCommand>,
    session: QuoteSession<S>,
    source: Arc<dyn QuoteSource>,
    display: Box<dyn Display>,
    clipboard: Box<dyn Clipboard>,
}

impl<S: KeyValueStore> AppController<S> {
    pub fn new(
        cmd_rx: Receiver<AppCommand>,
        cmd_tx: Sender<AppCommand>,
        session: QuoteSession<S>,
        source: Arc<dyn QuoteSource>,
        display: Box<dyn Display>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            cmd_rx,
            cmd_tx,
            session,
            source,
            display,
            clipboard,
        }
    }

    pub fn session(&self) -> &QuoteSession<S> {
        &self.session
    }

    /// Initial render: favorites list, then the first fetch
    pub fn start(&mut self) {
        self.display.show_favorites_list(self.session.favorites().quotes());
        self.start_fetch();
    }

    /// Run the controller event loop (blocking, call from a dedicated thread)
    ///
    /// Returns when `Shutdown` arrives or every sender is gone. A storage
    /// write failure ends the loop with that error.
    pub fn run(&mut self) -> Result<()> {
        self.start();
        loop {
            match self.cmd_rx.recv() {
                Ok(cmd) => {
                    if self.handle_command(cmd)? {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        tracing::debug!("Controller stopped");
        Ok(())
    }

    /// Handle commands until none arrives within `idle`
    ///
    /// Returns false if `Shutdown` was handled or the channel closed.
    pub fn process_pending(&mut self, idle: Duration) -> Result<bool> {
        loop {
            match self.cmd_rx.recv_timeout(idle) {
                Ok(cmd) => {
                    if self.handle_command(cmd)? {
                        return Ok(false);
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Ok(true),
                Err(RecvTimeoutError::Disconnected) => return Ok(false),
            }
        }
    }

    /// Handle a single command. Returns true if the loop should exit.
    pub fn handle_command(&mut self, cmd: AppCommand) -> Result<bool> {
        tracing::debug!(?cmd, "Handling command");
        match cmd {
            AppCommand::Shutdown => return Ok(true),

            AppCommand::Refresh => self.start_fetch(),
            AppCommand::QuoteFetched { generation, result } => {
                self.apply_fetch(FetchTicket::from_generation(generation), result);
            }
            AppCommand::ToggleFavorite => self.toggle_favorite()?,
            AppCommand::CopyQuote => self.copy_quote(),
            AppCommand::ClearFavorites => {
                let favorites = self.session.favorites_mut().clear()?;
                self.display.show_favorites_list(favorites);
                self.display.hide_panel();
                if let Some(quote) = self.session.current() {
                    let favorited = self.session.favorite_status(quote);
                    self.display.set_heart_state(favorited);
                }
            }
            AppCommand::ShowFavorites => self.display.show_panel(),
            AppCommand::HideFavorites => self.display.hide_panel(),
        }
        Ok(false)
    }

    /// Fetch on a worker thread, then send the result back.
    ///
    /// Each call takes a new ticket; stale results from earlier calls are
    /// discarded in `apply_fetch`.
    fn start_fetch(&mut self) {
        let ticket = self.session.begin_refresh();
        let generation = ticket.generation();
        let source = Arc::clone(&self.source);
        let cmd_tx = self.cmd_tx.clone();

        let spawned = std::thread::Builder::new()
            .name("quote-fetch".into())
            .spawn(move || {
                let result = source.fetch_random();
                let _ = cmd_tx.send(AppCommand::QuoteFetched { generation, result });
            });

        if let Err(e) = spawned {
            self.apply_fetch(ticket, Err(e.into()));
        }
    }

    fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Quote>) {
        match self.session.complete_refresh(ticket, result) {
            RefreshOutcome::Loaded(quote) => {
                tracing::info!(author = %quote.author, "Loaded quote");
                self.display.show_quote(&quote.content, &quote.author);
                let favorited = self.session.favorite_status(&quote);
                self.display.set_heart_state(favorited);
            }
            RefreshOutcome::Failed(e) => {
                tracing::warn!(error = %e, source = self.source.name(), "Fetching quote failed");
                self.display.show_error(FETCH_FAILED);
            }
            RefreshOutcome::Stale => {}
        }
    }

    fn toggle_favorite(&mut self) -> Result<()> {
        let Some(favorited) = self.session.toggle_current()? else {
            tracing::debug!("No quote loaded, nothing to favorite");
            return Ok(());
        };
        self.display.show_favorites_list(self.session.favorites().quotes());
        self.display.set_heart_state(favorited);
        Ok(())
    }

    fn copy_quote(&mut self) {
        let Some(quote) = self.session.current() else {
            tracing::debug!("No quote loaded, nothing to copy");
            return;
        };
        match self.clipboard.copy_text(&quote.clipboard_text()) {
            Ok(()) => self.display.acknowledge(COPIED),
            Err(e) => tracing::warn!(error = %e, "Error in copying text"),
        }
    }
}
