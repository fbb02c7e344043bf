//! Display collaborator
//!
//! The controller renders exclusively through `Display`. `SnapshotDisplay`
//! records every render call into a `DisplaySnapshot`; clones share it, so a
//! frontend keeps one clone to poll from its own draw loop.

use std::sync::{Arc, Mutex};

use crate::data::types::Quote;

/// Render calls emitted by the controller
pub trait Display: Send {
    fn show_quote(&mut self, content: &str, author: &str);

    /// Show `message` in place of the quote, with an empty author
    fn show_error(&mut self, message: &str);

    /// Replace the favorites list
    fn show_favorites_list(&mut self, favorites: &[Quote]);

    fn set_heart_state(&mut self, favorited: bool);

    fn show_panel(&mut self);

    fn hide_panel(&mut self);

    /// Tell the user something happened and wait for them to dismiss it
    fn acknowledge(&mut self, message: &str);
}

/// Everything a frontend needs to draw one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplaySnapshot {
    pub quote_text: String,
    pub author: String,
    /// True when `quote_text` holds an error message (for red UI text)
    pub is_error: bool,
    pub favorited: bool,
    /// Pre-rendered `"1. content - author"` lines
    pub favorites: Vec<String>,
    pub panel_visible: bool,
    /// Pending acknowledgment; the frontend clears it on dismissal
    pub notice: Option<String>,
}

impl DisplaySnapshot {
    /// Nothing has been rendered yet
    pub fn is_blank(&self) -> bool {
        self.quote_text.is_empty() && !self.is_error
    }
}

/// `Display` backed by a shared snapshot
#[derive(Clone, Debug, Default)]
pub struct SnapshotDisplay {
    state: Arc<Mutex<DisplaySnapshot>>,
}

impl SnapshotDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.lock().clone()
    }

    /// Whether an acknowledgment is waiting to be dismissed
    pub fn has_notice(&self) -> bool {
        self.lock().notice.is_some()
    }

    /// Clear a pending acknowledgment
    pub fn dismiss_notice(&self) {
        self.lock().notice = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DisplaySnapshot> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Display for SnapshotDisplay {
    fn show_quote(&mut self, content: &str, author: &str) {
        let mut state = self.lock();
        state.quote_text = content.to_string();
        state.author = author.to_string();
        state.is_error = false;
    }

    fn show_error(&mut self, message: &str) {
        let mut state = self.lock();
        state.quote_text = message.to_string();
        state.author.clear();
        state.is_error = true;
    }

    fn show_favorites_list(&mut self, favorites: &[Quote]) {
        self.lock().favorites = favorites
            .iter()
            .enumerate()
            .map(|(i, q)| q.list_line(i))
            .collect();
    }

    fn set_heart_state(&mut self, favorited: bool) {
        self.lock().favorited = favorited;
    }

    fn show_panel(&mut self) {
        self.lock().panel_visible = true;
    }

    fn hide_panel(&mut self) {
        self.lock().panel_visible = false;
    }

    fn acknowledge(&mut self, message: &str) {
        self.lock().notice = Some(message.to_string());
    }
}
