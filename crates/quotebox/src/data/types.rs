//! Common data types for persistence
//!
//! Shared types used across the data module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote as served by the quote service and stored in favorites
///
/// Equality is exact on both fields; there is no identity beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text
    pub content: String,
    /// Attributed author
    pub author: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }

    /// Text placed on the clipboard: `"{content} - {author}"`
    pub fn clipboard_text(&self) -> String {
        self.to_string()
    }

    /// One line of the favorites list, 1-indexed from a 0-based `index`
    pub fn list_line(&self, index: usize) -> String {
        format!("{}. {}", index + 1, self)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.content, self.author)
    }
}
