//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard is created
//! fresh each time to avoid holding resources.

use crate::error::{QuoteError, Result};

/// Destination for copied quote text
pub trait Clipboard: Send {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn copy_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| QuoteError::Clipboard(format!("Failed to access clipboard: {e}")))?;
        clipboard
            .set_text(text)
            .map_err(|e| QuoteError::Clipboard(format!("Failed to set clipboard text: {e}")))?;
        Ok(())
    }
}
