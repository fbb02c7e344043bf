//! Application layer
//!
//! Command-driven controller plus the collaborator traits it renders
//! through (display, clipboard).

pub mod clipboard;
pub mod controller;
pub mod display;
pub mod state;

pub use clipboard::{Clipboard, SystemClipboard};
pub use controller::AppController;
pub use display::{Display, DisplaySnapshot, SnapshotDisplay};
pub use state::AppCommand;
