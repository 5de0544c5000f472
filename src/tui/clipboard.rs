//! System clipboard access for the copy keys
//!
//! A fresh `arboard::Clipboard` per copy; nothing is held between copies.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `text` on the system clipboard
///
/// Fails without a display server (headless Linux, SSH without forwarding).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text)
        .context("Failed to set clipboard text")
}
