// SPDX-License-Identifier: MPL-2.0
//! Clipboard access behind a small trait so hosts and tests can swap it.

use crate::error::{Error, Result};

/// Maximum clipboard content size in bytes (10 MB).
///
/// Clipboard operations with very large content can fail on some platforms.
pub const MAX_CLIPBOARD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Something text can be written to.
pub trait ClipboardBackend {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Clipboard` when the platform denies access.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
///
/// The platform handle is opened on first use and kept afterwards; on
/// headless systems every write fails with `Error::Clipboard`.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if text.len() > MAX_CLIPBOARD_SIZE_BYTES {
            return Err(Error::Clipboard(format!(
                "content too large: {} bytes exceeds {MAX_CLIPBOARD_SIZE_BYTES}",
                text.len()
            )));
        }

        if self.handle.is_none() {
            self.handle = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.handle.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }
}

/// In-process clipboard that remembers the last text written.
///
/// Useful for headless hosts and tests. A denied clipboard can be simulated
/// with [`MemoryClipboard::denied`].
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    deny: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            contents: None,
            deny: true,
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.deny {
            return Err(Error::Clipboard("clipboard access denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_stores_last_write() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_text("first").expect("write should succeed");
        clipboard.write_text("second").expect("write should succeed");
        assert_eq!(clipboard.contents(), Some("second"));
    }

    #[test]
    fn denied_clipboard_fails() {
        let mut clipboard = MemoryClipboard::denied();
        let result = clipboard.write_text("secret");
        assert!(matches!(result, Err(Error::Clipboard(_))));
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn system_clipboard_rejects_oversized_content() {
        let mut clipboard = SystemClipboard::new();
        let huge = "x".repeat(MAX_CLIPBOARD_SIZE_BYTES + 1);
        assert!(matches!(
            clipboard.write_text(&huge),
            Err(Error::Clipboard(_))
        ));
    }

    #[test]
    #[ignore = "Clipboard not available in CI/headless environments"]
    fn system_clipboard_write_works() {
        let mut clipboard = SystemClipboard::new();
        assert!(clipboard.write_text("pagekit").is_ok());
    }
}
