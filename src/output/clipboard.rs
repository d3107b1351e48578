//! Copying the share line to the system clipboard
//!
//! A copy never affects the game; its outcome only becomes a short status.

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use std::io::{self, Write};

/// Something text can be copied into
pub trait Clipboard {
    /// Copy `text`
    ///
    /// # Errors
    /// Returns an I/O error if the copy could not be issued.
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard reached through the terminal with an OSC 52 escape sequence
pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl TerminalClipboard<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalClipboard<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))
    }
}

/// Status shown next to the share button after a copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareStatus {
    #[default]
    Idle,
    Okay,
    Error,
}

impl ShareStatus {
    /// Run a copy and turn its result into a status
    pub fn from_copy<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> Self {
        match clipboard.copy(text) {
            Ok(()) => Self::Okay,
            Err(err) => {
                log::warn!("clipboard copy failed: {err}");
                Self::Error
            }
        }
    }

    /// Share button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "share to clipboard",
            Self::Okay => "share to clipboard (okay)",
            Self::Error => "share to clipboard (error)",
        }
    }
}
