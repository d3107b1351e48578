//! Terminal output formatting
//!
//! Share summary, clipboard access and pretty-printing for text mode.

pub mod clipboard;
pub mod display;
pub mod share;

pub use clipboard::{Clipboard, ShareStatus, TerminalClipboard};
pub use display::{print_cards, print_daily, print_hints, print_malformed};
pub use share::share_summary;
