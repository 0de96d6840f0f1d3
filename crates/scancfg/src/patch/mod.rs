//! Structured data to a minimal word-level patch.
//!
//! Edited records are re-encoded and compared word by word with the original
//! image; only words that differ (and that the record layout marks relevant)
//! become patch entries. The result is rendered as PCSX2 `.pnach` lines.

mod diff;
mod pnach;

pub use diff::{diff_button_action_hashes, diff_scanner_configs};
pub use pnach::{EXTENDED_WORD_TAG, Patch, PatchEntry};
