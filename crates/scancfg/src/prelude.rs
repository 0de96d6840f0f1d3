//! Prelude module for convenient imports
//!
//! ```ignore
//! use scancfg::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Image access: `ImageFile`, `ReadImage`
//! - Build layouts: `Registry`, `ImageLayout`, `CodecKind`
//! - Records: `ScannerConfigRecord`, `Glyph`, `EventNameTable`
//! - Operations: `dump_scanner_configs`, `diff_scanner_configs`
//! - Error handling: `Error`, `Result`

pub use crate::codec::{CodecKind, Glyph, ScannerConfigRecord};
pub use crate::dump::{dump_button_action_hashes, dump_scanner_configs};
pub use crate::error::{Error, Result};
pub use crate::events::{EventName, EventNameTable, dump_event_names};
pub use crate::image::{ImageFile, ReadImage};
pub use crate::layout::{ImageLayout, Registry};
pub use crate::patch::{Patch, PatchEntry, diff_button_action_hashes, diff_scanner_configs};
