//! # scancfg
//!
//! Scanner config table codec for Need for Speed PS2 executables.
//!
//! This crate provides:
//! - Build identification by image CRC-32 and per-build memory layouts
//! - Decoding of the input event "scanner config" table into editable records
//! - Re-encoding of edited records into a minimal word-level `.pnach` patch
//! - Event name and button action hash table extraction
//!
//! ## Typical flow
//!
//! ```ignore
//! use scancfg::prelude::*;
//!
//! let image = ImageFile::open("SLUS_207.52")?;
//! let registry = Registry::builtin();
//! let layout = registry.resolve(&image)?;
//! let events = EventNameTable::load("event-names.json")?;
//!
//! let records = dump_scanner_configs(&image, layout, &events)?;
//! // ... edit records ...
//! let patch = diff_scanner_configs(&image, layout, &events, &records)?;
//! patch.save("patch.pnach")?;
//! ```

pub mod codec;
pub mod dump;
pub mod error;
pub mod events;
pub mod image;
pub mod layout;
pub mod patch;
pub mod prelude;
pub mod storage;

pub use codec::{CodecKind, Glyph, Hp2Layout, RecordLayout, ScannerConfigRecord, Ug1Layout};
pub use dump::{dump_button_action_hashes, dump_scanner_configs, scanner_config_count};
pub use error::{Error, Result};
pub use events::{
    EventName, EventNameTable, dump_event_names, load_event_names, save_event_names,
    to_id_lookup, to_name_lookup,
};
pub use image::{ImageFile, ReadImage, to_file_offset};
pub use layout::{BuildEntry, ImageLayout, Registry, RegistryFile, ScannerEntry, ScannerMap};
pub use patch::{
    EXTENDED_WORD_TAG, Patch, PatchEntry, diff_button_action_hashes, diff_scanner_configs,
};
