//! Input event names.
//!
//! Records reference events by numeric id. The game keeps an `(id, name
//! pointer)` table which is extracted once into a JSON document and then used
//! to show names in decoded records and to map names back to ids on encode.
//! Ids missing from the table are written as `JOY_EVENT_UNK_<id>`, which
//! resolves back to `<id>` without a lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::image::{ReadImage, WORD};
use crate::layout::ImageLayout;
use crate::storage;

/// Prefix of synthetic names for ids without a table entry
pub const UNKNOWN_EVENT_PREFIX: &str = "JOY_EVENT_UNK_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventName {
    pub id: u32,
    pub name: String,
}

pub fn load_event_names<P: AsRef<Path>>(path: P) -> Result<Vec<EventName>> {
    storage::load_json(path)
}

pub fn save_event_names<P: AsRef<Path>>(path: P, names: &[EventName]) -> Result<()> {
    storage::save_json(path, names)
}

pub fn to_id_lookup(names: &[EventName]) -> HashMap<String, u32> {
    names.iter().map(|e| (e.name.clone(), e.id)).collect()
}

pub fn to_name_lookup(names: &[EventName]) -> HashMap<u32, String> {
    names.iter().map(|e| (e.id, e.name.clone())).collect()
}

/// Synthetic name for an id without a table entry
pub fn unknown_event_name(id: u32) -> String {
    format!("{}{}", UNKNOWN_EVENT_PREFIX, id)
}

/// Parse the id out of a synthetic `JOY_EVENT_UNK_<id>` name
pub fn parse_unknown_event_name(name: &str) -> Option<u32> {
    let digits = name.strip_prefix(UNKNOWN_EVENT_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Event id <-> name lookups built together from one list.
#[derive(Debug, Clone, Default)]
pub struct EventNameTable {
    by_id: HashMap<u32, String>,
    by_name: HashMap<String, u32>,
}

impl EventNameTable {
    pub fn new(names: &[EventName]) -> Self {
        Self {
            by_id: to_name_lookup(names),
            by_name: to_id_lookup(names),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let names = load_event_names(&path)?;
        debug!(
            "Loaded {} event names from {}",
            names.len(),
            path.as_ref().display()
        );
        Ok(Self::new(&names))
    }

    /// Name for `id`, or its synthetic `JOY_EVENT_UNK_<id>` name
    pub fn name_of(&self, id: u32) -> String {
        self.by_id
            .get(&id)
            .cloned()
            .unwrap_or_else(|| unknown_event_name(id))
    }

    pub fn resolve_id(&self, name: &str) -> Result<u32> {
        if let Some(id) = parse_unknown_event_name(name) {
            return Ok(id);
        }
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownEventName(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Read the build's event name table out of the image
pub fn dump_event_names<I: ReadImage + ?Sized>(
    image: &I,
    layout: &ImageLayout,
) -> Result<Vec<EventName>> {
    const ENTRY_SIZE: usize = 2 * WORD;

    let count = layout.num_event_names as usize;
    let table = image.read_table(layout.event_names, count, ENTRY_SIZE)?;

    table
        .chunks_exact(ENTRY_SIZE)
        .map(|entry| {
            let id = u32::from_le_bytes([entry[0], entry[1], entry[2], entry[3]]);
            let name_ptr = u32::from_le_bytes([entry[4], entry[5], entry[6], entry[7]]);
            let name = image.read_c_string(name_ptr)?;
            Ok(EventName { id, name })
        })
        .collect()
}
