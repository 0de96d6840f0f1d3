use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::storage;

/// Address tag marking a full 32-bit write
pub const EXTENDED_WORD_TAG: u32 = 0x20000000;

/// One 32-bit write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchEntry {
    /// Target address with [`EXTENDED_WORD_TAG`] set
    pub address: u32,
    pub value: u32,
}

impl PatchEntry {
    pub fn extended_word(vaddr: u32, value: u32) -> Self {
        Self {
            address: vaddr | EXTENDED_WORD_TAG,
            value,
        }
    }

    /// Target address without the tag
    pub fn vaddr(&self) -> u32 {
        self.address & !EXTENDED_WORD_TAG
    }
}

impl fmt::Display for PatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "patch=0,EE,{:X},extended,{:X}", self.address, self.value)
    }
}

/// Ordered list of writes, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub entries: Vec<PatchEntry>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: PatchEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatchEntry> {
        self.entries.iter()
    }

    /// One pnach line per entry
    pub fn to_pnach(&self) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            output.push_str(&entry.to_string());
            output.push('\n');
        }
        output
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        storage::write_atomic(path, self.to_pnach().as_bytes())
    }
}
