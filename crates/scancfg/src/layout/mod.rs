//! Per-build memory layout descriptors.
//!
//! An [`ImageLayout`] describes where one game build keeps its event name
//! table, its scanner config table and the cell holding the live config
//! count, and which scanner function lives at which address. Layouts are
//! selected once per run through the [`Registry`] by the image checksum.

mod builtin;
mod registry;
mod scanners;

pub use registry::{BuildEntry, Registry, RegistryFile};
pub use scanners::{ScannerEntry, ScannerMap};

use serde::{Deserialize, Serialize};

use crate::codec::CodecKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLayout {
    /// Human-readable build name, e.g. "Need for Speed: Underground (NTSC-U)"
    pub title: String,
    /// Record layout used by this build's scanner config table
    pub codec: CodecKind,
    /// Address of the `(id, name pointer)` event name table
    pub event_names: u32,
    pub num_event_names: u32,
    /// Address of the first scanner config record
    pub scanner_configs: u32,
    /// Address of the cell holding the live scanner config count
    pub num_scanner_configs: u32,
    pub scanners: ScannerMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_action_hashes: Option<u32>,
}

impl ImageLayout {
    pub fn record_size(&self) -> usize {
        self.codec.record_size()
    }

    /// Address of the record in table slot `index`
    pub fn record_address(&self, index: usize) -> u32 {
        self.scanner_configs + (index * self.record_size()) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_address() {
        let registry = Registry::builtin();
        let layout = registry.lookup(0xB879BB85).unwrap();
        assert_eq!(layout.record_address(0), 0x2DC500);
        assert_eq!(layout.record_address(2), 0x2DC500 + 72);

        let layout = registry.lookup(0xB0FCC39B).unwrap();
        assert_eq!(layout.record_address(3), 0x44C400 + 96);
    }
}
