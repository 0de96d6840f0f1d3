use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One scanner function of a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerEntry {
    pub address: u32,
    pub name: String,
}

/// Bidirectional scanner function address <-> name mapping.
///
/// Both directions are only ever updated together, so every name maps back to
/// exactly the address it was registered with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScannerEntry>", into = "Vec<ScannerEntry>")]
pub struct ScannerMap {
    by_address: HashMap<u32, String>,
    by_name: HashMap<String, u32>,
}

impl ScannerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_of(&self, address: u32) -> Option<&str> {
        self.by_address.get(&address).map(String::as_str)
    }

    pub fn address_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }

    /// Entries sorted by address
    pub fn entries(&self) -> Vec<ScannerEntry> {
        let mut entries: Vec<_> = self
            .by_address
            .iter()
            .map(|(&address, name)| ScannerEntry {
                address,
                name: name.clone(),
            })
            .collect();
        entries.sort_by_key(|e| e.address);
        entries
    }

    /// Insert a pair, dropping any existing pair that shares its address or name
    fn insert_replacing(&mut self, address: u32, name: String) {
        if let Some(old_name) = self.by_address.remove(&address) {
            self.by_name.remove(&old_name);
        }
        if let Some(old_address) = self.by_name.remove(&name) {
            self.by_address.remove(&old_address);
        }
        self.by_name.insert(name.clone(), address);
        self.by_address.insert(address, name);
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for ScannerMap {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (address, name) in iter {
            map.insert_replacing(address, name.into());
        }
        map
    }
}

impl TryFrom<Vec<ScannerEntry>> for ScannerMap {
    type Error = String;

    fn try_from(entries: Vec<ScannerEntry>) -> Result<Self, Self::Error> {
        let mut map = Self::new();
        for entry in entries {
            if let Some(existing) = map.name_of(entry.address) {
                return Err(format!(
                    "scanner address {:08X} registered twice ({} and {})",
                    entry.address, existing, entry.name
                ));
            }
            if let Some(existing) = map.address_of(&entry.name) {
                return Err(format!(
                    "scanner name {} registered twice ({:08X} and {:08X})",
                    entry.name, existing, entry.address
                ));
            }
            map.insert_replacing(entry.address, entry.name);
        }
        Ok(map)
    }
}

impl From<ScannerMap> for Vec<ScannerEntry> {
    fn from(map: ScannerMap) -> Self {
        map.entries()
    }
}
