use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ImageLayout;
use super::builtin::BUILTIN_BUILDS;
use crate::error::{Error, Result};
use crate::image::ReadImage;
use crate::storage;

/// One registered build: its layout and every image checksum that uses it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildEntry {
    pub checksums: Vec<u32>,
    pub layout: ImageLayout,
}

/// On-disk registry document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    pub builds: Vec<BuildEntry>,
}

/// Checksum-keyed lookup table of known builds.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    by_checksum: HashMap<u32, Arc<ImageLayout>>,
}

impl Registry {
    /// Registry containing the builds this tool knows out of the box
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for build in BUILTIN_BUILDS {
            let layout = Arc::new(build.to_layout());
            for &checksum in build.checksums {
                registry.by_checksum.insert(checksum, Arc::clone(&layout));
            }
        }
        registry
    }

    /// Load a registry file. Only the builds in the file are included.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file: RegistryFile = storage::load_json(&path)?;
        let registry = Self::from_file(file)?;
        info!(
            "Loaded {} build checksums from {}",
            registry.len(),
            path.as_ref().display()
        );
        Ok(registry)
    }

    pub fn from_file(file: RegistryFile) -> Result<Self> {
        let mut registry = Self::default();
        for entry in file.builds {
            if entry.checksums.is_empty() {
                return Err(Error::InvalidRegistry(format!(
                    "build '{}' has no checksums",
                    entry.layout.title
                )));
            }
            let layout = Arc::new(entry.layout);
            for checksum in entry.checksums {
                if registry
                    .by_checksum
                    .insert(checksum, Arc::clone(&layout))
                    .is_some()
                {
                    return Err(Error::InvalidRegistry(format!(
                        "checksum {:08X} registered twice",
                        checksum
                    )));
                }
            }
        }
        Ok(registry)
    }

    /// Convert back to a document, grouping checksums that share a layout
    pub fn to_file(&self) -> RegistryFile {
        let mut builds: Vec<BuildEntry> = Vec::new();
        let mut checksums: Vec<_> = self.by_checksum.keys().copied().collect();
        checksums.sort_unstable();

        for checksum in checksums {
            let layout = &self.by_checksum[&checksum];
            match builds.iter_mut().find(|b| b.layout == **layout) {
                Some(build) => build.checksums.push(checksum),
                None => builds.push(BuildEntry {
                    checksums: vec![checksum],
                    layout: ImageLayout::clone(layout),
                }),
            }
        }
        RegistryFile { builds }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        storage::save_json(path, &self.to_file())
    }

    /// Merge `other` into this registry. Entries from `other` win.
    pub fn extend(&mut self, other: Registry) {
        for (checksum, layout) in other.by_checksum {
            if self.by_checksum.insert(checksum, layout).is_some() {
                debug!("Registry entry {:08X} overridden", checksum);
            }
        }
    }

    pub fn lookup(&self, checksum: u32) -> Result<&ImageLayout> {
        self.by_checksum
            .get(&checksum)
            .map(Arc::as_ref)
            .ok_or(Error::UnknownBuild { checksum })
    }

    /// Identify the build of `image` by its CRC-32
    pub fn resolve<I: ReadImage + ?Sized>(&self, image: &I) -> Result<&ImageLayout> {
        let checksum = image.checksum();
        debug!("Image CRC32: {:08X}", checksum);
        let layout = self.lookup(checksum)?;
        info!("Detected build: {} ({:08X})", layout.title, checksum);
        Ok(layout)
    }

    pub fn len(&self) -> usize {
        self.by_checksum.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_checksum.is_empty()
    }

    /// Number of distinct layouts
    pub fn layout_count(&self) -> usize {
        self.by_checksum
            .values()
            .map(|l| Arc::as_ptr(l) as usize)
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecKind;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_lookup() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.layout_count(), 6);

        let hp2 = registry.lookup(0xB879BB85).unwrap();
        assert_eq!(hp2.codec, CodecKind::HotPursuit2);
        assert_eq!(hp2.num_event_names, 130);
        assert_eq!(hp2.scanners.name_of(0x154E48), Some("Analog"));
    }

    #[test]
    fn test_regional_releases_share_layout() {
        let registry = Registry::builtin();
        let ntsc_u = registry.lookup(0xB0FCC39B).unwrap();
        let pal = registry.lookup(0xC1FAA5D5).unwrap();
        assert!(std::ptr::eq(ntsc_u, pal));
        assert_eq!(pal.button_action_hashes, Some(0x4CB988));
    }

    #[test]
    fn test_unknown_build_names_checksum() {
        let registry = Registry::builtin();
        let err = registry.lookup(0x12345678).unwrap_err();
        assert!(matches!(err, Error::UnknownBuild { checksum: 0x12345678 }));
        assert!(err.to_string().contains("12345678"));
    }

    #[test]
    fn test_resolve_unknown_image() {
        let registry = Registry::builtin();
        let image = vec![0u8; 64];
        let err = registry.resolve(&image).unwrap_err();
        let expected = crate::image::crc32(&image);
        assert!(matches!(err, Error::UnknownBuild { checksum } if checksum == expected));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_file = NamedTempFile::new().unwrap();
        let registry = Registry::builtin();
        registry.save(temp_file.path()).unwrap();

        let loaded = Registry::load(temp_file.path()).unwrap();
        assert_eq!(loaded.len(), registry.len());
        assert_eq!(loaded.layout_count(), registry.layout_count());
        assert_eq!(
            loaded.lookup(0xE6725A8C).unwrap(),
            registry.lookup(0xE6725A8C).unwrap()
        );
    }

    #[test]
    fn test_extend_overrides_builtin() {
        let mut registry = Registry::builtin();
        let mut layout = registry.lookup(0xB879BB85).unwrap().clone();
        layout.title = "Patched HP2".to_string();
        layout.scanner_configs = 0x2DC600;

        let extra = Registry::from_file(RegistryFile {
            builds: vec![BuildEntry {
                checksums: vec![0xB879BB85, 0x0BADF00D],
                layout,
            }],
        })
        .unwrap();
        registry.extend(extra);

        assert_eq!(registry.len(), 8);
        assert_eq!(registry.lookup(0xB879BB85).unwrap().title, "Patched HP2");
        assert_eq!(
            registry.lookup(0x0BADF00D).unwrap().scanner_configs,
            0x2DC600
        );
    }

    #[test]
    fn test_from_file_rejects_repeated_checksum() {
        let layout = Registry::builtin().lookup(0xB879BB85).unwrap().clone();
        let file = RegistryFile {
            builds: vec![
                BuildEntry {
                    checksums: vec![1],
                    layout: layout.clone(),
                },
                BuildEntry {
                    checksums: vec![1],
                    layout,
                },
            ],
        };
        assert!(matches!(
            Registry::from_file(file),
            Err(Error::InvalidRegistry(_))
        ));
    }

    #[test]
    fn test_from_file_rejects_build_without_checksums() {
        let layout = Registry::builtin().lookup(0xB879BB85).unwrap().clone();
        let file = RegistryFile {
            builds: vec![BuildEntry {
                checksums: vec![],
                layout,
            }],
        };
        assert!(matches!(
            Registry::from_file(file),
            Err(Error::InvalidRegistry(_))
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_scanner() {
        let json = r#"{
            "builds": [{
                "checksums": [1],
                "layout": {
                    "title": "Broken",
                    "codec": "ug1",
                    "event_names": 1048576,
                    "num_event_names": 0,
                    "scanner_configs": 1048576,
                    "num_scanner_configs": 1048576,
                    "scanners": [
                        {"address": 16, "name": "Analog"},
                        {"address": 32, "name": "Analog"}
                    ]
                }
            }]
        }"#;
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), json).unwrap();
        assert!(matches!(
            Registry::load(temp_file.path()),
            Err(Error::Json(_))
        ));
    }
}
