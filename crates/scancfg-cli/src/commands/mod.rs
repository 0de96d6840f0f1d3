//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod button_action_hashes;
pub mod event_names;
pub mod info;
pub mod scanner_configs;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scancfg::{EventNameTable, ImageFile, Registry};
use tracing::info;

use crate::config::Config;

/// State shared by every command: config defaults and the build registry
pub struct Session {
    pub config: Config,
    pub registry: Registry,
}

impl Session {
    /// Built-in registry extended with the registry file, if any
    pub fn new(config: Config, registry_flag: Option<PathBuf>) -> Result<Self> {
        let mut registry = Registry::builtin();
        if let Some(path) = config.registry(registry_flag) {
            let extra = Registry::load(&path)
                .with_context(|| format!("Failed to load registry {}", path.display()))?;
            registry.extend(extra);
        }
        Ok(Self { config, registry })
    }

    pub fn open_image(&self, elf: Option<PathBuf>) -> Result<ImageFile> {
        let path = self.config.elf(elf)?;
        let image = ImageFile::open(&path)
            .with_context(|| format!("Failed to open game ELF {}", path.display()))?;
        info!("Opened {} ({} bytes)", path.display(), image.len());
        Ok(image)
    }

    pub fn load_event_names(&self, event_names: Option<PathBuf>) -> Result<EventNameTable> {
        let path = self.config.event_names(event_names)?;
        EventNameTable::load(&path)
            .with_context(|| format!("Failed to load event names {}", path.display()))
    }
}

pub(crate) fn report_written(path: &Path, what: &str) {
    eprintln!("Wrote {} to {}", what, path.display());
}
