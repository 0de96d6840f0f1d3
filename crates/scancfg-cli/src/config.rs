//! Optional TOML config with default paths.
//!
//! ```toml
//! elf = "SLUS_207.52"
//! event_names = "ug1-event-names.json"
//! registry = "extra-builds.json"
//! ```
//!
//! Command-line flags always win over values from the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub elf: Option<PathBuf>,
    pub event_names: Option<PathBuf>,
    pub registry: Option<PathBuf>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn elf(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.elf.clone()) {
            Some(path) => Ok(path),
            None => bail!("No game ELF given (use --elf or set `elf` in the config file)"),
        }
    }

    pub fn event_names(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.event_names.clone()) {
            Some(path) => Ok(path),
            None => bail!(
                "No event names file given (use --event-names or set `event_names` in the config file)"
            ),
        }
    }

    pub fn registry(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.registry.clone())
    }
}
