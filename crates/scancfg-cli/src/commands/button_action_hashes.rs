//! Button action hash table commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scancfg::{diff_button_action_hashes, dump_button_action_hashes, storage};

use super::{Session, report_written};

/// Dump the first `num` button action hashes to a JSON file
pub fn dump(session: &Session, elf: Option<PathBuf>, num: usize, output: &Path) -> Result<()> {
    let image = session.open_image(elf)?;
    let layout = session.registry.resolve(&image)?;

    let hashes = dump_button_action_hashes(&image, layout, num)?;
    storage::save_json(output, &hashes)?;
    report_written(output, &format!("{} button action hashes", hashes.len()));
    Ok(())
}

/// Generate a pnach with the hashes that differ from the image
pub fn patch(session: &Session, elf: Option<PathBuf>, input: &Path, output: &Path) -> Result<()> {
    let image = session.open_image(elf)?;
    let layout = session.registry.resolve(&image)?;

    let hashes: Vec<u32> = storage::load_json(input)
        .with_context(|| format!("Failed to load button action hashes {}", input.display()))?;
    let patch = diff_button_action_hashes(&image, layout, &hashes)?;
    patch.save(output)?;
    report_written(output, &format!("{} patch lines", patch.len()));
    Ok(())
}
