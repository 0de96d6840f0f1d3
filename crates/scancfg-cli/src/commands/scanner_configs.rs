//! Scanner config table commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use scancfg::{ScannerConfigRecord, diff_scanner_configs, dump_scanner_configs, storage};

use super::{Session, report_written};

/// Dump the scanner config table to a JSON file
pub fn dump(
    session: &Session,
    elf: Option<PathBuf>,
    event_names: Option<PathBuf>,
    output: &Path,
) -> Result<()> {
    let image = session.open_image(elf)?;
    let layout = session.registry.resolve(&image)?;
    let events = session.load_event_names(event_names)?;

    let records = dump_scanner_configs(&image, layout, &events)?;
    storage::save_json(output, &records)?;
    report_written(output, &format!("{} scanner configs", records.len()));
    Ok(())
}

/// Generate a pnach with the words that differ from the edited table
pub fn patch(
    session: &Session,
    elf: Option<PathBuf>,
    event_names: Option<PathBuf>,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let image = session.open_image(elf)?;
    let layout = session.registry.resolve(&image)?;
    let events = session.load_event_names(event_names)?;

    let records: Vec<ScannerConfigRecord> = storage::load_json(input)
        .with_context(|| format!("Failed to load scanner configs {}", input.display()))?;
    let patch = diff_scanner_configs(&image, layout, &events, &records)?;
    patch.save(output)?;

    if patch.is_empty() {
        eprintln!("{}", "No changes against the original table".yellow());
    }
    report_written(output, &format!("{} patch lines", patch.len()));
    Ok(())
}
