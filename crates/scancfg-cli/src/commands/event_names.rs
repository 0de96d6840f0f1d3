//! Event name table commands.

use std::path::{Path, PathBuf};

use anyhow::Result;
use scancfg::{dump_event_names, save_event_names};

use super::{Session, report_written};

/// Dump the event name table to a JSON file
pub fn dump(session: &Session, elf: Option<PathBuf>, output: &Path) -> Result<()> {
    let image = session.open_image(elf)?;
    let layout = session.registry.resolve(&image)?;

    let names = dump_event_names(&image, layout)?;
    save_event_names(output, &names)?;
    report_written(output, &format!("{} event names", names.len()));
    Ok(())
}
