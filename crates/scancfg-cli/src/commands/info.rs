//! Info command implementation.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;
use scancfg::{ImageLayout, ReadImage, scanner_config_count};

use super::Session;

/// Show the detected build of an ELF, or every known build
pub fn run(session: &Session, elf: Option<PathBuf>) -> Result<()> {
    if elf.is_none() && session.config.elf.is_none() {
        return list_builds(session);
    }

    let image = session.open_image(elf)?;
    let checksum = image.checksum();
    println!("{} {:08X}", "CRC32:".bold(), checksum);

    let layout = session.registry.lookup(checksum)?;
    print_layout(layout);

    let count = scanner_config_count(&image, layout)?;
    println!("  {:<22} {}", "live scanner configs", count.green());
    Ok(())
}

fn list_builds(session: &Session) -> Result<()> {
    for build in session.registry.to_file().builds {
        let checksums: Vec<String> = build
            .checksums
            .iter()
            .map(|c| format!("{:08X}", c))
            .collect();
        println!("{} [{}]", checksums.join(", ").bold(), build.layout.codec);
        println!("  {}", build.layout.title);
    }
    Ok(())
}

fn print_layout(layout: &ImageLayout) {
    println!("{} {}", "Build:".bold(), layout.title.cyan());
    println!("  {:<22} {}", "record layout", layout.codec);
    println!(
        "  {:<22} 0x{:X} ({} entries)",
        "event names", layout.event_names, layout.num_event_names
    );
    println!(
        "  {:<22} 0x{:X} ({} bytes per record)",
        "scanner configs",
        layout.scanner_configs,
        layout.record_size()
    );
    println!("  {:<22} 0x{:X}", "config count cell", layout.num_scanner_configs);
    match layout.button_action_hashes {
        Some(address) => println!("  {:<22} 0x{:X}", "button action hashes", address),
        None => println!("  {:<22} {}", "button action hashes", "none".dimmed()),
    }
    println!("  {:<22} {}", "scanners", layout.scanners.len());
    for entry in layout.scanners.entries() {
        println!("    0x{:06X}  {}", entry.address, entry.name);
    }
}
