//! Image to structured data.

use tracing::{debug, info};

use crate::codec::ScannerConfigRecord;
use crate::error::{Error, Result};
use crate::events::EventNameTable;
use crate::image::{ReadImage, WORD};
use crate::layout::ImageLayout;

/// Live number of scanner configs, read from the build's count cell
pub fn scanner_config_count<I: ReadImage + ?Sized>(
    image: &I,
    layout: &ImageLayout,
) -> Result<usize> {
    Ok(image.read_u32(layout.num_scanner_configs)? as usize)
}

/// Decode every record of the scanner config table, in table order
pub fn dump_scanner_configs<I: ReadImage + ?Sized>(
    image: &I,
    layout: &ImageLayout,
    events: &EventNameTable,
) -> Result<Vec<ScannerConfigRecord>> {
    let count = scanner_config_count(image, layout)?;
    let record_size = layout.record_size();
    let table = image.read_table(layout.scanner_configs, count, record_size)?;

    let records = table
        .chunks_exact(record_size)
        .enumerate()
        .map(|(index, raw)| {
            let record = layout
                .codec
                .decode(image, &layout.scanners, events, raw)?;
            debug!("Record {}: {} ({:?})", index, record.event_name, record.scanner);
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Decoded {} scanner configs", records.len());
    Ok(records)
}

/// Read `count` words of the button action hash table
pub fn dump_button_action_hashes<I: ReadImage + ?Sized>(
    image: &I,
    layout: &ImageLayout,
    count: usize,
) -> Result<Vec<u32>> {
    let base = button_action_hashes_address(layout)?;
    let table = image.read_table(base, count, WORD)?;
    Ok(table
        .chunks_exact(WORD)
        .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
        .collect())
}

pub(crate) fn button_action_hashes_address(layout: &ImageLayout) -> Result<u32> {
    layout.button_action_hashes.ok_or_else(|| Error::MissingTable {
        table: "button action hash",
        build: layout.title.clone(),
    })
}
