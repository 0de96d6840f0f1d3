use tracing::{debug, info, warn};

use super::{Patch, PatchEntry};
use crate::codec::ScannerConfigRecord;
use crate::dump::{button_action_hashes_address, scanner_config_count};
use crate::error::{Error, Result};
use crate::events::EventNameTable;
use crate::image::{ReadImage, WORD};
use crate::layout::ImageLayout;

fn word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Build the patch that turns the image's scanner config table into `edited`.
///
/// Record `i` always lands in table slot `i`. When the record count changes,
/// the first entry rewrites the count cell. The table cannot grow past its
/// original size.
pub fn diff_scanner_configs<I: ReadImage + ?Sized>(
    image: &I,
    layout: &ImageLayout,
    events: &EventNameTable,
    edited: &[ScannerConfigRecord],
) -> Result<Patch> {
    let capacity = scanner_config_count(image, layout)?;
    if edited.len() > capacity {
        return Err(Error::CapacityExceeded {
            requested: edited.len(),
            capacity,
        });
    }

    let mut patch = Patch::new();
    if edited.len() != capacity {
        warn!(
            "Scanner config count changes from {} to {}",
            capacity,
            edited.len()
        );
        patch.push(PatchEntry::extended_word(
            layout.num_scanner_configs,
            edited.len() as u32,
        ));
    }

    for (index, record) in edited.iter().enumerate() {
        let encoded = layout
            .codec
            .encode(&layout.scanners, |name| events.resolve_id(name), record)?;
        let base = layout.record_address(index);
        let original = image.read_bytes(base, encoded.len())?;

        let changed = encoded
            .chunks_exact(WORD)
            .zip(original.chunks_exact(WORD))
            .enumerate()
            .filter(|&(word_index, (new, old))| {
                layout.codec.is_word_relevant(word_index) && new != old
            });

        for (word_index, (new, old)) in changed {
            let address = base + (word_index * WORD) as u32;
            debug!(
                "Record {} word {}: {:08X} -> {:08X}",
                index,
                word_index,
                word(old),
                word(new)
            );
            patch.push(PatchEntry::extended_word(address, word(new)));
        }
    }

    info!(
        "Generated {} patch entries for {} scanner configs",
        patch.len(),
        edited.len()
    );
    Ok(patch)
}

/// Build the patch that writes `hashes` over the start of the button action
/// hash table, skipping words that already match.
pub fn diff_button_action_hashes<I: ReadImage + ?Sized>(
    image: &I,
    layout: &ImageLayout,
    hashes: &[u32],
) -> Result<Patch> {
    let base = button_action_hashes_address(layout)?;
    let original = image.read_table(base, hashes.len(), WORD)?;

    let mut patch = Patch::new();
    for (index, (&hash, old)) in hashes.iter().zip(original.chunks_exact(WORD)).enumerate() {
        if hash != word(old) {
            patch.push(PatchEntry::extended_word(
                base + (index * WORD) as u32,
                hash,
            ));
        }
    }

    info!(
        "Generated {} patch entries for {} button action hashes",
        patch.len(),
        hashes.len()
    );
    Ok(patch)
}
