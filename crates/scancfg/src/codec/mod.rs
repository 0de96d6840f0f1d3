//! Scanner config record codec.
//!
//! Each supported game family stores scanner configs as fixed-size packed
//! little-endian records. The first 24 bytes are shared by every family:
//!
//! ```text
//! Offset   Field          Size    Description
//! ──────────────────────────────────────────────────────
//! 0x00     configs        8       8 × i8, trailing zeros trimmed on decode
//! 0x08     event id       4       resolved through the event name table
//! 0x0C     scanner        4       scanner function pointer (0 = none)
//! 0x10     xor            2       2 × u8, opaque
//! 0x12     index/shift    2       2 × u8, (index << 5) | shift
//! 0x14     invert         1       i8
//! 0x15     graph          1       u8
//! 0x16     unk16          2       u16
//! ```
//!
//! The tail differs per family, see [`hp2`] and [`ug1`].

pub mod hp2;
pub mod ug1;

mod fields;
mod record;

pub use hp2::Hp2Layout;
pub use record::{Glyph, ScannerConfigRecord};
pub use ug1::Ug1Layout;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{Error, Result};
use crate::events::EventNameTable;
use crate::image::{ReadImage, WORD};
use crate::layout::ScannerMap;

use fields::{FieldReader, FieldWriter};

/// Number of config slots in every record
pub const CONFIG_SLOTS: usize = 8;
/// Largest value the 3-bit index can hold
pub const MAX_INDEX: u8 = 0x07;
/// Largest value the 5-bit shift can hold
pub const MAX_SHIFT: u8 = 0x1F;
/// Size of the fields shared by every record layout
const HEADER_SIZE: usize = 24;

/// A fixed record layout of one game family.
pub trait RecordLayout {
    /// Size of one record in bytes (a multiple of the word size)
    const RECORD_SIZE: usize;

    /// Decode one raw record. Embedded string pointers are followed into `image`.
    fn decode<I: ReadImage + ?Sized>(
        &self,
        image: &I,
        scanners: &ScannerMap,
        events: &EventNameTable,
        raw: &[u8],
    ) -> Result<ScannerConfigRecord>;

    /// Encode a record. The button pointer is always written as zero.
    fn encode<F>(
        &self,
        scanners: &ScannerMap,
        resolve_event_id: F,
        record: &ScannerConfigRecord,
    ) -> Result<Vec<u8>>
    where
        F: Fn(&str) -> Result<u32>;

    /// Whether word `index` of an encoded record takes part in patch diffing
    fn is_word_relevant(&self, index: usize) -> bool;
}

/// The closed set of known record layouts
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum CodecKind {
    /// Need for Speed: Hot Pursuit 2
    #[serde(rename = "hp2")]
    #[strum(serialize = "hp2")]
    HotPursuit2,
    /// Need for Speed: Underground
    #[serde(rename = "ug1")]
    #[strum(serialize = "ug1")]
    Underground,
}

impl CodecKind {
    pub fn record_size(&self) -> usize {
        match self {
            Self::HotPursuit2 => Hp2Layout::RECORD_SIZE,
            Self::Underground => Ug1Layout::RECORD_SIZE,
        }
    }

    pub fn words_per_record(&self) -> usize {
        self.record_size() / WORD
    }

    pub fn decode<I: ReadImage + ?Sized>(
        &self,
        image: &I,
        scanners: &ScannerMap,
        events: &EventNameTable,
        raw: &[u8],
    ) -> Result<ScannerConfigRecord> {
        match self {
            Self::HotPursuit2 => Hp2Layout.decode(image, scanners, events, raw),
            Self::Underground => Ug1Layout.decode(image, scanners, events, raw),
        }
    }

    pub fn encode<F>(
        &self,
        scanners: &ScannerMap,
        resolve_event_id: F,
        record: &ScannerConfigRecord,
    ) -> Result<Vec<u8>>
    where
        F: Fn(&str) -> Result<u32>,
    {
        match self {
            Self::HotPursuit2 => Hp2Layout.encode(scanners, resolve_event_id, record),
            Self::Underground => Ug1Layout.encode(scanners, resolve_event_id, record),
        }
    }

    pub fn is_word_relevant(&self, index: usize) -> bool {
        match self {
            Self::HotPursuit2 => Hp2Layout.is_word_relevant(index),
            Self::Underground => Ug1Layout.is_word_relevant(index),
        }
    }
}

/// Drop trailing zero values
pub fn trim_trailing_zeros<T: Copy + Default + PartialEq>(values: &[T]) -> Vec<T> {
    let zero = T::default();
    let len = values
        .iter()
        .rposition(|v| *v != zero)
        .map_or(0, |last| last + 1);
    values[..len].to_vec()
}

/// Zero-pad `values` to exactly `N` slots
pub fn pad_to<T: Copy + Default, const N: usize>(
    field: &'static str,
    values: &[T],
) -> Result<[T; N]> {
    if values.len() > N {
        return Err(Error::FieldTooLong {
            field,
            len: values.len(),
            max: N,
        });
    }
    let mut out = [T::default(); N];
    out[..values.len()].copy_from_slice(values);
    Ok(out)
}

/// Split a packed byte into `(index, shift)`
pub fn unpack_index_shift(byte: u8) -> (u8, u8) {
    (byte >> 5, byte & MAX_SHIFT)
}

/// Pack `index` (3 bits) and `shift` (5 bits) into one byte
pub fn pack_index_shift(index: u8, shift: u8) -> Result<u8> {
    if index > MAX_INDEX {
        return Err(Error::FieldOutOfRange {
            field: "index",
            value: index as u32,
            max: MAX_INDEX as u32,
        });
    }
    if shift > MAX_SHIFT {
        return Err(Error::FieldOutOfRange {
            field: "shift",
            value: shift as u32,
            max: MAX_SHIFT as u32,
        });
    }
    Ok(index << 5 | shift)
}

fn check_record_size(raw: &[u8], expected: usize) -> Result<()> {
    if raw.len() != expected {
        return Err(Error::InvalidRecordSize {
            expected,
            actual: raw.len(),
        });
    }
    Ok(())
}

/// Decode the fields shared by every layout. `glyph` and `button` are left
/// for the caller.
fn decode_header(
    reader: &mut FieldReader<'_>,
    scanners: &ScannerMap,
    events: &EventNameTable,
) -> Result<ScannerConfigRecord> {
    let configs: [u8; CONFIG_SLOTS] = reader.array();
    let configs: Vec<i8> = configs.iter().map(|&b| b as i8).collect();
    let event_id = reader.u32();

    let scanner_address = reader.u32();
    let scanner = match scanner_address {
        0 => None,
        address => Some(
            scanners
                .name_of(address)
                .ok_or(Error::UnknownScanner { address })?
                .to_string(),
        ),
    };

    let xor = reader.array::<2>();
    let packed = reader.array::<2>();
    let (index0, shift0) = unpack_index_shift(packed[0]);
    let (index1, shift1) = unpack_index_shift(packed[1]);

    Ok(ScannerConfigRecord {
        configs: trim_trailing_zeros(&configs),
        event_name: events.name_of(event_id),
        scanner,
        xor,
        index: [index0, index1],
        shift: [shift0, shift1],
        invert: reader.i8(),
        graph: reader.u8(),
        unk16: reader.u16(),
        glyph: Glyph::default(),
        button: String::new(),
    })
}

fn encode_header<F>(
    writer: &mut FieldWriter,
    scanners: &ScannerMap,
    resolve_event_id: F,
    record: &ScannerConfigRecord,
) -> Result<()>
where
    F: Fn(&str) -> Result<u32>,
{
    let configs: [i8; CONFIG_SLOTS] = pad_to("configs", &record.configs)?;
    for value in configs {
        writer.i8(value);
    }

    writer.u32(resolve_event_id(&record.event_name)?);

    let scanner_address = match &record.scanner {
        None => 0,
        Some(name) => scanners
            .address_of(name)
            .ok_or_else(|| Error::UnknownScannerName(name.clone()))?,
    };
    writer.u32(scanner_address);

    writer.bytes(&record.xor);
    for slot in 0..2 {
        writer.u8(pack_index_shift(record.index[slot], record.shift[slot])?);
    }
    writer.i8(record.invert);
    writer.u8(record.graph);
    writer.u16(record.unk16);
    Ok(())
}

/// Button label behind a string pointer; empty for a null pointer
fn read_button<I: ReadImage + ?Sized>(image: &I, pointer: u32) -> Result<String> {
    match pointer {
        0 => Ok(String::new()),
        address => image.read_c_string(address),
    }
}
