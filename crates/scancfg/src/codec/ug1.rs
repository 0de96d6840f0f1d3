//! Need for Speed: Underground record layout (32 bytes, 8 words).
//!
//! ```text
//! 0x00..0x18   shared header
//! 0x18         glyph           4   u32, fixed width
//! 0x1C         button          4   string pointer (word 7, display only)
//! ```
//!
//! Underground builds additionally carry a button action hash table, which
//! lives outside the records (see [`crate::dump::dump_button_action_hashes`]).

use super::{
    FieldReader, FieldWriter, Glyph, HEADER_SIZE, RecordLayout, ScannerConfigRecord,
    check_record_size, decode_header, encode_header, read_button,
};
use crate::error::{Error, Result};
use crate::events::EventNameTable;
use crate::image::ReadImage;
use crate::layout::ScannerMap;

const BUTTON_WORD: usize = 7;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ug1Layout;

impl RecordLayout for Ug1Layout {
    const RECORD_SIZE: usize = 32;

    fn decode<I: ReadImage + ?Sized>(
        &self,
        image: &I,
        scanners: &ScannerMap,
        events: &EventNameTable,
        raw: &[u8],
    ) -> Result<ScannerConfigRecord> {
        check_record_size(raw, Self::RECORD_SIZE)?;
        let mut reader = FieldReader::new(raw);
        let mut record = decode_header(&mut reader, scanners, events)?;
        debug_assert_eq!(reader.position(), HEADER_SIZE);

        record.glyph = Glyph::Single(reader.u32());
        record.button = read_button(image, reader.u32())?;
        Ok(record)
    }

    fn encode<F>(
        &self,
        scanners: &ScannerMap,
        resolve_event_id: F,
        record: &ScannerConfigRecord,
    ) -> Result<Vec<u8>>
    where
        F: Fn(&str) -> Result<u32>,
    {
        let mut writer = FieldWriter::with_capacity(Self::RECORD_SIZE);
        encode_header(&mut writer, scanners, resolve_event_id, record)?;

        let glyph = match record.glyph.values() {
            [] => 0,
            [value] => *value,
            values => {
                return Err(Error::FieldTooLong {
                    field: "glyph",
                    len: values.len(),
                    max: 1,
                });
            }
        };
        writer.u32(glyph);
        writer.u32(0);
        Ok(writer.finish())
    }

    fn is_word_relevant(&self, index: usize) -> bool {
        index != BUTTON_WORD
    }
}
