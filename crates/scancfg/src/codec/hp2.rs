//! Need for Speed: Hot Pursuit 2 record layout (36 bytes, 9 words).
//!
//! ```text
//! 0x00..0x18   shared header
//! 0x18         glyph[0]        4   u32
//! 0x1C         glyph[1]        4   u32
//! 0x20         button          4   string pointer (word 8, display only)
//! ```

use super::{
    FieldReader, FieldWriter, Glyph, HEADER_SIZE, RecordLayout, ScannerConfigRecord,
    check_record_size, decode_header, encode_header, pad_to, read_button, trim_trailing_zeros,
};
use crate::error::Result;
use crate::events::EventNameTable;
use crate::image::ReadImage;
use crate::layout::ScannerMap;

const GLYPH_SLOTS: usize = 2;
const BUTTON_WORD: usize = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct Hp2Layout;

impl RecordLayout for Hp2Layout {
    const RECORD_SIZE: usize = 36;

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

        let glyph = [reader.u32(), reader.u32()];
        record.glyph = Glyph::List(trim_trailing_zeros(&glyph));
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

        let glyph: [u32; GLYPH_SLOTS] = pad_to("glyph", record.glyph.values())?;
        for value in glyph {
            writer.u32(value);
        }
        writer.u32(0);
        Ok(writer.finish())
    }

    fn is_word_relevant(&self, index: usize) -> bool {
        index != BUTTON_WORD
    }
}
