//! Read-only access to a game executable image.
//!
//! The image is addressed with the game's virtual addresses. Translation to a
//! file offset is a fixed linear shift (see [`to_file_offset`]); every read is
//! bounds-checked against the image and fails with
//! [`Error::ImageReadOutOfBounds`] instead of panicking.

mod checksum;
mod file;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use checksum::crc32;
pub use file::ImageFile;

#[cfg(any(test, feature = "test-support"))]
pub use mock::MockImageBuilder;

use crate::error::{Error, Result};

/// Virtual address the executable's first segment is loaded at
pub const LOAD_VADDR: u32 = 0x100000;
/// File offset of the first segment (size of the ELF headers before it)
pub const FILE_HEADER_SIZE: u32 = 0x1000;
/// Word size used by every table in the image
pub const WORD: usize = 4;

/// Translate a virtual address to a file offset.
///
/// Addresses below [`LOAD_VADDR`] wrap to a huge offset, which every bounded
/// read then rejects.
pub fn to_file_offset(vaddr: u32) -> usize {
    (vaddr as usize)
        .wrapping_sub(LOAD_VADDR as usize)
        .wrapping_add(FILE_HEADER_SIZE as usize)
}

/// Bounded random access to an executable image.
pub trait ReadImage {
    /// Raw bytes of the whole image
    fn bytes(&self) -> &[u8];

    fn read_bytes(&self, address: u32, size: usize) -> Result<&[u8]> {
        let start = to_file_offset(address);
        start
            .checked_add(size)
            .and_then(|end| self.bytes().get(start..end))
            .ok_or(Error::ImageReadOutOfBounds { address, size })
    }

    /// Read `count` consecutive entries of `entry_size` bytes
    fn read_table(&self, address: u32, count: usize, entry_size: usize) -> Result<&[u8]> {
        let size = count
            .checked_mul(entry_size)
            .ok_or(Error::ImageReadOutOfBounds {
                address,
                size: usize::MAX,
            })?;
        self.read_bytes(address, size)
    }

    fn read_u32(&self, address: u32) -> Result<u32> {
        let bytes = self.read_bytes(address, WORD)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a NUL-terminated ASCII string. A string running into the end of
    /// the image is returned as-is.
    fn read_c_string(&self, address: u32) -> Result<String> {
        let start = to_file_offset(address);
        let tail = self
            .bytes()
            .get(start..)
            .ok_or(Error::ImageReadOutOfBounds { address, size: 1 })?;
        let len = memchr::memchr(0, tail).unwrap_or(tail.len());
        let raw = &tail[..len];
        if !raw.is_ascii() {
            return Err(Error::InvalidString { address });
        }
        Ok(raw.iter().map(|&b| b as char).collect())
    }

    /// CRC-32 of the full image, used to identify the build
    fn checksum(&self) -> u32 {
        crc32(self.bytes())
    }
}

impl ReadImage for [u8] {
    fn bytes(&self) -> &[u8] {
        self
    }
}

impl ReadImage for Vec<u8> {
    fn bytes(&self) -> &[u8] {
        self
    }
}
