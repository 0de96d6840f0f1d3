//! Synthetic images for tests.

use super::{FILE_HEADER_SIZE, LOAD_VADDR, to_file_offset};

/// Builds a zero-filled image and places values at virtual addresses.
pub struct MockImageBuilder {
    bytes: Vec<u8>,
}

impl MockImageBuilder {
    /// Image covering `segment_size` bytes of virtual memory from the load address
    pub fn new(segment_size: usize) -> Self {
        Self {
            bytes: vec![0; FILE_HEADER_SIZE as usize + segment_size],
        }
    }

    pub fn with_bytes(mut self, vaddr: u32, data: &[u8]) -> Self {
        assert!(vaddr >= LOAD_VADDR, "address below load address");
        let start = to_file_offset(vaddr);
        let end = start + data.len();
        if end > self.bytes.len() {
            self.bytes.resize(end, 0);
        }
        self.bytes[start..end].copy_from_slice(data);
        self
    }

    pub fn with_u32(self, vaddr: u32, value: u32) -> Self {
        self.with_bytes(vaddr, &value.to_le_bytes())
    }

    pub fn with_c_string(self, vaddr: u32, s: &str) -> Self {
        let mut data = s.as_bytes().to_vec();
        data.push(0);
        self.with_bytes(vaddr, &data)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
