use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tracing::debug;

use super::ReadImage;
use crate::error::Result;

/// Game executable mapped read-only into memory.
pub struct ImageFile {
    mmap: Mmap,
    pub path: PathBuf,
}

impl ImageFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        // SAFETY: the mapping is read-only and lives as long as `self`; the
        // tool never writes to the image it inspects.
        let mmap = unsafe { Mmap::map(&file)? };
        debug!("Mapped image {:?} ({} bytes)", path, mmap.len());
        Ok(Self { mmap, path })
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

impl ReadImage for ImageFile {
    fn bytes(&self) -> &[u8] {
        &self.mmap
    }
}
