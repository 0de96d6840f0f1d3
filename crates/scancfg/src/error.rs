use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown game build (image CRC32: {checksum:08X})")]
    UnknownBuild { checksum: u32 },

    #[error("Unknown scanner function at address {address:08X}")]
    UnknownScanner { address: u32 },

    #[error("Unknown scanner name: {0}")]
    UnknownScannerName(String),

    #[error("Unknown event name: {0}")]
    UnknownEventName(String),

    #[error("Out of space for scanner configs: specified {requested}, max {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("Image read of {size} bytes at address {address:#x} is out of bounds")]
    ImageReadOutOfBounds { address: u32, size: usize },

    #[error("Raw record is {actual} bytes, expected {expected}")]
    InvalidRecordSize { expected: usize, actual: usize },

    #[error("String at address {address:#x} is not valid ASCII")]
    InvalidString { address: u32 },

    #[error("Field '{field}' has {len} values, max {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Field '{field}' value {value} is out of range (max {max})")]
    FieldOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Build '{build}' has no {table} table")]
    MissingTable { table: &'static str, build: String },

    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
