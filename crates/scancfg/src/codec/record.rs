use serde::{Deserialize, Serialize};

/// Glyph field. Hot Pursuit 2 stores two slots and trims trailing zeros,
/// Underground stores a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Glyph {
    Single(u32),
    List(Vec<u32>),
}

impl Glyph {
    pub fn values(&self) -> &[u32] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// One decoded scanner config table entry.
///
/// Field order matches the JSON documents the tool reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfigRecord {
    /// Up to 8 config values, trailing zeros trimmed
    pub configs: Vec<i8>,
    pub event_name: String,
    /// Scanner function name; absent when the function pointer is null
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanner: Option<String>,
    pub xor: [u8; 2],
    /// Top 3 bits of the two packed index/shift bytes
    pub index: [u8; 2],
    /// Low 5 bits of the two packed index/shift bytes
    pub shift: [u8; 2],
    pub invert: i8,
    pub graph: u8,
    pub unk16: u16,
    pub glyph: Glyph,
    /// Button label the record points at. Display only, never encoded.
    #[serde(default)]
    pub button: String,
}

impl ScannerConfigRecord {
    /// Compare every field that survives encoding (all but `button`)
    pub fn same_encoded_fields(&self, other: &Self) -> bool {
        Self {
            button: String::new(),
            ..self.clone()
        } == Self {
            button: String::new(),
            ..other.clone()
        }
    }
}
