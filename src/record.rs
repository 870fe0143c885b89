//! Fixed-length ACH records.
//!
//! An ACH file is a sequence of 94-byte records. The toggle never looks
//! inside a record: it only needs to know where one ends and the next
//! begins, so a [`Record`] is an opaque block of bytes.

use std::fmt;

/// Width of one ACH record in bytes.
pub const RECORD_LENGTH: usize = 94;

/// One record's payload, without any line terminator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    data: Vec<u8>,
}

impl Record {
    /// Wrap raw bytes as a record. No padding or truncation is applied.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Build a record from text. Mostly useful in tests.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        Self {
            data: s.as_bytes().to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data))
    }
}

/// Total payload length of a record sequence, delimiters excluded.
pub fn total_len(records: &[Record]) -> usize {
    records.iter().map(Record::len).sum()
}
