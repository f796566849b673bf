//! In-memory check.bin record

use serde::Serialize;

use crate::error::CheckBinError;
use crate::layout::{CheckBinHeader, EntrySlot, HeaderTags};

/// A whole check.bin container.
///
/// Serializes as the extract document:
///
/// ```text
/// { "header": { "magic", "version", "flags", "count" },
///   "entries": [string],
///   "metadata": [u32] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckBinRecord {
    pub header: CheckBinHeader,
    pub entries: Vec<String>,
    /// One value per entry, positionally aligned
    pub metadata: Vec<u32>,
}

impl CheckBinRecord {
    /// Assemble a record with a derived `count`.
    ///
    /// Applies the encoder's constraints: every entry must fit a slot and
    /// metadata (zero-filled when `None`) must match the entry count.
    pub fn new(
        tags: HeaderTags,
        entries: Vec<String>,
        metadata: Option<Vec<u32>>,
    ) -> Result<Self, CheckBinError> {
        let count = u32::try_from(entries.len()).map_err(|_| CheckBinError::TooManyEntries {
            count: entries.len(),
        })?;

        if let Some((index, entry)) = entries
            .iter()
            .enumerate()
            .find(|(_, entry)| EntrySlot::new(entry).is_none())
        {
            return Err(CheckBinError::EntryTooLong {
                index,
                length: entry.len(),
            });
        }

        let metadata = match metadata {
            Some(metadata) if metadata.len() != entries.len() => {
                return Err(CheckBinError::MetadataCountMismatch {
                    got: metadata.len(),
                    expected: entries.len(),
                });
            }
            Some(metadata) => metadata,
            None => vec![0; entries.len()],
        };

        Ok(Self {
            header: CheckBinHeader::new(tags, count),
            entries,
            metadata,
        })
    }

    /// Decode a record from bytes. See [`decode`](crate::decode).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckBinError> {
        crate::decode(bytes)
    }

    /// Re-encode this record.
    ///
    /// Header tags are taken from `self.header`; `count` is re-derived from
    /// the entries. Zero-entry records are allowed.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckBinError> {
        crate::encode_entries(
            &self.entries,
            self.header.tags(),
            Some(self.metadata.as_slice()),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their metadata value
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries
            .iter()
            .map(String::as_str)
            .zip(self.metadata.iter().copied())
    }
}
