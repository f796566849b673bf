//! Encoder: entries + header tags + metadata -> bytes

use crate::error::CheckBinError;
use crate::layout::{CheckBinHeader, EntrySlot, HeaderTags, expected_file_size};

/// Encode entries into a check.bin buffer.
///
/// `count` is derived from `entries.len()`. Missing metadata is zero-filled.
/// An empty entry list is rejected with [`CheckBinError::EmptyInput`]; use
/// [`encode_entries`] to produce a zero-entry container.
pub fn encode<S: AsRef<str>>(
    entries: &[S],
    tags: HeaderTags,
    metadata: Option<&[u32]>,
) -> Result<Vec<u8>, CheckBinError> {
    if entries.is_empty() {
        return Err(CheckBinError::EmptyInput);
    }
    encode_entries(entries, tags, metadata)
}

/// Low-level encoder with the same contract as [`encode`], except that an
/// empty entry list yields a bare 16-byte header with `count = 0`.
///
/// Every entry and the metadata length are validated before the output
/// buffer is built, so an error never leaves a partial buffer behind.
pub fn encode_entries<S: AsRef<str>>(
    entries: &[S],
    tags: HeaderTags,
    metadata: Option<&[u32]>,
) -> Result<Vec<u8>, CheckBinError> {
    let count = u32::try_from(entries.len()).map_err(|_| CheckBinError::TooManyEntries {
        count: entries.len(),
    })?;

    let slots = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.as_ref();
            EntrySlot::new(entry).ok_or(CheckBinError::EntryTooLong {
                index,
                length: entry.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(metadata) = metadata {
        if metadata.len() != entries.len() {
            return Err(CheckBinError::MetadataCountMismatch {
                got: metadata.len(),
                expected: entries.len(),
            });
        }
    }

    let header = CheckBinHeader::new(tags, count);
    let size = expected_file_size(count) as usize;
    let mut out = Vec::with_capacity(size);

    out.extend_from_slice(&header.to_bytes());
    for slot in &slots {
        out.extend_from_slice(slot.as_bytes());
    }
    match metadata {
        Some(values) => {
            for value in values {
                out.extend_from_slice(&value.to_le_bytes());
            }
        }
        None => out.resize(size, 0),
    }
    debug_assert_eq!(out.len(), size);

    tracing::debug!(
        magic = tags.magic,
        version = tags.version,
        flags = tags.flags,
        count,
        "Encoded check.bin ({} bytes)",
        out.len()
    );

    Ok(out)
}
