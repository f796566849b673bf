//! Decoder: bytes -> record

use crate::error::CheckBinError;
use crate::layout::{
    CheckBinHeader, ENTRY_SIZE, HEADER_SIZE, METADATA_SIZE, read_u32_le, slot_text,
};
use crate::record::CheckBinRecord;

/// Parse a complete check.bin buffer.
///
/// The buffer length must match the size implied by the header's `count`
/// exactly. Entry text is decoded lossily, so once the size check passes
/// decoding cannot fail.
pub fn decode(bytes: &[u8]) -> Result<CheckBinRecord, CheckBinError> {
    let header = CheckBinHeader::from_bytes(bytes).ok_or(CheckBinError::TruncatedHeader {
        actual: bytes.len(),
    })?;

    let expected = header.file_size();
    let actual = bytes.len() as u64;
    if actual != expected {
        return Err(CheckBinError::SizeMismatch { actual, expected });
    }

    // The size check bounds count by the buffer length, so these fit in usize
    let count = header.count as usize;
    let trailer_start = HEADER_SIZE + count * ENTRY_SIZE;

    let entries: Vec<String> = bytes[HEADER_SIZE..trailer_start]
        .chunks_exact(ENTRY_SIZE)
        .map(slot_text)
        .collect();

    let trailer = &bytes[trailer_start..];
    if trailer.len() != count * METADATA_SIZE {
        return Err(CheckBinError::SizeMismatch { actual, expected });
    }
    let metadata: Vec<u32> = (0..count)
        .map(|i| read_u32_le(trailer, i * METADATA_SIZE))
        .collect();

    tracing::debug!(
        magic = header.magic,
        version = header.version,
        flags = header.flags,
        count,
        "Decoded check.bin ({} bytes)",
        bytes.len()
    );

    Ok(CheckBinRecord {
        header,
        entries,
        metadata,
    })
}
