//! Layout constants, header and entry slot

use serde::Serialize;

/// Header size in bytes (4 x u32)
pub const HEADER_SIZE: usize = 16;

/// Fixed width of one entry slot in bytes
pub const ENTRY_SIZE: usize = 260;

/// Size of one trailer metadata value in bytes
pub const METADATA_SIZE: usize = 4;

/// Conventional magic tag
pub const DEFAULT_MAGIC: u32 = 2008;

/// Conventional version tag
pub const DEFAULT_VERSION: u32 = 1;

/// Conventional flags tag
pub const DEFAULT_FLAGS: u32 = 7;

/// Total file size implied by a header declaring `count` entries.
///
/// Computed in u64 so any on-disk `count` is representable.
pub fn expected_file_size(count: u32) -> u64 {
    let count = count as u64;
    HEADER_SIZE as u64 + count * ENTRY_SIZE as u64 + count * METADATA_SIZE as u64
}

/// Caller-supplied header fields.
///
/// `count` is deliberately absent: it is always derived from the entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTags {
    pub magic: u32,
    pub version: u32,
    pub flags: u32,
}

impl HeaderTags {
    pub const fn new(magic: u32, version: u32, flags: u32) -> Self {
        Self {
            magic,
            version,
            flags,
        }
    }
}

impl Default for HeaderTags {
    fn default() -> Self {
        Self::new(DEFAULT_MAGIC, DEFAULT_VERSION, DEFAULT_FLAGS)
    }
}

impl From<[u32; 3]> for HeaderTags {
    fn from([magic, version, flags]: [u32; 3]) -> Self {
        Self::new(magic, version, flags)
    }
}

/// check.bin header (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckBinHeader {
    pub magic: u32,
    pub version: u32,
    pub flags: u32,
    /// Number of entry slots (and trailer values) that follow
    pub count: u32,
}

impl CheckBinHeader {
    pub const SIZE: usize = HEADER_SIZE;

    pub fn new(tags: HeaderTags, count: u32) -> Self {
        Self {
            magic: tags.magic,
            version: tags.version,
            flags: tags.flags,
            count,
        }
    }

    /// The caller-settable part of the header
    pub fn tags(&self) -> HeaderTags {
        HeaderTags::new(self.magic, self.version, self.flags)
    }

    /// Calculate total file size (header + slots + trailer)
    pub fn file_size(&self) -> u64 {
        expected_file_size(self.count)
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.magic.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.flags.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.count.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            magic: read_u32_le(bytes, 0),
            version: read_u32_le(bytes, 4),
            flags: read_u32_le(bytes, 8),
            count: read_u32_le(bytes, 12),
        })
    }
}

/// One fixed-width entry slot.
///
/// Holds at most [`ENTRY_SIZE`] bytes of UTF-8 text, NUL-padded on the right.
/// The bound is checked once, at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct EntrySlot([u8; ENTRY_SIZE]);

impl EntrySlot {
    /// Build a slot from text, or `None` if its UTF-8 encoding exceeds the slot.
    pub fn new(text: &str) -> Option<Self> {
        let encoded = text.as_bytes();
        if encoded.len() > ENTRY_SIZE {
            return None;
        }
        let mut slot = [0u8; ENTRY_SIZE];
        slot[..encoded.len()].copy_from_slice(encoded);
        Some(Self(slot))
    }

    /// Copy a raw slot out of a buffer (first [`ENTRY_SIZE`] bytes).
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; ENTRY_SIZE] = bytes.get(..ENTRY_SIZE)?.try_into().ok()?;
        Some(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; ENTRY_SIZE] {
        &self.0
    }

    /// Bytes up to (not including) the first NUL, or the whole slot.
    pub fn content(&self) -> &[u8] {
        slot_content(&self.0)
    }

    /// Slot text, with invalid UTF-8 replaced by U+FFFD.
    pub fn text(&self) -> String {
        slot_text(&self.0)
    }
}

impl std::fmt::Debug for EntrySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EntrySlot").field(&self.text()).finish()
    }
}

/// Raw slot bytes up to the first NUL.
pub(crate) fn slot_content(raw: &[u8]) -> &[u8] {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    &raw[..end]
}

/// Lossy UTF-8 text of a raw slot. Never fails.
pub(crate) fn slot_text(raw: &[u8]) -> String {
    String::from_utf8_lossy(slot_content(raw)).into_owned()
}

/// Read a little-endian u32 at `offset`. Caller guarantees bounds.
pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = CheckBinHeader::new(HeaderTags::new(1, 2, 3), 4);
        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), CheckBinHeader::SIZE);

        let parsed = CheckBinHeader::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.tags(), HeaderTags::new(1, 2, 3));
    }

    #[test]
    fn test_header_from_short_bytes() {
        assert!(CheckBinHeader::from_bytes(&[0u8; 15]).is_none());
    }

    #[test]
    fn test_default_header_bytes() {
        let header = CheckBinHeader::new(HeaderTags::default(), 2);
        assert_eq!(
            header.to_bytes(),
            [
                0xD8, 0x07, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x02,
                0x00, 0x00, 0x00
            ]
        );
    }

    #[test]
    fn test_expected_file_size() {
        assert_eq!(expected_file_size(0), 16);
        assert_eq!(expected_file_size(2), 552);
        // Largest declarable count must not overflow
        assert_eq!(expected_file_size(u32::MAX), 16 + u32::MAX as u64 * 264);
    }

    #[test]
    fn test_slot_padding() {
        let slot = EntrySlot::new("abc").unwrap();
        assert_eq!(&slot.as_bytes()[..3], b"abc");
        assert!(slot.as_bytes()[3..].iter().all(|&b| b == 0));
        assert_eq!(slot.text(), "abc");
    }

    #[test]
    fn test_slot_bound() {
        assert!(EntrySlot::new(&"x".repeat(ENTRY_SIZE)).is_some());
        assert!(EntrySlot::new(&"x".repeat(ENTRY_SIZE + 1)).is_none());
    }

    #[test]
    fn test_full_slot_has_no_terminator() {
        let text = "y".repeat(ENTRY_SIZE);
        let slot = EntrySlot::new(&text).unwrap();
        assert_eq!(slot.content().len(), ENTRY_SIZE);
        assert_eq!(slot.text(), text);
    }

    #[test]
    fn test_slot_stops_at_first_nul() {
        let mut raw = [0u8; ENTRY_SIZE];
        raw[..2].copy_from_slice(b"hi");
        raw[3..8].copy_from_slice(b"stale");
        let slot = EntrySlot::from_bytes(&raw).unwrap();
        assert_eq!(slot.text(), "hi");
    }

    #[test]
    fn test_slot_from_short_bytes() {
        assert!(EntrySlot::from_bytes(&[0u8; ENTRY_SIZE - 1]).is_none());
    }
}
