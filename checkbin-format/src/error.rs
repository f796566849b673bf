//! Codec error taxonomy

/// Errors produced by [`decode`](crate::decode) and [`encode`](crate::encode).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckBinError {
    #[error("File too small to contain header: {actual} bytes (need 16)")]
    TruncatedHeader { actual: usize },

    #[error("Unexpected file size: {actual} bytes (expected {expected})")]
    SizeMismatch { actual: u64, expected: u64 },

    #[error("Entry {index} too long: {length} bytes (max 260)")]
    EntryTooLong { index: usize, length: usize },

    #[error("Metadata count ({got}) does not match entries ({expected})")]
    MetadataCountMismatch { got: usize, expected: usize },

    #[error("Too many entries: {count} (max {max})", max = u32::MAX)]
    TooManyEntries { count: usize },

    #[error("No entries found to pack")]
    EmptyInput,
}
