//! check.bin record container format
//!
//! A fixed 16-byte header, `count` fixed-width text slots and a trailer of
//! one u32 metadata value per slot. All integers are little-endian.
//!
//! # Layout
//! ```text
//! 0x00: magic   u32
//! 0x04: version u32
//! 0x08: flags   u32
//! 0x0C: count   u32
//! 0x10: count * 260-byte entry slots (UTF-8, NUL-padded)
//! ....: count * u32 metadata values
//! ```
//!
//! # Example
//!
//! ```
//! use checkbin_format::{decode, encode, HeaderTags};
//!
//! let bytes = encode(&["a", "bb"], HeaderTags::default(), None).unwrap();
//! assert_eq!(bytes.len(), 552);
//!
//! let record = decode(&bytes).unwrap();
//! assert_eq!(record.header.count, 2);
//! assert_eq!(record.entries, vec!["a", "bb"]);
//! assert_eq!(record.metadata, vec![0, 0]);
//! ```

mod decode;
mod encode;
mod error;
mod layout;
mod record;


pub use decode::decode;
pub use encode::{encode, encode_entries};
pub use error::CheckBinError;
pub use layout::{
    CheckBinHeader, DEFAULT_FLAGS, DEFAULT_MAGIC, DEFAULT_VERSION, ENTRY_SIZE, EntrySlot,
    HEADER_SIZE, HeaderTags, METADATA_SIZE, expected_file_size,
};
pub use record::CheckBinRecord;
