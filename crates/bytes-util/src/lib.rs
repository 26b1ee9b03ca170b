//! Byte-level helpers shared by the container and codec crates.
//!
//! Provides a zero-copy extension trait over [`std::io::Cursor`] backed by
//! [`bytes::Bytes`], and an MSB-first bit reader for bit-packed codec
//! configuration records.

mod bit_read;
mod bytes_cursor;

pub use crate::bit_read::BitReader;
pub use crate::bytes_cursor::{BytesCursor, BytesCursorExt};
