//! FLV container parsing, analysis and rewriting.
//!
//! The crate operates on in-memory byte buffers: the host reads the file and
//! hands over a [`bytes::Bytes`], and gets structured results or a fresh
//! output buffer back. Three operations cover the whole surface:
//!
//! - [`parse`] decodes the file header, walks the tag stream, interprets the
//!   `onMetaData` script tag, and annotates suspicious timestamp jumps;
//! - [`repair`] re-emits every structurally complete tag byte for byte,
//!   dropping a truncated trailing fragment;
//! - [`rewrite_metadata`] re-emits the file with the `onMetaData` script tag
//!   replaced by a caller-supplied metadata map.

pub mod aac;
pub mod analyzer;
pub mod audio;
pub mod constants;
pub mod error;
pub mod file;
pub mod header;
pub mod parser;
pub mod script;
pub mod tag;
pub mod video;
pub mod writer;

#[cfg(test)]
pub mod test_utils;

pub use crate::error::FlvError;
pub use crate::file::FlvFile;
pub use crate::header::FlvHeader;
pub use crate::tag::{FlvTag, FlvTagDetails, FlvTagType};

use bytes::Bytes;

/// The conventional name of the script tag carrying stream-wide parameters.
pub const ON_METADATA: &str = "onMetaData";

/// Parses an FLV buffer into its structured form, including the timestamp
/// gap analysis pass. `source` is an opaque identifier echoed back on the
/// result (typically the file name).
pub fn parse(data: Bytes, source: &str) -> Result<FlvFile, FlvError> {
    parser::FlvParser::parse(data, source)
}

/// Produces a byte-exact copy of every structurally complete tag. See
/// [`writer::repair`].
pub fn repair(data: &Bytes) -> Result<Bytes, FlvError> {
    writer::repair(data)
}

/// Re-emits the file with the `onMetaData` script tag replaced by
/// `metadata`. See [`writer::rewrite_metadata`].
pub fn rewrite_metadata(data: &Bytes, metadata: &amf0::Amf0Object) -> Result<Bytes, FlvError> {
    writer::rewrite_metadata(data, metadata)
}
