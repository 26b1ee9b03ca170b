//! The parsed-file aggregate.

use amf0::Amf0Object;
use bytes::Bytes;

use crate::error::FlvError;
use crate::header::FlvHeader;
use crate::parser::FlvParser;
use crate::tag::FlvTag;

/// A fully parsed FLV file.
///
/// Owns everything it holds; the source buffer can be dropped after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct FlvFile {
    /// Opaque identifier supplied by the host, typically the file name.
    pub source: String,
    /// The 9-byte file header.
    pub header: FlvHeader,
    /// The value of the first `onMetaData` script tag whose value is a map,
    /// or empty if the stream carries none.
    pub metadata: Amf0Object,
    /// Every structurally complete tag, in stream order.
    pub tags: Vec<FlvTag>,
}

impl FlvFile {
    /// Parses `data`, including the timestamp gap analysis pass.
    pub fn parse(data: Bytes, source: &str) -> Result<Self, FlvError> {
        FlvParser::parse(data, source)
    }

    /// Looks up a metadata entry by key.
    pub fn metadata_value(&self, key: &str) -> Option<&amf0::Amf0Value> {
        self.metadata
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }
}
