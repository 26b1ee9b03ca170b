use thiserror::Error;

/// Terminal errors for the top-level parse, repair and rewrite operations.
///
/// Conditions the engine recovers from locally (a truncated trailing tag, an
/// unsupported AMF marker, invalid UTF-8 in a string field, an empty tag
/// payload, a script tag that fails to decode) never surface here.
#[derive(Debug, Error)]
pub enum FlvError {
    /// The first three bytes are not `F` `L` `V`.
    #[error("invalid FLV signature")]
    InvalidSignature,
    /// A required field would read past the end of the buffer.
    #[error("data too short: {0}")]
    DataTooShort(&'static str),
    /// The rewrite walk ended without seeing an `onMetaData` script tag.
    #[error("no onMetaData script tag found")]
    MetadataNotFound,
    /// An I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The replacement metadata could not be serialized.
    #[error("AMF0 write error: {0}")]
    Amf0Write(#[from] amf0::Amf0WriteError),
}
