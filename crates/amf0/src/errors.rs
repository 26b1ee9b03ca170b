use std::io;

/// Errors that can occur when decoding AMF0 data.
///
/// Unknown markers are not an error at this layer; they decode to
/// [`crate::Amf0Value::Unsupported`]. The only fatal condition is running
/// out of bytes mid-value.
#[derive(Debug, thiserror::Error)]
pub enum Amf0ReadError {
    /// The buffer ended before the value was complete.
    #[error("insufficient data: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur when encoding AMF0 data.
#[derive(Debug, thiserror::Error)]
pub enum Amf0WriteError {
    /// A string or key exceeded the 16-bit length prefix.
    #[error("string too long for amf0 encoding ({0} bytes)")]
    StringTooLong(usize),
    /// An IO error occurred on the underlying writer.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// A value kind this codec does not serialize.
    #[error("unsupported amf0 value (marker {0})")]
    UnsupportedType(u8),
}
