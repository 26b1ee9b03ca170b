use std::fmt;

use byteorder::{BigEndian, ReadBytesExt};
use bytes_util::{BytesCursor, BytesCursorExt};

use crate::error::FlvError;

/// Size of the fixed FLV file header.
pub const FLV_HEADER_SIZE: usize = 9;

/// The FLV file signature bytes.
pub const FLV_SIGNATURE: &[u8; 3] = b"FLV";

/// The 9-byte FLV file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlvHeader {
    /// Always `F` `L` `V`; parsing fails otherwise.
    pub signature: [u8; 3],
    /// Format version, usually 1.
    pub version: u8,
    /// Bit 2 of the flags byte.
    pub has_audio: bool,
    /// Bit 0 of the flags byte.
    pub has_video: bool,
    /// Declared header size. Normally 9, but larger values are legal and the
    /// extra bytes are preserved on rewrite.
    pub data_offset: u32,
}

impl FlvHeader {
    /// Parses the header, advancing the reader to its end.
    ///
    /// The signature is checked before the length bound so a wrong magic of
    /// any length reports [`FlvError::InvalidSignature`].
    pub fn parse(reader: &mut BytesCursor) -> Result<Self, FlvError> {
        let signature = reader
            .peek_bytes(3)
            .map_err(|_| FlvError::DataTooShort("FLV signature"))?;
        if &signature[..] != FLV_SIGNATURE {
            return Err(FlvError::InvalidSignature);
        }

        if reader.remaining_len() < FLV_HEADER_SIZE {
            return Err(FlvError::DataTooShort("FLV file header"));
        }

        let signature = [signature[0], signature[1], signature[2]];
        reader.seek_to(reader.position() as usize + 3);

        let version = reader.read_u8()?;
        let flags = reader.read_u8()?;
        let has_audio = flags & 0b0000_0100 != 0;
        let has_video = flags & 0b0000_0001 != 0;

        let data_offset = reader.read_u32::<BigEndian>()?;

        Ok(FlvHeader {
            signature,
            version,
            has_audio,
            has_video,
            data_offset,
        })
    }
}

impl fmt::Display for FlvHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FLV version {}, audio: {}, video: {}, header size: {}",
            self.version, self.has_audio, self.has_video, self.data_offset
        )
    }
}
