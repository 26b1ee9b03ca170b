//! AAC helpers for audio tag decoding: the packet-type split and the top of
//! the AudioSpecificConfig.

use std::io;

use bytes_util::BitReader;

/// AAC packet type, the byte after the audio flags byte when the sound
/// format is AAC. Defined in the FLV specification, AACAUDIODATA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AacPacketType {
    /// An AudioSpecificConfig payload.
    SequenceHeader,
    /// Raw AAC frame data.
    Raw,
}

impl From<u8> for AacPacketType {
    fn from(value: u8) -> Self {
        // Zero is the sequence header; anything else carries raw frames.
        match value {
            0 => AacPacketType::SequenceHeader,
            _ => AacPacketType::Raw,
        }
    }
}

impl AacPacketType {
    /// Display name for the packet type.
    pub fn name(&self) -> &'static str {
        match self {
            AacPacketType::SequenceHeader => "AAC sequence header",
            AacPacketType::Raw => "AAC raw",
        }
    }
}

/// The leading fields of an AAC AudioSpecificConfig.
/// ISO/IEC 14496-3, 1.6.2.1 (Table 1.19).
///
/// Only the three bit fields the display layer needs are decoded; the
/// frequency index is kept raw because it indexes a display table rather
/// than being converted to Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpecificConfig {
    /// Audio object type, 5 bits.
    pub object_type: u8,
    /// Sampling frequency index, 4 bits.
    pub frequency_index: u8,
    /// Channel configuration, 4 bits.
    pub channel_configuration: u8,
}

impl AudioSpecificConfig {
    /// Parses the leading 13 bits of an AudioSpecificConfig.
    pub fn parse(data: &[u8]) -> io::Result<Self> {
        let mut bits = BitReader::new(data);

        let object_type = bits.read_bits(5)?;
        let frequency_index = bits.read_bits(4)?;
        let channel_configuration = bits.read_bits(4)?;

        Ok(Self {
            object_type,
            frequency_index,
            channel_configuration,
        })
    }
}
