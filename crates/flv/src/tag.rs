//! The FLV tag record and its type/detail enums.

use std::fmt;

use crate::audio::AudioDetails;
use crate::script::ScriptDetails;
use crate::video::VideoDetails;

/// FLV tag type byte.
///
/// The three defined types are Audio (8), Video (9) and ScriptData (18);
/// anything else (including encrypted-tag type values) is carried through as
/// [`FlvTagType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlvTagType {
    Audio,
    Video,
    ScriptData,
    Unknown(u8),
}

impl From<u8> for FlvTagType {
    fn from(value: u8) -> Self {
        match value {
            8 => FlvTagType::Audio,
            9 => FlvTagType::Video,
            18 => FlvTagType::ScriptData,
            other => FlvTagType::Unknown(other),
        }
    }
}

impl From<FlvTagType> for u8 {
    fn from(value: FlvTagType) -> Self {
        match value {
            FlvTagType::Audio => 8,
            FlvTagType::Video => 9,
            FlvTagType::ScriptData => 18,
            FlvTagType::Unknown(other) => other,
        }
    }
}

impl fmt::Display for FlvTagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlvTagType::Audio => write!(f, "Audio"),
            FlvTagType::Video => write!(f, "Video"),
            FlvTagType::ScriptData => write!(f, "Script"),
            FlvTagType::Unknown(value) => write!(f, "Unknown ({value})"),
        }
    }
}

/// Decoded per-type details of a tag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlvTagDetails {
    Audio(AudioDetails),
    Video(VideoDetails),
    Script(ScriptDetails),
    /// A tag type the engine does not interpret; the payload is skipped.
    Unknown,
}

impl fmt::Display for FlvTagDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlvTagDetails::Audio(details) => {
                write!(f, "{}", details.format)?;
                if !details.sample_rate.is_empty() {
                    write!(f, ", {}", details.sample_rate)?;
                }
                if !details.channels.is_empty() {
                    write!(f, ", {}", details.channels)?;
                }
                if let Some(packet_type) = &details.aac_packet_type {
                    write!(f, ", {packet_type}")?;
                }
                Ok(())
            }
            FlvTagDetails::Video(details) => {
                write!(f, "{}", details.frame_type)?;
                if !details.codec.is_empty() {
                    write!(f, ", {}", details.codec)?;
                }
                if let Some(packet_type) = &details.avc_packet_type {
                    write!(f, ", {packet_type}")?;
                }
                if let Some(cts) = details.composition_time {
                    write!(f, ", cts {cts}ms")?;
                }
                Ok(())
            }
            FlvTagDetails::Script(details) => write!(f, "{}", details.name),
            FlvTagDetails::Unknown => write!(f, "-"),
        }
    }
}

/// One tag of the FLV stream.
///
/// `offset` is the byte index of the 11-byte tag header in the source
/// buffer; offsets are strictly increasing across a parse. `analysis` starts
/// empty and is filled in by the analyzer pass, and only ever on video tags.
#[derive(Debug, Clone, PartialEq)]
pub struct FlvTag {
    /// Byte index in the source where this tag begins.
    pub offset: u64,
    /// Tag type from the first header byte.
    pub tag_type: FlvTagType,
    /// Declared payload size from the 24-bit header field.
    pub data_size: u32,
    /// Timestamp in milliseconds: 24-bit low part plus the extended byte as
    /// bits 31..24.
    pub timestamp_ms: u32,
    /// Stream id, always 0 in conformant files.
    pub stream_id: u32,
    /// Decoded per-type details.
    pub details: FlvTagDetails,
    /// Analyzer annotation, set at most once.
    pub analysis: Option<String>,
}

impl FlvTag {
    /// True for video tags.
    pub fn is_video(&self) -> bool {
        self.tag_type == FlvTagType::Video
    }

    /// The script details, if this is a script tag.
    pub fn script_details(&self) -> Option<&ScriptDetails> {
        match &self.details {
            FlvTagDetails::Script(details) => Some(details),
            _ => None,
        }
    }
}
