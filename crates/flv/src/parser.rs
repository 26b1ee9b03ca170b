//! The two-pass tag walker.
//!
//! Pass 1 scans for the first `onMetaData` script tag so the audio detail
//! decoding in pass 2 can consult `audiosamplerate` and `stereo`. Pass 2
//! builds the tag sequence. Both passes treat any bounds miss as the end of
//! the stream: a partial trailing tag is dropped, never reported — broken
//! recordings are the common case this engine exists for.

use amf0::{Amf0Object, Amf0Value};
use byteorder::{BigEndian, ReadBytesExt};
use bytes::Bytes;
use bytes_util::{BytesCursor, BytesCursorExt};
use tracing::{debug, trace};

use crate::analyzer;
use crate::audio::AudioDetails;
use crate::error::FlvError;
use crate::file::FlvFile;
use crate::header::FlvHeader;
use crate::script::ScriptDetails;
use crate::tag::{FlvTag, FlvTagDetails, FlvTagType};
use crate::video::VideoDetails;
use crate::ON_METADATA;

/// Size of the per-tag header.
pub const FLV_TAG_HEADER_SIZE: usize = 11;

/// Size of the back-pointer after each tag (and before the first).
pub const FLV_PREVIOUS_TAG_SIZE: usize = 4;

/// Parser over a complete in-memory FLV buffer.
pub struct FlvParser;

impl FlvParser {
    /// Parses `data` into an [`FlvFile`], running the analyzer pass before
    /// returning.
    pub fn parse(data: Bytes, source: &str) -> Result<FlvFile, FlvError> {
        let mut reader = BytesCursor::new(data);

        let header = FlvHeader::parse(&mut reader)?;

        let metadata = Self::locate_metadata(&mut reader, &header);
        let tags = Self::walk_tags(&mut reader, &header, &metadata);

        debug!(
            source,
            tags = tags.len(),
            metadata_entries = metadata.len(),
            "parsed FLV stream"
        );

        let mut file = FlvFile {
            source: source.to_string(),
            header,
            metadata,
            tags,
        };

        analyzer::annotate_timestamp_gaps(&mut file);

        Ok(file)
    }

    /// First byte of the tag stream: past the declared header and the
    /// `PreviousTagSize0` field.
    fn body_start(header: &FlvHeader) -> usize {
        header.data_offset as usize + FLV_PREVIOUS_TAG_SIZE
    }

    /// Pass 1: find the first `onMetaData` script tag whose value is a map.
    /// Returns an empty map if the stream carries none.
    fn locate_metadata(reader: &mut BytesCursor, header: &FlvHeader) -> Amf0Object {
        reader.seek_to(Self::body_start(header));

        loop {
            if reader.remaining_len() < FLV_TAG_HEADER_SIZE {
                return Vec::new();
            }

            let Ok(head) = reader.peek_bytes(FLV_TAG_HEADER_SIZE) else {
                return Vec::new();
            };
            let tag_type = head[0];
            let data_size =
                ((head[1] as u32) << 16) | ((head[2] as u32) << 8) | head[3] as u32;

            reader.seek_to(reader.position() as usize + FLV_TAG_HEADER_SIZE);

            if reader.remaining_len() < data_size as usize + FLV_PREVIOUS_TAG_SIZE {
                return Vec::new();
            }

            if tag_type == u8::from(FlvTagType::ScriptData) {
                let Ok(payload) = reader.extract_bytes(data_size as usize) else {
                    return Vec::new();
                };

                let script = ScriptDetails::demux(&payload);
                if script.name == ON_METADATA {
                    if let Amf0Value::EcmaArray(entries) = script.value {
                        trace!(entries = entries.len(), "located onMetaData tag");
                        return entries;
                    }
                }

                reader.seek_to(reader.position() as usize + FLV_PREVIOUS_TAG_SIZE);
            } else {
                reader.seek_to(
                    reader.position() as usize + data_size as usize + FLV_PREVIOUS_TAG_SIZE,
                );
            }
        }
    }

    /// Pass 2: build the tag sequence, stopping at the first incomplete tag.
    fn walk_tags(
        reader: &mut BytesCursor,
        header: &FlvHeader,
        metadata: &Amf0Object,
    ) -> Vec<FlvTag> {
        reader.seek_to(Self::body_start(header));

        let mut tags = Vec::new();

        loop {
            if reader.remaining_len() < FLV_TAG_HEADER_SIZE + FLV_PREVIOUS_TAG_SIZE {
                break;
            }

            let offset = reader.position();

            let Ok(tag_type_byte) = reader.read_u8() else {
                break;
            };
            let Ok(data_size) = reader.read_u24::<BigEndian>() else {
                break;
            };
            // 24-bit low part, then the extended byte becomes bits 31..24.
            let Ok(timestamp_low) = reader.read_u24::<BigEndian>() else {
                break;
            };
            let Ok(timestamp_extended) = reader.read_u8() else {
                break;
            };
            let Ok(stream_id) = reader.read_u24::<BigEndian>() else {
                break;
            };

            if reader.remaining_len() < data_size as usize + FLV_PREVIOUS_TAG_SIZE {
                trace!(offset, "dropping truncated trailing tag");
                break;
            }

            let Ok(payload) = reader.extract_bytes(data_size as usize) else {
                break;
            };
            let Ok(_previous_tag_size) = reader.read_u32::<BigEndian>() else {
                break;
            };

            let tag_type = FlvTagType::from(tag_type_byte);
            let details = match tag_type {
                FlvTagType::Audio => {
                    FlvTagDetails::Audio(AudioDetails::demux(&payload, metadata))
                }
                FlvTagType::Video => FlvTagDetails::Video(VideoDetails::demux(&payload)),
                FlvTagType::ScriptData => {
                    FlvTagDetails::Script(ScriptDetails::demux(&payload))
                }
                FlvTagType::Unknown(_) => FlvTagDetails::Unknown,
            };

            tags.push(FlvTag {
                offset,
                tag_type,
                data_size,
                timestamp_ms: timestamp_low | ((timestamp_extended as u32) << 24),
                stream_id,
                details,
                analysis: None,
            });
        }

        tags
    }
}
