//! Video tag detail decoding.
//!
//! Interprets the flags byte and, for AVC, the packet type and composition
//! time offset. Frame payloads themselves are never decoded.

use bytes::Bytes;

use crate::constants;

/// Video codec id for AVC in the video flags byte.
const VIDEO_CODEC_AVC: u8 = 7;

/// Decoded display details for a video tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoDetails {
    /// Frame type name; `"Empty"` for a zero-length payload.
    pub frame_type: String,
    /// Codec display name.
    pub codec: String,
    /// AVC packet type, present when the codec is AVC with enough payload.
    pub avc_packet_type: Option<String>,
    /// Composition time offset in milliseconds, 24-bit sign-extended.
    pub composition_time: Option<i32>,
}

impl VideoDetails {
    /// Decodes video details from a tag payload.
    pub fn demux(data: &Bytes) -> Self {
        if data.is_empty() {
            return VideoDetails {
                frame_type: "Empty".to_string(),
                ..VideoDetails::default()
            };
        }

        let flags = data[0];
        let frame_type_id = flags >> 4;
        let codec_id = flags & 0b1111;

        let mut avc_packet_type = None;
        let mut composition_time = None;

        if codec_id == VIDEO_CODEC_AVC && data.len() >= 5 {
            avc_packet_type = Some(constants::avc_packet_type_name(data[1]).to_string());
            composition_time = Some(sign_extend_24(
                ((data[2] as u32) << 16) | ((data[3] as u32) << 8) | data[4] as u32,
            ));
        }

        VideoDetails {
            frame_type: constants::video_frame_type_name(frame_type_id).into_owned(),
            codec: constants::video_codec_name(codec_id).into_owned(),
            avc_packet_type,
            composition_time,
        }
    }
}

/// Sign-extends a 24-bit value to 32 bits.
fn sign_extend_24(value: u32) -> i32 {
    if value & 0x80_0000 != 0 {
        (value | 0xFF00_0000) as i32
    } else {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_sentinel() {
        let details = VideoDetails::demux(&Bytes::new());
        assert_eq!(details.frame_type, "Empty");
        assert_eq!(details.codec, "");
        assert_eq!(details.avc_packet_type, None);
        assert_eq!(details.composition_time, None);
    }

    #[test]
    fn test_h263_key_frame() {
        let details = VideoDetails::demux(&Bytes::from_static(&[0x12, 0x00]));
        assert_eq!(details.frame_type, "Key frame (for AVC, a seekable frame)");
        assert_eq!(details.codec, "Sorenson H.263");
        assert_eq!(details.avc_packet_type, None);
        assert_eq!(details.composition_time, None);
    }

    #[test]
    fn test_avc_nalu_with_composition_time() {
        let details = VideoDetails::demux(&Bytes::from_static(&[0x27, 0x01, 0x00, 0x12, 0x34]));
        assert_eq!(
            details.frame_type,
            "Inter frame (for AVC, a non-seekable frame)"
        );
        assert_eq!(details.codec, "AVC (H.264)");
        assert_eq!(details.avc_packet_type.as_deref(), Some("AVC NALU"));
        assert_eq!(details.composition_time, Some(0x1234));
    }

    #[test]
    fn test_avc_negative_composition_time() {
        // 0xFFFFFF sign-extends to -1.
        let details = VideoDetails::demux(&Bytes::from_static(&[0x17, 0x01, 0xFF, 0xFF, 0xFF]));
        assert_eq!(details.composition_time, Some(-1));

        // 0x800000 is the most negative 24-bit value.
        let details = VideoDetails::demux(&Bytes::from_static(&[0x17, 0x01, 0x80, 0x00, 0x00]));
        assert_eq!(details.composition_time, Some(-8_388_608));
    }

    #[test]
    fn test_avc_payload_too_short_for_packet_fields() {
        let details = VideoDetails::demux(&Bytes::from_static(&[0x17, 0x00, 0x00]));
        assert_eq!(details.codec, "AVC (H.264)");
        assert_eq!(details.avc_packet_type, None);
        assert_eq!(details.composition_time, None);
    }

    #[test]
    fn test_unknown_enums() {
        let details = VideoDetails::demux(&Bytes::from_static(&[0x6F]));
        assert_eq!(details.frame_type, "Unknown (6)");
        assert_eq!(details.codec, "Unknown (15)");
    }
}
