//! Audio tag detail decoding.
//!
//! Only the first bytes of the payload are interpreted; sample data is never
//! touched. The sample rate and channel strings come from a layered lookup:
//! values extracted from an AAC sequence header win over the global metadata
//! (`audiosamplerate` / `stereo`), which wins over the flag-byte enums.

use amf0::Amf0Object;
use bytes::Bytes;

use crate::aac::{AacPacketType, AudioSpecificConfig};
use crate::constants;

/// Sound format id for AAC in the audio flags byte.
const SOUND_FORMAT_AAC: u8 = 10;

/// Decoded display details for an audio tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioDetails {
    /// Sound format name; `"Empty"` for a zero-length payload.
    pub format: String,
    /// Sample rate display string.
    pub sample_rate: String,
    /// Sample size display string.
    pub sample_size: String,
    /// Channel display string.
    pub channels: String,
    /// AAC packet type, present when the format is AAC with a packet-type
    /// byte.
    pub aac_packet_type: Option<String>,
    /// AAC audio object type, present when a sequence header was decoded.
    pub aac_object_type: Option<String>,
}

impl AudioDetails {
    /// Decodes audio details from a tag payload, consulting `metadata` for
    /// the fallback values.
    pub fn demux(data: &Bytes, metadata: &Amf0Object) -> Self {
        if data.is_empty() {
            return AudioDetails {
                format: "Empty".to_string(),
                ..AudioDetails::default()
            };
        }

        let flags = data[0];
        let format_id = flags >> 4;
        let rate_id = (flags >> 2) & 0b11;
        let size_id = (flags >> 1) & 0b1;
        let type_id = flags & 0b1;

        let mut sample_rate = metadata_sample_rate(metadata)
            .unwrap_or_else(|| constants::sound_rate_name(rate_id).to_string());
        let mut channels = metadata_channels(metadata)
            .unwrap_or_else(|| constants::sound_type_name(type_id).to_string());

        let mut aac_packet_type = None;
        let mut aac_object_type = None;

        if format_id == SOUND_FORMAT_AAC && data.len() >= 2 {
            let packet_type = AacPacketType::from(data[1]);
            aac_packet_type = Some(packet_type.name().to_string());

            if packet_type == AacPacketType::SequenceHeader && data.len() >= 4 {
                if let Ok(config) = AudioSpecificConfig::parse(&data[2..]) {
                    sample_rate =
                        constants::aac_sampling_frequency_name(config.frequency_index).to_string();
                    channels = constants::aac_channel_configuration_name(
                        config.channel_configuration,
                    )
                    .to_string();
                    aac_object_type =
                        Some(constants::aac_object_type_name(config.object_type).to_string());
                }
            }
        }

        AudioDetails {
            format: constants::sound_format_name(format_id).into_owned(),
            sample_rate,
            sample_size: constants::sound_size_name(size_id).to_string(),
            channels,
            aac_packet_type,
            aac_object_type,
        }
    }
}

fn metadata_sample_rate(metadata: &Amf0Object) -> Option<String> {
    metadata
        .iter()
        .find(|(key, _)| key == "audiosamplerate")
        .and_then(|(_, value)| value.as_number())
        .map(|rate| format!("{} Hz", rate as i64))
}

fn metadata_channels(metadata: &Amf0Object) -> Option<String> {
    metadata
        .iter()
        .find(|(key, _)| key == "stereo")
        .and_then(|(_, value)| value.as_boolean())
        .map(|stereo| if stereo { "Stereo" } else { "Mono" }.to_string())
}

#[cfg(test)]
mod tests {
    use amf0::Amf0Value;

    use super::*;

    fn no_metadata() -> Amf0Object {
        Vec::new()
    }

    #[test]
    fn test_empty_payload_sentinel() {
        let details = AudioDetails::demux(&Bytes::new(), &no_metadata());
        assert_eq!(details.format, "Empty");
        assert_eq!(details.sample_rate, "");
        assert_eq!(details.sample_size, "");
        assert_eq!(details.channels, "");
        assert_eq!(details.aac_packet_type, None);
        assert_eq!(details.aac_object_type, None);
    }

    #[test]
    fn test_mp3_from_flag_byte() {
        // Format 2 (MP3), rate 3 (44 kHz), size 1 (16-bit), stereo.
        let details = AudioDetails::demux(&Bytes::from_static(&[0x2F, 0x00]), &no_metadata());
        assert_eq!(details.format, "MP3");
        assert_eq!(details.sample_rate, "44 kHz");
        assert_eq!(details.sample_size, "16-bit samples");
        assert_eq!(details.channels, "Stereo");
        assert_eq!(details.aac_packet_type, None);
    }

    #[test]
    fn test_metadata_fallback_beats_flag_byte() {
        let metadata = vec![
            ("audiosamplerate".to_string(), Amf0Value::Number(22050.0)),
            ("stereo".to_string(), Amf0Value::Boolean(false)),
        ];

        let details = AudioDetails::demux(&Bytes::from_static(&[0x2F, 0x00]), &metadata);
        assert_eq!(details.sample_rate, "22050 Hz");
        assert_eq!(details.channels, "Mono");
    }

    #[test]
    fn test_aac_sequence_header_overrides_everything() {
        let metadata = vec![
            ("audiosamplerate".to_string(), Amf0Value::Number(22050.0)),
            ("stereo".to_string(), Amf0Value::Boolean(false)),
        ];

        // AAC, sequence header, LC 44100 Hz stereo config.
        let payload = Bytes::from_static(&[0xAF, 0x00, 0x12, 0x10]);
        let details = AudioDetails::demux(&payload, &metadata);

        assert_eq!(details.format, "AAC");
        assert_eq!(details.sample_rate, "44100 Hz");
        assert_eq!(details.channels, "2 channels: Left, Right");
        assert_eq!(
            details.aac_packet_type.as_deref(),
            Some("AAC sequence header")
        );
        assert_eq!(
            details.aac_object_type.as_deref(),
            Some("AAC LC (Low Complexity)")
        );
    }

    #[test]
    fn test_aac_raw_keeps_fallback_values() {
        let payload = Bytes::from_static(&[0xAF, 0x01, 0x12, 0x10]);
        let details = AudioDetails::demux(&payload, &no_metadata());

        assert_eq!(details.aac_packet_type.as_deref(), Some("AAC raw"));
        assert_eq!(details.aac_object_type, None);
        // Flag-byte enums, not the config bits.
        assert_eq!(details.sample_rate, "44 kHz");
        assert_eq!(details.channels, "Stereo");
    }

    #[test]
    fn test_aac_sequence_header_too_short_for_config() {
        // Packet-type byte present but no config bytes.
        let payload = Bytes::from_static(&[0xAF, 0x00]);
        let details = AudioDetails::demux(&payload, &no_metadata());

        assert_eq!(
            details.aac_packet_type.as_deref(),
            Some("AAC sequence header")
        );
        assert_eq!(details.aac_object_type, None);
        assert_eq!(details.sample_rate, "44 kHz");
    }

    #[test]
    fn test_unknown_format_id() {
        let details = AudioDetails::demux(&Bytes::from_static(&[0xC0]), &no_metadata());
        assert_eq!(details.format, "Unknown (12)");
    }
}
