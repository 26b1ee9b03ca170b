//! Display-string lookups for the numeric enums carried in tag headers.
//!
//! All lookups are total: unrecognized values fall back to `"Unknown"`, or
//! `"Unknown (<n>)"` where the raw value helps diagnose an odd file.

use std::borrow::Cow;

/// Sound format, bits 7..4 of the first audio payload byte.
pub fn sound_format_name(id: u8) -> Cow<'static, str> {
    match id {
        0 => "Linear PCM, platform endian".into(),
        1 => "ADPCM".into(),
        2 => "MP3".into(),
        3 => "Linear PCM, little endian".into(),
        4 => "Nellymoser 16kHz mono".into(),
        5 => "Nellymoser 8kHz mono".into(),
        6 => "Nellymoser".into(),
        7 => "G.711 A-law logarithmic PCM".into(),
        8 => "G.711 mu-law logarithmic PCM".into(),
        9 => "reserved".into(),
        10 => "AAC".into(),
        11 => "Speex".into(),
        14 => "MP3 8-Khz".into(),
        15 => "Device-specific sound".into(),
        n => format!("Unknown ({n})").into(),
    }
}

/// Sound rate, bits 3..2 of the first audio payload byte.
pub fn sound_rate_name(id: u8) -> &'static str {
    match id {
        0 => "5.5 kHz",
        1 => "11 kHz",
        2 => "22 kHz",
        3 => "44 kHz",
        _ => "Unknown",
    }
}

/// Sound size, bit 1 of the first audio payload byte.
pub fn sound_size_name(id: u8) -> &'static str {
    match id {
        0 => "8-bit samples",
        1 => "16-bit samples",
        _ => "Unknown",
    }
}

/// Sound type, bit 0 of the first audio payload byte.
pub fn sound_type_name(id: u8) -> &'static str {
    match id {
        0 => "Mono",
        1 => "Stereo",
        _ => "Unknown",
    }
}

/// Video frame type, bits 7..4 of the first video payload byte.
pub fn video_frame_type_name(id: u8) -> Cow<'static, str> {
    match id {
        1 => "Key frame (for AVC, a seekable frame)".into(),
        2 => "Inter frame (for AVC, a non-seekable frame)".into(),
        3 => "Disposable inter frame (H.263 only)".into(),
        4 => "Generated key frame (reserved for server use only)".into(),
        5 => "Video info/command frame".into(),
        n => format!("Unknown ({n})").into(),
    }
}

/// Video codec id, bits 3..0 of the first video payload byte.
pub fn video_codec_name(id: u8) -> Cow<'static, str> {
    match id {
        2 => "Sorenson H.263".into(),
        3 => "Screen video".into(),
        4 => "On2 VP6".into(),
        5 => "On2 VP6 with alpha channel".into(),
        6 => "Screen video version 2".into(),
        7 => "AVC (H.264)".into(),
        n => format!("Unknown ({n})").into(),
    }
}

/// AVC packet type, the byte after the video flags byte when the codec is
/// AVC.
pub fn avc_packet_type_name(id: u8) -> &'static str {
    match id {
        0 => "AVC sequence header",
        1 => "AVC NALU",
        2 => "AVC end of sequence",
        _ => "Unknown",
    }
}

/// AAC audio object type from the AudioSpecificConfig.
pub fn aac_object_type_name(id: u8) -> &'static str {
    match id {
        1 => "AAC Main",
        2 => "AAC LC (Low Complexity)",
        3 => "AAC SSR (Scalable Sample Rate)",
        4 => "AAC LTP (Long Term Prediction)",
        _ => "Unknown",
    }
}

/// AAC sampling frequency index from the AudioSpecificConfig.
pub fn aac_sampling_frequency_name(index: u8) -> &'static str {
    match index {
        0 => "96000 Hz",
        1 => "88200 Hz",
        2 => "64000 Hz",
        3 => "48000 Hz",
        4 => "44100 Hz",
        5 => "32000 Hz",
        6 => "24000 Hz",
        7 => "22050 Hz",
        8 => "16000 Hz",
        9 => "12000 Hz",
        10 => "11025 Hz",
        11 => "8000 Hz",
        12 => "7350 Hz",
        _ => "Unknown",
    }
}

/// AAC channel configuration from the AudioSpecificConfig.
pub fn aac_channel_configuration_name(config: u8) -> &'static str {
    match config {
        1 => "1 channel: Center front",
        2 => "2 channels: Left, Right",
        3 => "3 channels: Center, Left, Right",
        4 => "4 channels: Center, Left, Right, Back",
        5 => "5 channels: Center, Left, Right, Back Left, Back Right",
        6 => "6 channels (5.1): Center, L, R, BL, BR, LFE",
        7 => "8 channels (7.1): C, L, R, BL, BR, SL, SR, LFE",
        _ => "Unknown",
    }
}
