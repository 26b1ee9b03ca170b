//! Shared helpers for building FLV byte streams in tests.

use amf0::{Amf0Encoder, Amf0Object};
use byteorder::{BigEndian, WriteBytesExt};

/// A standard 9-byte header (version 1, declared size 9) followed by
/// `PreviousTagSize0`.
pub fn file_prelude(has_audio: bool, has_video: bool) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"FLV");
    buf.push(0x01);

    let mut flags = 0u8;
    if has_audio {
        flags |= 0x04;
    }
    if has_video {
        flags |= 0x01;
    }
    buf.push(flags);

    buf.write_u32::<BigEndian>(9).unwrap();
    buf.write_u32::<BigEndian>(0).unwrap();
    buf
}

/// Appends a complete tag block: 11-byte header, payload, back-pointer.
pub fn append_tag(buf: &mut Vec<u8>, tag_type: u8, timestamp_ms: u32, payload: &[u8]) {
    append_tag_raw_timestamp(
        buf,
        tag_type,
        timestamp_ms & 0x00FF_FFFF,
        (timestamp_ms >> 24) as u8,
        payload,
    );
}

/// Appends a tag with the timestamp fields given separately, for exercising
/// the extended byte.
pub fn append_tag_raw_timestamp(
    buf: &mut Vec<u8>,
    tag_type: u8,
    timestamp_low: u32,
    timestamp_extended: u8,
    payload: &[u8],
) {
    buf.push(tag_type);
    buf.write_u24::<BigEndian>(payload.len() as u32).unwrap();
    buf.write_u24::<BigEndian>(timestamp_low).unwrap();
    buf.push(timestamp_extended);
    buf.write_u24::<BigEndian>(0).unwrap(); // stream id
    buf.extend_from_slice(payload);
    buf.write_u32::<BigEndian>(11 + payload.len() as u32).unwrap();
}

/// Appends a script tag whose payload encodes `name` plus `metadata` as an
/// ECMA array.
pub fn append_script_tag(buf: &mut Vec<u8>, timestamp_ms: u32, name: &str, metadata: &Amf0Object) {
    let mut payload = Vec::new();
    Amf0Encoder::encode_script_data(&mut payload, name, metadata).unwrap();
    append_tag(buf, 18, timestamp_ms, &payload);
}

/// A minimal video payload: flags byte, plus AVC packet fields when the
/// codec is AVC.
pub fn video_payload(frame_type: u8, codec: u8) -> Vec<u8> {
    let flags = (frame_type << 4) | (codec & 0x0F);
    if codec == 7 {
        vec![flags, 0x01, 0x00, 0x00, 0x00]
    } else {
        vec![flags]
    }
}
