//! The two rewrite paths: verbatim repair and metadata replacement.
//!
//! Both walk the tag stream the way the parser does and stop at the first
//! incomplete tag, so a broken recording comes out trimmed to its last
//! complete tag. Output is always a fresh buffer; the input is never
//! modified.

use amf0::{Amf0Encoder, Amf0Object};
use byteorder::{BigEndian, WriteBytesExt};
use bytes::Bytes;
use bytes_util::{BytesCursor, BytesCursorExt};
use tracing::debug;

use crate::error::FlvError;
use crate::header::{FlvHeader, FLV_HEADER_SIZE};
use crate::parser::{FLV_PREVIOUS_TAG_SIZE, FLV_TAG_HEADER_SIZE};
use crate::script::ScriptDetails;
use crate::tag::FlvTagType;
use crate::ON_METADATA;

/// Produces a byte-exact copy of the input containing the 13-byte prelude
/// and every structurally complete tag block.
///
/// Structurally intact inputs round-trip unchanged, which also makes the
/// operation idempotent. Fails with [`FlvError::DataTooShort`] when the
/// input cannot hold the 9-byte header plus the first back-pointer.
pub fn repair(data: &Bytes) -> Result<Bytes, FlvError> {
    const PRELUDE_SIZE: usize = FLV_HEADER_SIZE + FLV_PREVIOUS_TAG_SIZE;

    if data.len() < PRELUDE_SIZE {
        return Err(FlvError::DataTooShort("file header and first back-pointer"));
    }

    let mut out = Vec::with_capacity(data.len());
    out.extend_from_slice(&data[..PRELUDE_SIZE]);

    let mut reader = BytesCursor::new(data.clone());
    reader.seek_to(PRELUDE_SIZE);

    let mut copied = 0u32;
    while let Some(block) = next_tag_block(&mut reader) {
        out.extend_from_slice(&block);
        copied += 1;
    }

    debug!(
        tags = copied,
        dropped_bytes = data.len() - out.len(),
        "repaired FLV stream"
    );

    Ok(Bytes::from(out))
}

/// Re-emits the file with every `onMetaData` script tag replaced by
/// `metadata`, serialized as an AMF0 ECMA array. All other tags are copied
/// byte for byte, as are any declared header bytes beyond the fixed 9.
///
/// Fails with [`FlvError::MetadataNotFound`] when the walk ends without
/// having seen an `onMetaData` tag.
pub fn rewrite_metadata(data: &Bytes, metadata: &Amf0Object) -> Result<Bytes, FlvError> {
    let mut reader = BytesCursor::new(data.clone());
    let header = FlvHeader::parse(&mut reader)?;

    let mut out = Vec::with_capacity(data.len());
    out.extend_from_slice(&data[..FLV_HEADER_SIZE]);

    // A declared header size beyond 9 means extra bytes that belong to the
    // header; carry them through untouched.
    let declared = header.data_offset as usize;
    if declared > FLV_HEADER_SIZE {
        let extra = reader
            .extract_bytes(declared - FLV_HEADER_SIZE)
            .map_err(|_| FlvError::DataTooShort("extended file header"))?;
        out.extend_from_slice(&extra);
    }

    let previous_tag_size0 = reader
        .extract_bytes(FLV_PREVIOUS_TAG_SIZE)
        .map_err(|_| FlvError::DataTooShort("first back-pointer"))?;
    out.extend_from_slice(&previous_tag_size0);

    let mut replaced = false;

    while let Some(block) = next_tag_block(&mut reader) {
        let tag_type = block[0];
        let data_size = read_u24(&block[1..4]) as usize;

        if tag_type == u8::from(FlvTagType::ScriptData) {
            let payload = block.slice(FLV_TAG_HEADER_SIZE..FLV_TAG_HEADER_SIZE + data_size);
            let script = ScriptDetails::demux(&payload);

            if script.name == ON_METADATA {
                write_metadata_tag(&mut out, metadata)?;
                replaced = true;
                continue;
            }
        }

        out.extend_from_slice(&block);
    }

    if !replaced {
        return Err(FlvError::MetadataNotFound);
    }

    debug!(entries = metadata.len(), "rewrote onMetaData tag");

    Ok(Bytes::from(out))
}

/// Peeks the next complete tag block (header + payload + back-pointer) and
/// advances past it. Returns `None` once no complete tag remains.
fn next_tag_block(reader: &mut BytesCursor) -> Option<Bytes> {
    if reader.remaining_len() < FLV_TAG_HEADER_SIZE + FLV_PREVIOUS_TAG_SIZE {
        return None;
    }

    let head = reader.peek_bytes(FLV_TAG_HEADER_SIZE).ok()?;
    let data_size = read_u24(&head[1..4]) as usize;
    let total = FLV_TAG_HEADER_SIZE + data_size + FLV_PREVIOUS_TAG_SIZE;

    let block = reader.peek_bytes(total).ok()?;
    reader.seek_to(reader.position() as usize + total);
    Some(block)
}

/// Writes a freshly synthesized `onMetaData` script tag: type byte, 24-bit
/// size, the canonical timestamp-low / timestamp-extended / stream-id header
/// fields (all zero), the AMF0 payload, and the trailing back-pointer.
fn write_metadata_tag(out: &mut Vec<u8>, metadata: &Amf0Object) -> Result<(), FlvError> {
    let mut payload = Vec::new();
    Amf0Encoder::encode_script_data(&mut payload, ON_METADATA, metadata)?;

    out.write_u8(FlvTagType::ScriptData.into())?;
    out.write_u24::<BigEndian>(payload.len() as u32)?;
    out.write_u24::<BigEndian>(0)?; // timestamp low
    out.write_u8(0)?; // timestamp extended
    out.write_u24::<BigEndian>(0)?; // stream id
    out.extend_from_slice(&payload);
    out.write_u32::<BigEndian>(FLV_TAG_HEADER_SIZE as u32 + payload.len() as u32)?;

    Ok(())
}

fn read_u24(bytes: &[u8]) -> u32 {
    ((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | bytes[2] as u32
}
