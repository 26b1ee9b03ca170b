use std::io;

use byteorder::{BigEndian, WriteBytesExt};

use crate::{Amf0Marker, Amf0Object, Amf0Value, Amf0WriteError};

/// AMF0 encoder for the script-data subset.
///
/// Serializes numbers, booleans, short strings, and ECMA arrays. When
/// writing an ECMA array, entries holding a value the codec cannot represent
/// are skipped and the emitted count covers only what was written, so the
/// output container is always well formed.
pub struct Amf0Encoder;

impl Amf0Encoder {
    /// Encode a generic AMF0 value.
    pub fn encode(writer: &mut impl io::Write, value: &Amf0Value) -> Result<(), Amf0WriteError> {
        match value {
            Amf0Value::Number(val) => Self::encode_number(writer, *val),
            Amf0Value::Boolean(val) => Self::encode_boolean(writer, *val),
            Amf0Value::String(val) => Self::encode_string(writer, val),
            Amf0Value::EcmaArray(entries) => Self::encode_ecma_array(writer, entries),
            Amf0Value::Unsupported(marker) => Err(Amf0WriteError::UnsupportedType(*marker)),
        }
    }

    /// Encode an AMF0 number.
    pub fn encode_number(writer: &mut impl io::Write, value: f64) -> Result<(), Amf0WriteError> {
        writer.write_u8(Amf0Marker::Number as u8)?;
        writer.write_f64::<BigEndian>(value)?;
        Ok(())
    }

    /// Encode an AMF0 boolean.
    pub fn encode_boolean(writer: &mut impl io::Write, value: bool) -> Result<(), Amf0WriteError> {
        writer.write_u8(Amf0Marker::Boolean as u8)?;
        writer.write_u8(value as u8)?;
        Ok(())
    }

    /// Encode an AMF0 string.
    pub fn encode_string(writer: &mut impl io::Write, value: &str) -> Result<(), Amf0WriteError> {
        writer.write_u8(Amf0Marker::String as u8)?;
        Self::write_property_key(writer, value)?;
        Ok(())
    }

    /// Encode an ordered map as an AMF0 ECMA array.
    pub fn encode_ecma_array(
        writer: &mut impl io::Write,
        entries: &Amf0Object,
    ) -> Result<(), Amf0WriteError> {
        let encodable: Vec<_> = entries
            .iter()
            .filter(|(_, value)| !matches!(value, Amf0Value::Unsupported(_)))
            .collect();

        writer.write_u8(Amf0Marker::EcmaArray as u8)?;
        writer.write_u32::<BigEndian>(encodable.len() as u32)?;

        for (key, value) in encodable {
            Self::write_property_key(writer, key)?;
            Self::encode(writer, value)?;
        }

        Self::object_eof(writer)?;
        Ok(())
    }

    /// Encode a full script-data payload: the tag name as a bare string
    /// followed by the metadata map as an ECMA array.
    pub fn encode_script_data(
        writer: &mut impl io::Write,
        name: &str,
        metadata: &Amf0Object,
    ) -> Result<(), Amf0WriteError> {
        Self::encode_string(writer, name)?;
        Self::encode_ecma_array(writer, metadata)?;
        Ok(())
    }

    /// Write the 3-byte object-end terminator.
    pub fn object_eof(writer: &mut impl io::Write) -> Result<(), Amf0WriteError> {
        writer.write_u24::<BigEndian>(Amf0Marker::ObjectEnd as u32)?;
        Ok(())
    }

    /// A property key: 16-bit length then raw UTF-8 bytes, no marker.
    fn write_property_key(writer: &mut impl io::Write, key: &str) -> Result<(), Amf0WriteError> {
        if key.len() > u16::MAX as usize {
            return Err(Amf0WriteError::StringTooLong(key.len()));
        }

        writer.write_u16::<BigEndian>(key.len() as u16)?;
        writer.write_all(key.as_bytes())?;
        Ok(())
    }
}
