use std::io::{Cursor, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};
use num_traits::FromPrimitive;

use crate::{Amf0Marker, Amf0Object, Amf0ReadError, Amf0Value};

/// An AMF0 decoder over a byte slice.
///
/// Reads one tagged value per [`Amf0Decoder::decode`] call. Markers outside
/// the script-data subset yield [`Amf0Value::Unsupported`] without consuming
/// any payload bytes, so a caller can still report what it found.
pub struct Amf0Decoder<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Amf0Decoder<'a> {
    /// Creates a decoder positioned at the start of `buf`.
    pub const fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
        }
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.cursor.get_ref().len() == self.cursor.position() as usize
    }

    /// Reads the next tagged value.
    pub fn decode(&mut self) -> Result<Amf0Value, Amf0ReadError> {
        let marker = self.cursor.read_u8()?;

        match Amf0Marker::from_u8(marker) {
            Some(Amf0Marker::Number) => Ok(Amf0Value::Number(self.read_number()?)),
            Some(Amf0Marker::Boolean) => Ok(Amf0Value::Boolean(self.read_boolean()?)),
            Some(Amf0Marker::String) => Ok(Amf0Value::String(self.read_string()?)),
            Some(Amf0Marker::EcmaArray) => Ok(Amf0Value::EcmaArray(self.read_ecma_array()?)),
            _ => Ok(Amf0Value::Unsupported(marker)),
        }
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Amf0ReadError> {
        let pos = self.cursor.position() as usize;
        if pos + len > self.cursor.get_ref().len() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "not enough bytes",
            )
            .into());
        }
        self.cursor.seek(SeekFrom::Current(len as i64))?;
        Ok(&self.cursor.get_ref()[pos..pos + len])
    }

    fn read_number(&mut self) -> Result<f64, Amf0ReadError> {
        Ok(self.cursor.read_f64::<BigEndian>()?)
    }

    fn read_boolean(&mut self) -> Result<bool, Amf0ReadError> {
        Ok(self.cursor.read_u8()? != 0)
    }

    /// A 16-bit length prefixed UTF-8 string. Invalid UTF-8 decodes as the
    /// empty string rather than failing the surrounding value.
    fn read_string(&mut self) -> Result<String, Amf0ReadError> {
        let len = self.cursor.read_u16::<BigEndian>()?;
        let bytes = self.read_bytes(len as usize)?;

        Ok(std::str::from_utf8(bytes)
            .map(str::to_owned)
            .unwrap_or_default())
    }

    /// An ECMA array. The declared count is authoritative here: exactly that
    /// many pairs are read, then the 3-byte object-end terminator is
    /// consumed without being validated.
    fn read_ecma_array(&mut self) -> Result<Amf0Object, Amf0ReadError> {
        let count = self.cursor.read_u32::<BigEndian>()?;

        let mut entries = Vec::new();
        for _ in 0..count {
            let key = self.read_string()?;
            let value = self.decode()?;
            entries.push((key, value));
        }

        self.cursor.read_u24::<BigEndian>()?;

        Ok(entries)
    }
}
