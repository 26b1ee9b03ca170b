//! Script tag detail decoding.
//!
//! A script tag payload is two AMF0 values: a name (conventionally
//! `onMetaData`) and a value (conventionally an ECMA array of stream
//! parameters). A payload that cannot be decoded collapses to the
//! `"Parse Error"` sentinel instead of failing the tag walk.

use amf0::{Amf0Decoder, Amf0ReadError, Amf0Value};
use bytes::Bytes;

/// Name carried by the sentinel record for undecodable payloads.
pub const PARSE_ERROR: &str = "Parse Error";

/// Decoded details for a script tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptDetails {
    /// The script name, coerced to a string whatever its AMF type.
    pub name: String,
    /// The script value, retained as decoded.
    pub value: Amf0Value,
}

impl ScriptDetails {
    /// Decodes the two leading AMF0 values from a tag payload.
    pub fn demux(data: &Bytes) -> Self {
        let mut decoder = Amf0Decoder::new(data);

        let name = match decoder.decode() {
            Ok(value) => value.to_string(),
            Err(err) => return Self::parse_error(err),
        };

        let value = match decoder.decode() {
            Ok(value) => value,
            Err(err) => return Self::parse_error(err),
        };

        ScriptDetails { name, value }
    }

    fn parse_error(err: Amf0ReadError) -> Self {
        ScriptDetails {
            name: PARSE_ERROR.to_string(),
            value: Amf0Value::String(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use amf0::Amf0Encoder;

    use super::*;

    #[test]
    fn test_demux_on_metadata() {
        let metadata = vec![("framerate".to_string(), Amf0Value::Number(30.0))];

        let mut payload = Vec::new();
        Amf0Encoder::encode_script_data(&mut payload, "onMetaData", &metadata).unwrap();

        let details = ScriptDetails::demux(&Bytes::from(payload));
        assert_eq!(details.name, "onMetaData");
        assert_eq!(details.value, Amf0Value::EcmaArray(metadata));
    }

    #[test]
    fn test_demux_unsupported_name_is_coerced() {
        // Null marker as the name, then a boolean value.
        let details = ScriptDetails::demux(&Bytes::from_static(&[0x05, 0x01, 0x01]));
        assert_eq!(details.name, "Unsupported AMF Type: 5");
        assert_eq!(details.value, Amf0Value::Boolean(true));
    }

    #[test]
    fn test_demux_truncated_payload_is_a_parse_error() {
        // String marker promising more bytes than exist.
        let details = ScriptDetails::demux(&Bytes::from_static(&[0x02, 0x00, 0x40]));
        assert_eq!(details.name, PARSE_ERROR);
        assert!(matches!(details.value, Amf0Value::String(_)));
    }

    #[test]
    fn test_demux_missing_value_is_a_parse_error() {
        let mut payload = Vec::new();
        Amf0Encoder::encode_string(&mut payload, "onMetaData").unwrap();

        let details = ScriptDetails::demux(&Bytes::from(payload));
        assert_eq!(details.name, PARSE_ERROR);
    }
}
