use std::fmt;

use num_derive::FromPrimitive;

/// AMF0 marker types.
/// Defined in amf0_spec_121207.pdf section 2.1
#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive)]
#[repr(u8)]
pub enum Amf0Marker {
    /// number-marker
    Number = 0x00,
    /// boolean-marker
    Boolean = 0x01,
    /// string-marker
    String = 0x02,
    /// object-marker
    Object = 0x03,
    /// movieclip-marker, reserved
    MovieClip = 0x04,
    /// null-marker
    Null = 0x05,
    /// undefined-marker
    Undefined = 0x06,
    /// reference-marker
    Reference = 0x07,
    /// ecma-array-marker
    EcmaArray = 0x08,
    /// object-end-marker
    ObjectEnd = 0x09,
    /// strict-array-marker
    StrictArray = 0x0a,
    /// date-marker
    Date = 0x0b,
    /// long-string-marker
    LongString = 0x0c,
    /// unsupported-marker
    Unsupported = 0x0d,
    /// recordset-marker, reserved
    Recordset = 0x0e,
    /// xml-document-marker
    XmlDocument = 0x0f,
    /// typed-object-marker
    TypedObject = 0x10,
    /// avmplus-object-marker (AMF3 escape)
    AvmPlusObject = 0x11,
}

/// An ordered key/value map. Decode order is preserved; it carries no
/// semantic meaning.
pub type Amf0Object = Vec<(String, Amf0Value)>;

/// An owned AMF0 value tree.
///
/// Values are fully owned so a decoded metadata map outlives the buffer it
/// was read from.
#[derive(Debug, Clone, PartialEq)]
pub enum Amf0Value {
    /// Number type, an 8-byte big-endian IEEE-754 double.
    Number(f64),
    /// Boolean type, one byte, nonzero is true.
    Boolean(bool),
    /// String type, 16-bit length prefixed UTF-8.
    String(String),
    /// ECMA array type, an ordered key/value map.
    EcmaArray(Amf0Object),
    /// Placeholder for any marker this codec does not model. Carries the
    /// marker byte for diagnostics; never re-encoded.
    Unsupported(u8),
}

impl Amf0Value {
    /// The number payload, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this value is a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The map payload, if this value is an ECMA array.
    pub fn as_object(&self) -> Option<&Amf0Object> {
        match self {
            Self::EcmaArray(entries) => Some(entries),
            _ => None,
        }
    }

    /// Consumes the value, returning the map payload of an ECMA array.
    pub fn into_object(self) -> Option<Amf0Object> {
        match self {
            Self::EcmaArray(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Display for Amf0Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::EcmaArray(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Unsupported(marker) => write!(f, "Unsupported AMF Type: {marker}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::*;

    #[test]
    fn test_marker_from_primitive() {
        let cases = [
            (Amf0Marker::Number, 0x00),
            (Amf0Marker::Boolean, 0x01),
            (Amf0Marker::String, 0x02),
            (Amf0Marker::Object, 0x03),
            (Amf0Marker::Null, 0x05),
            (Amf0Marker::EcmaArray, 0x08),
            (Amf0Marker::ObjectEnd, 0x09),
            (Amf0Marker::StrictArray, 0x0a),
            (Amf0Marker::LongString, 0x0c),
            (Amf0Marker::AvmPlusObject, 0x11),
        ];

        for (marker, value) in cases {
            assert_eq!(marker as u8, value);
            assert_eq!(Amf0Marker::from_u8(value), Some(marker));
        }

        assert!(Amf0Marker::from_u8(0x12).is_none());
    }

    #[test]
    fn test_display() {
        let value = Amf0Value::EcmaArray(vec![
            ("duration".to_string(), Amf0Value::Number(12.5)),
            ("stereo".to_string(), Amf0Value::Boolean(true)),
            ("encoder".to_string(), Amf0Value::String("x264".to_string())),
        ]);
        assert_eq!(
            value.to_string(),
            "{duration: 12.5, stereo: true, encoder: x264}"
        );

        assert_eq!(
            Amf0Value::Unsupported(11).to_string(),
            "Unsupported AMF Type: 11"
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Amf0Value::Number(2.0).as_number(), Some(2.0));
        assert_eq!(Amf0Value::Boolean(false).as_boolean(), Some(false));
        assert_eq!(Amf0Value::Number(2.0).as_boolean(), None);

        let map = vec![("a".to_string(), Amf0Value::Number(1.0))];
        let value = Amf0Value::EcmaArray(map.clone());
        assert_eq!(value.as_object(), Some(&map));
        assert_eq!(value.into_object(), Some(map));
        assert_eq!(Amf0Value::String("x".into()).into_object(), None);
    }
}
