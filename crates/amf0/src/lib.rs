//! AMF0 encoder and decoder for the script-data subset used by FLV files.
//!
//! Only the value kinds that occur inside `onMetaData` script tags are
//! modeled: numbers, booleans, short strings, and ECMA arrays. Every other
//! marker decodes to a diagnostic placeholder and is never emitted.
//!
//! # Examples
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use amf0::{Amf0Decoder, Amf0Encoder, Amf0Value};
//!
//! let metadata = vec![("framerate".to_string(), Amf0Value::Number(30.0))];
//!
//! let mut payload = Vec::new();
//! Amf0Encoder::encode_script_data(&mut payload, "onMetaData", &metadata)?;
//!
//! let mut decoder = Amf0Decoder::new(&payload);
//! assert_eq!(decoder.decode()?, Amf0Value::String("onMetaData".into()));
//! assert_eq!(decoder.decode()?, Amf0Value::EcmaArray(metadata));
//! # Ok(())
//! # }
//! ```

mod decode;
mod define;
mod encode;
mod errors;

pub use crate::decode::Amf0Decoder;
pub use crate::define::{Amf0Marker, Amf0Object, Amf0Value};
pub use crate::encode::Amf0Encoder;
pub use crate::errors::{Amf0ReadError, Amf0WriteError};
