pub use crate::{DecodeError, EncodeError};

/// A text codec for a single logical type.
///
/// Codecs take `&self` so parameterised encodings (integer offset and
/// padding) share the same API as the unit codecs.
pub trait TextCodec {
    type Borrowed<'a>;
    type Decoded<'a>;

    fn encode_into(&self, dst: &mut String, v: Self::Borrowed<'_>) -> Result<(), EncodeError>;

    fn decode<'a>(&self, src: &'a str) -> Result<Self::Decoded<'a>, DecodeError>;

    #[inline]
    fn encode_to_string(&self, v: Self::Borrowed<'_>) -> Result<String, EncodeError> {
        let mut out = String::new();
        self.encode_into(&mut out, v)?;
        Ok(out)
    }
}
