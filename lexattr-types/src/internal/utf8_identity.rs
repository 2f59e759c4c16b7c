use super::*;

/// Strings are stored as-is; decoding borrows the source.
pub struct Utf8Identity;

impl TextCodec for Utf8Identity {
    type Borrowed<'a> = &'a str;
    type Decoded<'a> = &'a str;

    #[inline]
    fn encode_into(&self, dst: &mut String, v: &str) -> Result<(), EncodeError> {
        dst.push_str(v);
        Ok(())
    }

    #[inline]
    fn decode<'a>(&self, src: &'a str) -> Result<&'a str, DecodeError> {
        Ok(src)
    }
}
