use super::*;

/// Shortest decimal text that parses back to the same `f64`.
///
/// Not order preserving: `"10"` sorts before `"9"` and negative values sort
/// in reverse. Range queries over float attributes are unsupported.
pub struct DecimalFloat;

impl TextCodec for DecimalFloat {
    type Borrowed<'a> = f64;
    type Decoded<'a> = f64;

    #[inline]
    fn encode_into(&self, dst: &mut String, v: f64) -> Result<(), EncodeError> {
        dst.push_str(&v.to_string());
        Ok(())
    }

    #[inline]
    fn decode<'a>(&self, src: &'a str) -> Result<f64, DecodeError> {
        src.parse::<f64>().map_err(|_| DecodeError::InvalidFloat)
    }
}
