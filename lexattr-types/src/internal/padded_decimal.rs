use std::fmt::Write;

use super::*;
use crate::IntegerEncoding;

/// Offset, zero-padded decimal integers.
///
/// `value + offset` is rendered in base 10 and left-padded with `'0'` to
/// `padding` digits; decode parses and subtracts `offset`. Inside the safe
/// range (`value + offset >= 0` and at most `padding` digits) lexicographic
/// order == numeric order.
///
/// Outside it the codec still round-trips but ordering is lost: wider values
/// produce longer strings, and negative shifted values keep their sign in
/// front of the zero padding (`-000000005`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedDecimal {
    encoding: IntegerEncoding,
}

impl PaddedDecimal {
    #[inline]
    pub const fn new(encoding: IntegerEncoding) -> Self {
        Self { encoding }
    }
}

impl TextCodec for PaddedDecimal {
    type Borrowed<'a> = i128;
    type Decoded<'a> = i128;

    #[inline]
    fn encode_into(&self, dst: &mut String, v: i128) -> Result<(), EncodeError> {
        let shifted = v
            .checked_add(self.encoding.offset)
            .ok_or(EncodeError::IntegerOverflow)?;
        let width = self.encoding.padding;
        // Writing into a String cannot fail.
        let _ = write!(dst, "{shifted:0width$}");
        Ok(())
    }

    #[inline]
    fn decode<'a>(&self, src: &'a str) -> Result<i128, DecodeError> {
        let shifted = src
            .parse::<i128>()
            .map_err(|_| DecodeError::InvalidInteger)?;
        shifted
            .checked_sub(self.encoding.offset)
            .ok_or(DecodeError::IntegerOutOfRange)
    }
}
