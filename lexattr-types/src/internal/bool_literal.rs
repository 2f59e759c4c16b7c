use super::*;

/// Codec for bool. `false` -> `"false"`, `true` -> `"true"`.
pub struct BoolLiteral;

impl BoolLiteral {
    #[inline]
    pub const fn literal(v: bool) -> &'static str {
        if v { "true" } else { "false" }
    }
}

impl TextCodec for BoolLiteral {
    type Borrowed<'a> = bool;
    type Decoded<'a> = bool;

    #[inline]
    fn encode_into(&self, dst: &mut String, v: bool) -> Result<(), EncodeError> {
        dst.push_str(Self::literal(v));
        Ok(())
    }

    #[inline]
    fn decode<'a>(&self, src: &'a str) -> Result<bool, DecodeError> {
        match src {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(DecodeError::InvalidBoolean),
        }
    }
}
