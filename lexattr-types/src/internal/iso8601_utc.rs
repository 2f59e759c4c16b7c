use time::OffsetDateTime;

use super::*;
use crate::timestamp::{decode_timestamp, write_timestamp};

/// Canonical UTC timestamps; the fixed width keeps chronological order.
pub struct Iso8601Utc;

impl TextCodec for Iso8601Utc {
    type Borrowed<'a> = OffsetDateTime;
    type Decoded<'a> = OffsetDateTime;

    #[inline]
    fn encode_into(&self, dst: &mut String, v: OffsetDateTime) -> Result<(), EncodeError> {
        write_timestamp(dst, v)
    }

    #[inline]
    fn decode<'a>(&self, src: &'a str) -> Result<OffsetDateTime, DecodeError> {
        decode_timestamp(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn iso8601_roundtrip_and_order() {
        let earlier = datetime!(2012-01-20 00:00:00 UTC);
        let later = datetime!(2012-12-05 00:00:00 +1);

        let a = Iso8601Utc.encode_to_string(earlier).unwrap();
        let b = Iso8601Utc.encode_to_string(later).unwrap();
        assert!(a < b);

        assert_eq!(Iso8601Utc.decode(&a).unwrap(), earlier);
        assert_eq!(Iso8601Utc.decode(&b).unwrap(), later);
    }

    #[test]
    fn iso8601_rejects_out_of_range_years() {
        let far = datetime!(9999-12-31 23:00:00 -5);
        assert_eq!(
            Iso8601Utc.encode_to_string(far),
            Err(EncodeError::InvalidTimestamp)
        );
    }
}
