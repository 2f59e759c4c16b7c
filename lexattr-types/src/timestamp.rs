//! Timestamp normalizer: any absolute point in time <-> canonical UTC text.
//!
//! The canonical form is ISO-8601 extended format with an explicit zero
//! offset and one-second resolution:
//!
//! ```text
//! 2012-11-25T13:01:11+00:00
//! ```
//!
//! Every canonical string has the same width for years 0000..=9999, so
//! byte-wise comparison of two encodings matches chronological order.
//! Sub-second precision is truncated on encode.

use std::time::SystemTime;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::{DecodeError, EncodeError};

const CANONICAL_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// Anything that can be pinned to an absolute instant.
///
/// Offset-less values (`PrimitiveDateTime`, `Date`) are taken to be UTC.
pub trait AsUtcInstant {
    /// `None` when the value has no representable absolute instant.
    fn as_utc_instant(&self) -> Option<OffsetDateTime>;
}

impl AsUtcInstant for OffsetDateTime {
    #[inline]
    fn as_utc_instant(&self) -> Option<OffsetDateTime> {
        self.checked_to_offset(UtcOffset::UTC)
    }
}

impl AsUtcInstant for PrimitiveDateTime {
    #[inline]
    fn as_utc_instant(&self) -> Option<OffsetDateTime> {
        Some(self.assume_utc())
    }
}

impl AsUtcInstant for Date {
    #[inline]
    fn as_utc_instant(&self) -> Option<OffsetDateTime> {
        Some(self.midnight().assume_utc())
    }
}

impl AsUtcInstant for SystemTime {
    fn as_utc_instant(&self) -> Option<OffsetDateTime> {
        // Floor to whole seconds on both sides of the epoch.
        let secs = match self.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_secs()).ok()?,
            Err(before) => {
                let d = before.duration();
                let whole = i64::try_from(d.as_secs()).ok()?;
                if d.subsec_nanos() > 0 {
                    whole.checked_neg()?.checked_sub(1)?
                } else {
                    whole.checked_neg()?
                }
            }
        };
        OffsetDateTime::from_unix_timestamp(secs).ok()
    }
}

impl<T: AsUtcInstant + ?Sized> AsUtcInstant for &T {
    #[inline]
    fn as_utc_instant(&self) -> Option<OffsetDateTime> {
        (**self).as_utc_instant()
    }
}

/// Render `value` in canonical form, or `None` if it has no absolute instant.
pub fn encode_timestamp<T: AsUtcInstant + ?Sized>(value: &T) -> Option<String> {
    let instant = value.as_utc_instant()?;
    let mut out = String::with_capacity(25);
    write_timestamp(&mut out, instant).ok()?;
    Some(out)
}

/// Parse an ISO-8601 / RFC 3339 timestamp with an explicit offset.
///
/// Non-zero offsets, fractional seconds, basic format and hour-only offsets
/// are accepted. The result is the same instant expressed in UTC, or in the
/// source offset when its UTC date falls outside the supported year range.
pub fn decode_timestamp(text: &str) -> Result<OffsetDateTime, DecodeError> {
    let parsed = OffsetDateTime::parse(text, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(text, &Iso8601::DEFAULT))
        .map_err(|_| DecodeError::InvalidTimestamp)?;
    Ok(parsed.checked_to_offset(UtcOffset::UTC).unwrap_or(parsed))
}

/// Append the canonical form of `instant` to `dst`.
pub(crate) fn write_timestamp(
    dst: &mut String,
    instant: OffsetDateTime,
) -> Result<(), EncodeError> {
    let utc = instant
        .checked_to_offset(UtcOffset::UTC)
        .ok_or(EncodeError::InvalidTimestamp)?;
    if !(0..=9999).contains(&utc.year()) {
        return Err(EncodeError::InvalidTimestamp);
    }
    let text = utc
        .format(CANONICAL_FORMAT)
        .map_err(|_| EncodeError::InvalidTimestamp)?;
    dst.push_str(&text);
    Ok(())
}
