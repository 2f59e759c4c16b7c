//! Lexicographic attribute codecs.
//!
//! Key/value stores that only support string equality and string ranges can
//! still answer numeric and chronological range queries, as long as the
//! strings they hold sort the same way as the values they stand for. This
//! crate renders typed scalars into such strings and parses them back:
//!
//! | type      | text                                         | sorts |
//! |-----------|----------------------------------------------|-------|
//! | String    | identity                                     | yes   |
//! | Integer   | `value + offset`, zero-padded to `padding`   | yes*  |
//! | Float     | shortest round-trip decimal                  | no    |
//! | Boolean   | `"true"` / `"false"`                         | yes   |
//! | Timestamp | `YYYY-MM-DDTHH:MM:SS+00:00`                  | yes   |
//!
//! \* while `value + offset` is non-negative and fits in `padding` digits.

mod internal;
use crate::internal::{
    BoolLiteral, DecimalFloat, Iso8601Utc, PaddedDecimal, TextCodec, Utf8Identity,
};

pub mod errors;
pub use errors::*;

pub mod descriptor;
pub use descriptor::*;

pub mod timestamp;
pub use timestamp::{AsUtcInstant, decode_timestamp, encode_timestamp};

pub use time::OffsetDateTime;

// --- Public-Facing Metadata Enums ---

/// A tag naming the declared type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
}

/// A typed scalar, either about to be encoded or freshly decoded.
///
/// Strings borrow, so decoding an attribute does not allocate until a record
/// takes ownership of the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue<'a> {
    Str(&'a str),
    Integer(i128),
    Float(f64),
    Bool(bool),
    Timestamp(OffsetDateTime),
}

impl ScalarValue<'_> {
    #[inline]
    pub fn field_type(&self) -> FieldType {
        match self {
            ScalarValue::Str(_) => FieldType::String,
            ScalarValue::Integer(_) => FieldType::Integer,
            ScalarValue::Float(_) => FieldType::Float,
            ScalarValue::Bool(_) => FieldType::Boolean,
            ScalarValue::Timestamp(_) => FieldType::Timestamp,
        }
    }

    #[inline]
    fn variant_name(&self) -> &'static str {
        match self {
            ScalarValue::Str(_) => "Str",
            ScalarValue::Integer(_) => "Integer",
            ScalarValue::Float(_) => "Float",
            ScalarValue::Bool(_) => "Bool",
            ScalarValue::Timestamp(_) => "Timestamp",
        }
    }
}

/// Encode `value` into `out` using `descriptor`.
/// Appends to `out`.
#[inline]
pub fn encode_value_into(
    value: ScalarValue<'_>,
    descriptor: &FieldDescriptor,
    out: &mut String,
) -> Result<(), EncodeError> {
    match (descriptor.kind(), value) {
        (FieldKind::String, ScalarValue::Str(s)) => Utf8Identity.encode_into(out, s),
        (FieldKind::Integer(enc), ScalarValue::Integer(x)) => {
            PaddedDecimal::new(enc).encode_into(out, x)
        }
        (FieldKind::Float, ScalarValue::Float(x)) => DecimalFloat.encode_into(out, x),
        (FieldKind::Boolean, ScalarValue::Bool(b)) => BoolLiteral.encode_into(out, b),
        (FieldKind::Timestamp, ScalarValue::Timestamp(t)) => Iso8601Utc.encode_into(out, t),
        (expected, got) => Err(EncodeError::TypeMismatch {
            expected: expected.field_type(),
            got: got.variant_name(),
        }),
    }
}

#[inline]
pub fn encode_value(
    value: ScalarValue<'_>,
    descriptor: &FieldDescriptor,
) -> Result<String, EncodeError> {
    let mut out = String::new();
    encode_value_into(value, descriptor, &mut out)?;
    Ok(out)
}

/// Bridges the runtime metadata (`FieldDescriptor`) to the per-type codecs
/// in `internal`: look at the tag once, then call the specific codec.
pub fn decode_value<'a>(
    text: &'a str,
    descriptor: &FieldDescriptor,
) -> Result<ScalarValue<'a>, DecodeError> {
    match descriptor.kind() {
        FieldKind::String => Utf8Identity.decode(text).map(ScalarValue::Str),
        FieldKind::Integer(enc) => PaddedDecimal::new(enc).decode(text).map(ScalarValue::Integer),
        FieldKind::Float => DecimalFloat.decode(text).map(ScalarValue::Float),
        FieldKind::Boolean => BoolLiteral.decode(text).map(ScalarValue::Bool),
        FieldKind::Timestamp => Iso8601Utc.decode(text).map(ScalarValue::Timestamp),
    }
}

/// Absent text decodes to an absent value, never to a default.
#[inline]
pub fn decode_optional<'a>(
    text: Option<&'a str>,
    descriptor: &FieldDescriptor,
) -> Result<Option<ScalarValue<'a>>, DecodeError> {
    text.map(|t| decode_value(t, descriptor)).transpose()
}

// -------------------- Per-type entry points --------------------

/// Lexical integer rendering under `encoding`.
#[inline]
pub fn encode_integer(value: i128, encoding: &IntegerEncoding) -> Result<String, EncodeError> {
    PaddedDecimal::new(*encoding).encode_to_string(value)
}

#[inline]
pub fn decode_integer(text: &str, encoding: &IntegerEncoding) -> Result<i128, DecodeError> {
    PaddedDecimal::new(*encoding).decode(text)
}

#[inline]
pub fn encode_float(value: f64) -> Result<String, EncodeError> {
    DecimalFloat.encode_to_string(value)
}

#[inline]
pub fn decode_float(text: &str) -> Result<f64, DecodeError> {
    DecimalFloat.decode(text)
}

#[inline]
pub fn encode_bool(value: bool) -> &'static str {
    BoolLiteral::literal(value)
}

#[inline]
pub fn decode_bool(text: &str) -> Result<bool, DecodeError> {
    BoolLiteral.decode(text)
}

/// Strings are stored verbatim, so this only borrows `text`.
#[inline]
pub fn decode_str(text: &str) -> Result<&str, DecodeError> {
    Utf8Identity.decode(text)
}
