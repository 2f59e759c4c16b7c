use thiserror::Error;

use crate::FieldType;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The provided value does not match the declared FieldType.
    #[error("type mismatch: expected {expected:?}, got {got}")]
    TypeMismatch {
        expected: FieldType,
        got: &'static str,
    },
    /// `value + offset` does not fit in an `i128`.
    #[error("integer overflows when the lexical offset is applied")]
    IntegerOverflow,
    /// The instant cannot be rendered as a four-digit-year UTC timestamp.
    #[error("timestamp is outside the encodable range")]
    InvalidTimestamp,
}

/// Error type for decoding operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The text is not a decimal integer.
    #[error("invalid integer text")]
    InvalidInteger,
    /// The decoded integer does not fit the destination type.
    #[error("decoded integer is out of range for the field")]
    IntegerOutOfRange,
    #[error("invalid float text")]
    InvalidFloat,
    /// Anything other than the literals `true` / `false`.
    #[error("invalid boolean text")]
    InvalidBoolean,
    /// Not an ISO-8601 timestamp with an explicit offset.
    #[error("invalid timestamp text")]
    InvalidTimestamp,
}
