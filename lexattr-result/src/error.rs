use std::fmt;

use lexattr_types::{DecodeError, EncodeError};
use thiserror::Error;

/// Unified error type for record mapping and storage operations.
///
/// Codec errors carry the attribute name so a failed load can be traced back
/// to the offending slot of the stored item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A declared field value could not be encoded.
    ///
    /// In practice this only happens for integers whose offset addition
    /// overflows `i128`, or timestamps outside the formattable year range.
    #[error("failed to encode attribute '{attribute}': {source}")]
    Encode {
        attribute: String,
        #[source]
        source: EncodeError,
    },

    /// Stored text for a declared attribute could not be decoded.
    ///
    /// Malformed integers, floats, booleans and timestamps all end up here;
    /// the codec never falls back to a default value.
    #[error("failed to decode attribute '{attribute}': {source}")]
    Decode {
        attribute: String,
        #[source]
        source: DecodeError,
    },

    /// Invalid declaration or API parameter.
    ///
    /// Raised by the schema builder for duplicate attribute names and for
    /// names that collide with the reserved `name`/`created`/`updated` slots.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    #[inline]
    pub fn encode(attribute: impl Into<String>, source: EncodeError) -> Self {
        Error::Encode {
            attribute: attribute.into(),
            source,
        }
    }

    #[inline]
    pub fn decode(attribute: impl Into<String>, source: DecodeError) -> Self {
        Error::Decode {
            attribute: attribute.into(),
            source,
        }
    }

    /// Create an internal error from any displayable error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexattr_result::Error;
    ///
    /// let err = Error::internal("item store lock poisoned");
    /// assert!(matches!(err, Error::Internal(msg) if msg.contains("poisoned")));
    /// ```
    #[inline]
    pub fn internal<E: fmt::Display>(err: E) -> Self {
        Error::Internal(err.to_string())
    }
}
