//! Minimal text codecs, one per scalar type.
//!
//! Every codec writes into a `String` and reads back from a `&str`, because
//! the target store only understands string attribute values and compares
//! them byte-wise.
//!
//! - `Utf8Identity`: strings pass through untouched.
//! - `PaddedDecimal`: `value + offset`, zero-padded to a fixed width, so
//!   lexicographic order == numeric order inside the safe range.
//! - `DecimalFloat`: shortest round-trip decimal. Does **not** sort.
//! - `BoolLiteral`: `"false"` / `"true"` (which happens to sort false < true).
//! - `Iso8601Utc`: canonical UTC timestamps, see [`crate::timestamp`].

#![forbid(unsafe_code)]

pub mod codec;
pub use codec::*;

pub mod bool_literal;
pub use bool_literal::*;

pub mod decimal_float;
pub use decimal_float::*;

pub mod iso8601_utc;
pub use iso8601_utc::*;

pub mod padded_decimal;
pub use padded_decimal::*;

pub mod utf8_identity;
pub use utf8_identity::*;
