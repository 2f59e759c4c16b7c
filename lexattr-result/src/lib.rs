//! Error types and result definitions for the lexattr record layer.
//!
//! The codec crate (`lexattr-types`) keeps its own small, `Copy`-able
//! [`EncodeError`](lexattr_types::EncodeError) and
//! [`DecodeError`](lexattr_types::DecodeError) enums. Everything above the
//! codec (schemas, the record mapper, item stores) returns [`Result<T>`] and
//! wraps codec failures together with the attribute they occurred on.
//!
//! # Error Categories
//!
//! - **Codec failures** ([`Error::Encode`], [`Error::Decode`]): a field value
//!   could not be rendered, or stored text could not be parsed back
//! - **Declaration errors** ([`Error::InvalidArgumentError`]): a schema was
//!   declared with duplicate or reserved attribute names
//! - **Internal errors** ([`Error::Internal`]): poisoned locks or other
//!   unexpected states inside a store

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
