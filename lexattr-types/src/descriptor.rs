//! Field descriptors: the declared type and integer rules of one attribute.

use crate::FieldType;

/// Offset applied by the big integer shorthand (`2^63`).
pub const BIG_INTEGER_OFFSET: i128 = 1i128 << 63;
/// Digits needed for `u64::MAX + 1`, the widest value `i64 + 2^63` can reach.
pub const BIG_INTEGER_PADDING: usize = 20;
pub const DEFAULT_INTEGER_OFFSET: i128 = 0;
pub const DEFAULT_INTEGER_PADDING: usize = 10;

/// Resolved integer rules: `decimal(value + offset)` zero-padded to `padding`.
///
/// Ordering holds only while `value + offset` stays non-negative and fits in
/// `padding` digits. Wider values still encode, they just stop sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerEncoding {
    pub offset: i128,
    pub padding: usize,
}

impl IntegerEncoding {
    /// Rules for a plain integer attribute declared without explicit rules.
    pub const PLAIN: Self = Self::new(DEFAULT_INTEGER_OFFSET, DEFAULT_INTEGER_PADDING);

    /// Rules covering the whole `i64` range.
    pub const BIG: Self = Self::new(BIG_INTEGER_OFFSET, BIG_INTEGER_PADDING);

    #[inline]
    pub const fn new(offset: i128, padding: usize) -> Self {
        Self { offset, padding }
    }
}

impl Default for IntegerEncoding {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// Integer rules as declared; missing parts fall back to a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalRules {
    pub offset: Option<i128>,
    pub padding: Option<usize>,
}

impl LexicalRules {
    #[inline]
    pub const fn new() -> Self {
        Self {
            offset: None,
            padding: None,
        }
    }

    #[inline]
    pub const fn with_offset(mut self, offset: i128) -> Self {
        self.offset = Some(offset);
        self
    }

    #[inline]
    pub const fn with_padding(mut self, padding: usize) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Fill whatever was left undeclared from `fallback`.
    #[inline]
    pub fn resolve(&self, fallback: IntegerEncoding) -> IntegerEncoding {
        IntegerEncoding {
            offset: self.offset.unwrap_or(fallback.offset),
            padding: self.padding.unwrap_or(fallback.padding),
        }
    }
}

/// The encoding-relevant shape of a field. Integer rules only exist on the
/// integer variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer(IntegerEncoding),
    Float,
    Boolean,
    Timestamp,
}

impl FieldKind {
    #[inline]
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String => FieldType::String,
            FieldKind::Integer(_) => FieldType::Integer,
            FieldKind::Float => FieldType::Float,
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Timestamp => FieldType::Timestamp,
        }
    }
}

/// Declared type and encoding rules for one named attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: FieldKind,
}

impl FieldDescriptor {
    #[inline]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Integer field with `rules` resolved against the plain defaults.
    pub fn integer(name: &'static str, rules: LexicalRules) -> Self {
        Self::new(name, FieldKind::Integer(rules.resolve(IntegerEncoding::PLAIN)))
    }

    pub const fn big_integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer(IntegerEncoding::BIG))
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, FieldKind::Float)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, FieldKind::Timestamp)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[inline]
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// The integer rules, if this is an integer field.
    #[inline]
    pub fn integer_encoding(&self) -> Option<IntegerEncoding> {
        match self.kind {
            FieldKind::Integer(enc) => Some(enc),
            _ => None,
        }
    }
}
