use lexattr_types::IntegerEncoding;

/// Declaration-time defaults (no hidden constants).
///
/// Integer fields declared with partial [`LexicalRules`](lexattr_types::LexicalRules)
/// take the missing offset/padding from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Fallback for `SchemaBuilder::integer`.
    pub integer: IntegerEncoding,
    /// Fallback for `SchemaBuilder::big_integer`.
    pub big_integer: IntegerEncoding,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            integer: IntegerEncoding::PLAIN,
            big_integer: IntegerEncoding::BIG,
        }
    }
}
