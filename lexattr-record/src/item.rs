use rustc_hash::FxHashMap;

/// Flat upsert payload produced by the mapper: attribute name -> lexical text.
pub type Attributes = FxHashMap<String, String>;

/// A stored item as the key/value store hands it back: a unique name and
/// attribute slots that may hold several values each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub attributes: FxHashMap<String, Vec<String>>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: FxHashMap::default(),
        }
    }

    /// Single-valued item built from an upsert payload.
    pub fn from_attributes(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().map(|(k, v)| (k, vec![v])).collect(),
        }
    }

    /// Append `value` to the `attribute` slot.
    pub fn with_value(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .entry(attribute.into())
            .or_default()
            .push(value.into());
        self
    }

    /// First value of a slot; extra values are ignored.
    #[inline]
    pub fn first_value(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .get(attribute)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
