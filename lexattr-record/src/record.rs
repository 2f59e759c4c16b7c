use time::OffsetDateTime;

use crate::schema::Schema;

/// Lifecycle slots every stored record carries besides its declared fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMeta {
    /// Unique item name; generated on first save when absent or empty.
    pub name: Option<String>,
    pub created: Option<OffsetDateTime>,
    pub updated: Option<OffsetDateTime>,
}

impl RecordMeta {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A record type with a fixed, per-type schema.
///
/// Implementors usually keep the schema in a `OnceLock` inside
/// [`Record::schema`], so it is built on first use and shared read-only by
/// every instance afterwards:
///
/// ```
/// use std::sync::OnceLock;
/// use lexattr_record::{Record, RecordMeta, Schema};
///
/// #[derive(Default)]
/// struct Note {
///     meta: RecordMeta,
///     body: Option<String>,
/// }
///
/// impl Record for Note {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: OnceLock<Schema<Note>> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::<Note>::builder()
///                 .string("body", |n| n.body.as_deref(), |n, v| n.body = v)
///                 .build()
///                 .expect("note schema")
///         })
///     }
///
///     fn meta(&self) -> &RecordMeta {
///         &self.meta
///     }
///
///     fn meta_mut(&mut self) -> &mut RecordMeta {
///         &mut self.meta
///     }
/// }
///
/// assert_eq!(Note::schema().len(), 1);
/// ```
pub trait Record: Default + Sized + 'static {
    fn schema() -> &'static Schema<Self>;

    fn meta(&self) -> &RecordMeta;

    fn meta_mut(&mut self) -> &mut RecordMeta;

    #[inline]
    fn name(&self) -> Option<&str> {
        self.meta().name.as_deref()
    }
}
