//! Per-type schemas: field descriptors paired with typed accessors.
//!
//! A schema is declared once per record type through [`SchemaBuilder`]. The
//! builder method chosen for a field fixes both its [`FieldKind`] and the
//! Rust type of its getter/setter, so a field can never be handed a value
//! of the wrong type at encode time.

use std::fmt;

use lexattr_result::{Error, Result};
use lexattr_types::{
    DecodeError, EncodeError, FieldDescriptor, FieldKind, IntegerEncoding, LexicalRules,
    ScalarValue, decode_bool, decode_float, decode_integer, decode_str, decode_timestamp,
    encode_value,
};
use rustc_hash::FxHashMap;
use time::OffsetDateTime;

use crate::config::SchemaConfig;
use crate::constants::RESERVED_ATTRIBUTES;

type IntGetter<R> = Box<dyn Fn(&R) -> Option<i128> + Send + Sync>;
type IntSetter<R> =
    Box<dyn Fn(&mut R, Option<i128>) -> std::result::Result<(), DecodeError> + Send + Sync>;

/// Typed access to one field of `R`. The variant always agrees with the
/// field's descriptor.
enum Accessor<R> {
    String {
        get: fn(&R) -> Option<&str>,
        set: fn(&mut R, Option<String>),
    },
    Integer {
        encoding: IntegerEncoding,
        get: IntGetter<R>,
        set: IntSetter<R>,
    },
    Float {
        get: fn(&R) -> Option<f64>,
        set: fn(&mut R, Option<f64>),
    },
    Boolean {
        get: fn(&R) -> Option<bool>,
        set: fn(&mut R, Option<bool>),
    },
    Timestamp {
        get: fn(&R) -> Option<OffsetDateTime>,
        set: fn(&mut R, Option<OffsetDateTime>),
    },
}

/// One declared attribute of a record type.
pub struct Field<R> {
    descriptor: FieldDescriptor,
    accessor: Accessor<R>,
}

impl<R> Field<R> {
    #[inline]
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Current value of this field on `record`, `None` when unset.
    pub fn value<'r>(&self, record: &'r R) -> Option<ScalarValue<'r>> {
        match &self.accessor {
            Accessor::String { get, .. } => get(record).map(ScalarValue::Str),
            Accessor::Integer { get, .. } => get(record).map(ScalarValue::Integer),
            Accessor::Float { get, .. } => get(record).map(ScalarValue::Float),
            Accessor::Boolean { get, .. } => get(record).map(ScalarValue::Bool),
            Accessor::Timestamp { get, .. } => get(record).map(ScalarValue::Timestamp),
        }
    }

    /// Lexical text for the current value; unset fields yield `None`.
    pub fn encode(&self, record: &R) -> std::result::Result<Option<String>, EncodeError> {
        self.value(record)
            .map(|v| encode_value(v, &self.descriptor))
            .transpose()
    }

    /// Decode `text` and assign it. Absent text clears the field.
    pub fn decode_into(
        &self,
        record: &mut R,
        text: Option<&str>,
    ) -> std::result::Result<(), DecodeError> {
        match &self.accessor {
            Accessor::String { set, .. } => {
                set(record, text.map(decode_str).transpose()?.map(str::to_owned));
                Ok(())
            }
            Accessor::Integer { encoding, set, .. } => {
                let v = text.map(|t| decode_integer(t, encoding)).transpose()?;
                set(record, v)
            }
            Accessor::Float { set, .. } => {
                set(record, text.map(decode_float).transpose()?);
                Ok(())
            }
            Accessor::Boolean { set, .. } => {
                set(record, text.map(decode_bool).transpose()?);
                Ok(())
            }
            Accessor::Timestamp { set, .. } => {
                set(record, text.map(decode_timestamp).transpose()?);
                Ok(())
            }
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// The ordered, read-only set of fields declared for record type `R`.
pub struct Schema<R> {
    fields: Vec<Field<R>>,
    by_name: FxHashMap<&'static str, usize>,
}

impl<R: 'static> Schema<R> {
    pub fn builder() -> SchemaBuilder<R> {
        SchemaBuilder::new()
    }

    pub fn builder_with_config(config: SchemaConfig) -> SchemaBuilder<R> {
        SchemaBuilder::with_config(config)
    }
}

impl<R> Schema<R> {
    /// Fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    #[inline]
    pub fn field(&self, name: &str) -> Option<&Field<R>> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().map(Field::descriptor)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Typed snapshot of every set field, in declaration order.
    pub fn values<'r>(&self, record: &'r R) -> Vec<(&'static str, ScalarValue<'r>)> {
        self.fields
            .iter()
            .filter_map(|f| f.value(record).map(|v| (f.name(), v)))
            .collect()
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.descriptors()).finish()
    }
}

/// Declares the fields of a record type.
///
/// Declaration problems (duplicate or reserved names) are collected and
/// reported by [`SchemaBuilder::build`].
pub struct SchemaBuilder<R> {
    config: SchemaConfig,
    fields: Vec<Field<R>>,
    error: Option<Error>,
}

impl<R: 'static> Default for SchemaBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> SchemaBuilder<R> {
    pub fn new() -> Self {
        Self::with_config(SchemaConfig::default())
    }

    pub fn with_config(config: SchemaConfig) -> Self {
        Self {
            config,
            fields: Vec::new(),
            error: None,
        }
    }

    pub fn string(
        self,
        name: &'static str,
        get: fn(&R) -> Option<&str>,
        set: fn(&mut R, Option<String>),
    ) -> Self {
        self.push(FieldKind::String, name, Accessor::String { get, set })
    }

    /// Integer field; undeclared parts of `rules` use the plain defaults
    /// (offset 0, padding 10 unless configured otherwise).
    pub fn integer<T>(
        self,
        name: &'static str,
        rules: LexicalRules,
        get: fn(&R) -> Option<T>,
        set: fn(&mut R, Option<T>),
    ) -> Self
    where
        T: Copy + Into<i128> + TryFrom<i128> + 'static,
    {
        let encoding = rules.resolve(self.config.integer);
        self.push_integer(name, encoding, get, set)
    }

    /// Integer field using the big integer defaults (offset 2^63, padding
    /// 20), which keep the whole `i64` range sortable.
    pub fn big_integer<T>(
        self,
        name: &'static str,
        get: fn(&R) -> Option<T>,
        set: fn(&mut R, Option<T>),
    ) -> Self
    where
        T: Copy + Into<i128> + TryFrom<i128> + 'static,
    {
        let encoding = self.config.big_integer;
        self.push_integer(name, encoding, get, set)
    }

    pub fn float(
        self,
        name: &'static str,
        get: fn(&R) -> Option<f64>,
        set: fn(&mut R, Option<f64>),
    ) -> Self {
        self.push(FieldKind::Float, name, Accessor::Float { get, set })
    }

    pub fn boolean(
        self,
        name: &'static str,
        get: fn(&R) -> Option<bool>,
        set: fn(&mut R, Option<bool>),
    ) -> Self {
        self.push(FieldKind::Boolean, name, Accessor::Boolean { get, set })
    }

    pub fn timestamp(
        self,
        name: &'static str,
        get: fn(&R) -> Option<OffsetDateTime>,
        set: fn(&mut R, Option<OffsetDateTime>),
    ) -> Self {
        self.push(FieldKind::Timestamp, name, Accessor::Timestamp { get, set })
    }

    pub fn build(self) -> Result<Schema<R>> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let by_name = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name(), i))
            .collect();
        Ok(Schema {
            fields: self.fields,
            by_name,
        })
    }

    fn push_integer<T>(
        self,
        name: &'static str,
        encoding: IntegerEncoding,
        get: fn(&R) -> Option<T>,
        set: fn(&mut R, Option<T>),
    ) -> Self
    where
        T: Copy + Into<i128> + TryFrom<i128> + 'static,
    {
        let get: IntGetter<R> = Box::new(move |r: &R| get(r).map(Into::into));
        let set: IntSetter<R> = Box::new(
            move |r: &mut R, v: Option<i128>| -> std::result::Result<(), DecodeError> {
                let v = v
                    .map(<T as TryFrom<i128>>::try_from)
                    .transpose()
                    .map_err(|_| DecodeError::IntegerOutOfRange)?;
                set(r, v);
                Ok(())
            },
        );
        self.push(
            FieldKind::Integer(encoding),
            name,
            Accessor::Integer { encoding, get, set },
        )
    }

    fn push(mut self, kind: FieldKind, name: &'static str, accessor: Accessor<R>) -> Self {
        if self.error.is_some() {
            return self;
        }
        if name.is_empty() {
            self.error = Some(Error::InvalidArgumentError(
                "attribute name must not be empty".into(),
            ));
        } else if RESERVED_ATTRIBUTES.contains(&name) {
            self.error = Some(Error::InvalidArgumentError(format!(
                "attribute name '{name}' is reserved"
            )));
        } else if self.fields.iter().any(|f| f.name() == name) {
            self.error = Some(Error::InvalidArgumentError(format!(
                "attribute '{name}' declared twice"
            )));
        } else {
            self.fields.push(Field {
                descriptor: FieldDescriptor::new(name, kind),
                accessor,
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexattr_types::FieldType;

    #[derive(Debug, Default)]
    struct Probe {
        label: Option<String>,
        small: Option<i8>,
        wide: Option<u64>,
        ratio: Option<f64>,
    }

    fn probe_schema() -> Schema<Probe> {
        Schema::<Probe>::builder()
            .string("label", |p| p.label.as_deref(), |p, v| p.label = v)
            .integer(
                "small",
                LexicalRules::new().with_offset(128).with_padding(3),
                |p| p.small,
                |p, v| p.small = v,
            )
            .big_integer("wide", |p| p.wide, |p, v| p.wide = v)
            .float("ratio", |p| p.ratio, |p, v| p.ratio = v)
            .build()
            .unwrap()
    }

    #[test]
    fn fields_keep_declaration_order() {
        let schema = probe_schema();
        let names: Vec<_> = schema.descriptors().map(|d| d.name()).collect();
        assert_eq!(names, ["label", "small", "wide", "ratio"]);
        assert_eq!(schema.field("wide").unwrap().descriptor().field_type(), FieldType::Integer);
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn integer_setter_rejects_values_that_do_not_fit() {
        let schema = probe_schema();
        let small = schema.field("small").unwrap();
        let mut p = Probe::default();

        small.decode_into(&mut p, Some("255")).unwrap();
        assert_eq!(p.small, Some(127));

        assert_eq!(
            small.decode_into(&mut p, Some("256")),
            Err(DecodeError::IntegerOutOfRange)
        );
        assert_eq!(p.small, Some(127));
    }

    #[test]
    fn unsigned_big_integer_covers_u64_up_to_two_pow_63() {
        let schema = probe_schema();
        let wide = schema.field("wide").unwrap();
        let mut p = Probe {
            wide: Some(1 << 63),
            ..Probe::default()
        };

        let text = wide.encode(&p).unwrap().unwrap();
        assert_eq!(text, "18446744073709551616");

        p.wide = None;
        wide.decode_into(&mut p, Some(&text)).unwrap();
        assert_eq!(p.wide, Some(1 << 63));
    }

    #[test]
    fn absent_text_clears_the_field() {
        let schema = probe_schema();
        let mut p = Probe {
            ratio: Some(0.25),
            ..Probe::default()
        };
        schema.field("ratio").unwrap().decode_into(&mut p, None).unwrap();
        assert_eq!(p.ratio, None);
    }

    #[test]
    fn reserved_and_duplicate_names_fail_the_build() {
        let reserved = Schema::<Probe>::builder()
            .string("created", |p| p.label.as_deref(), |p, v| p.label = v)
            .build();
        assert!(matches!(
            reserved,
            Err(Error::InvalidArgumentError(msg)) if msg.contains("reserved")
        ));

        let duplicate = Schema::<Probe>::builder()
            .float("ratio", |p| p.ratio, |p, v| p.ratio = v)
            .float("ratio", |p| p.ratio, |p, v| p.ratio = v)
            .build();
        assert!(matches!(
            duplicate,
            Err(Error::InvalidArgumentError(msg)) if msg.contains("twice")
        ));
    }

    #[test]
    fn config_supplies_missing_integer_rules() {
        let config = SchemaConfig {
            integer: IntegerEncoding::new(1000, 6),
            ..SchemaConfig::default()
        };
        let schema = Schema::<Probe>::builder_with_config(config)
            .integer(
                "small",
                LexicalRules::new().with_padding(4),
                |p| p.small,
                |p, v| p.small = v,
            )
            .build()
            .unwrap();

        let encoding = schema.field("small").unwrap().descriptor().integer_encoding();
        assert_eq!(encoding, Some(IntegerEncoding::new(1000, 4)));

        let p = Probe {
            small: Some(-3),
            ..Probe::default()
        };
        let encoded = schema.field("small").unwrap().encode(&p).unwrap();
        assert_eq!(encoded.as_deref(), Some("0997"));
    }
}
