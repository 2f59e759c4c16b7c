#![allow(dead_code)]

use std::sync::OnceLock;

use lexattr_record::{IdGenerator, LexicalRules, Record, RecordMeta, Schema};
use time::OffsetDateTime;

/// Fixture covering every field kind and a spread of integer rules.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MockDao {
    pub meta: RecordMeta,
    pub str_value: Option<String>,
    /// padding 16
    pub int_value_1: Option<i64>,
    /// padding 8
    pub int_value_2: Option<i64>,
    /// plain defaults
    pub int_value_3: Option<i32>,
    /// big integer defaults
    pub int_value_4: Option<i64>,
    /// big integer defaults, wide enough for 2^63
    pub int_value_5: Option<i128>,
    pub float_value: Option<f64>,
    pub bool_value: Option<bool>,
    pub misc_time: Option<OffsetDateTime>,
}

impl Record for MockDao {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: OnceLock<Schema<MockDao>> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<MockDao>::builder()
                .string("str_value", |d| d.str_value.as_deref(), |d, v| d.str_value = v)
                .integer(
                    "int_value_1",
                    LexicalRules::new().with_padding(16),
                    |d| d.int_value_1,
                    |d, v| d.int_value_1 = v,
                )
                .integer(
                    "int_value_2",
                    LexicalRules::new().with_padding(8),
                    |d| d.int_value_2,
                    |d, v| d.int_value_2 = v,
                )
                .integer(
                    "int_value_3",
                    LexicalRules::new(),
                    |d| d.int_value_3,
                    |d, v| d.int_value_3 = v,
                )
                .big_integer("int_value_4", |d| d.int_value_4, |d, v| d.int_value_4 = v)
                .big_integer("int_value_5", |d| d.int_value_5, |d, v| d.int_value_5 = v)
                .float("float_value", |d| d.float_value, |d, v| d.float_value = v)
                .boolean("bool_value", |d| d.bool_value, |d, v| d.bool_value = v)
                .timestamp("misc_time", |d| d.misc_time, |d, v| d.misc_time = v)
                .build()
                .expect("mock schema")
        })
    }

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}

/// Hands out "id-0", "id-1", ...
#[derive(Debug, Default)]
pub struct SequentialIds(std::sync::atomic::AtomicUsize);

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("id-{n}")
    }
}
