//! Typed records on top of a string-only key/value store.
//!
//! A record type declares its fields once through a [`Schema`]; the
//! [`RecordMapper`] uses that schema to turn a record into a flat
//! `name -> lexical text` map (see `lexattr-types`) and to rebuild records
//! from stored [`Item`]s.
//!
//! ```
//! use std::sync::OnceLock;
//! use lexattr_record::{
//!     ItemStore, LexicalRules, MemItemStore, Record, RecordMapper, RecordMeta, Schema,
//! };
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Post {
//!     meta: RecordMeta,
//!     title: Option<String>,
//!     views: Option<i64>,
//! }
//!
//! impl Record for Post {
//!     fn schema() -> &'static Schema<Self> {
//!         static SCHEMA: OnceLock<Schema<Post>> = OnceLock::new();
//!         SCHEMA.get_or_init(|| {
//!             Schema::<Post>::builder()
//!                 .string("title", |p| p.title.as_deref(), |p, v| p.title = v)
//!                 .integer("views", LexicalRules::new(), |p| p.views, |p, v| p.views = v)
//!                 .build()
//!                 .expect("post schema")
//!         })
//!     }
//!     fn meta(&self) -> &RecordMeta { &self.meta }
//!     fn meta_mut(&mut self) -> &mut RecordMeta { &mut self.meta }
//! }
//!
//! let store = MemItemStore::new();
//! let mapper = RecordMapper::new();
//!
//! let mut post = Post { title: Some("hello".into()), views: Some(42), ..Post::default() };
//! mapper.save(&mut post, &store).unwrap();
//!
//! let name = post.meta.name.clone().unwrap();
//! let item = store.get(&name).unwrap().unwrap();
//! assert_eq!(item.first_value("views"), Some("0000000042"));
//!
//! let loaded: Post = mapper.load(&store, &name).unwrap().unwrap();
//! assert_eq!(loaded.views, Some(42));
//! ```

pub mod clock;
pub mod config;
pub mod constants;
pub mod ids;
pub mod item;
pub mod mapper;
pub mod record;
pub mod schema;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SchemaConfig;
pub use constants::*;
pub use ids::{IdGenerator, UuidGenerator};
pub use item::{Attributes, Item};
pub use mapper::RecordMapper;
pub use record::{Record, RecordMeta};
pub use schema::{Field, Schema, SchemaBuilder};
pub use store::{ItemStore, MemItemStore};

pub use lexattr_result::{Error, Result};
pub use lexattr_types::{
    FieldDescriptor, FieldKind, FieldType, IntegerEncoding, LexicalRules, ScalarValue,
};
