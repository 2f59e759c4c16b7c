//! Record <-> item mapping.
//!
//! Both directions walk the record type's schema. Saving encodes every set
//! field next to the lifecycle slots; loading decodes the declared fields the
//! item holds and ignores everything else.

use lexattr_result::{Error, Result};
use lexattr_types::{EncodeError, decode_timestamp, encode_timestamp};
use time::OffsetDateTime;

use crate::clock::{Clock, SystemClock};
use crate::constants::{CREATED_ATTRIBUTE, RESERVED_ATTRIBUTES, UPDATED_ATTRIBUTE};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::item::{Attributes, Item};
use crate::record::{Record, RecordMeta};
use crate::store::ItemStore;

/// Converts records to upsert payloads and items back to records.
///
/// The clock and identifier source are injected so saves can be made
/// deterministic in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordMapper<C = SystemClock, G = UuidGenerator> {
    clock: C,
    ids: G,
}

impl RecordMapper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, G: IdGenerator> RecordMapper<C, G> {
    pub fn with_parts(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Stamp `record` and encode it into a flat attribute map.
    ///
    /// - a missing or empty name is replaced by a generated one;
    /// - `created` is set only if unset, `updated` always;
    /// - unset fields are left out of the map entirely.
    ///
    /// On error the record is left untouched.
    pub fn to_attributes<R: Record>(&self, record: &mut R) -> Result<Attributes> {
        self.prepare(record).map(|(_, attributes)| attributes)
    }

    /// [`to_attributes`](Self::to_attributes), then upsert into `store`
    /// under the record's name.
    pub fn save<R, S>(&self, record: &mut R, store: &S) -> Result<()>
    where
        R: Record,
        S: ItemStore + ?Sized,
    {
        let (name, attributes) = self.prepare(record)?;
        tracing::debug!(name = %name, attributes = attributes.len(), "saving record");
        store.create(&name, attributes)
    }

    /// Rebuild a record from a stored item.
    ///
    /// Fields are decoded in declaration order, so the first malformed
    /// declared attribute is the one reported. Attributes the schema does not
    /// declare are skipped. Lifecycle slots missing from the item stay `None`.
    pub fn from_item<R: Record>(&self, item: &Item) -> Result<R> {
        let schema = R::schema();
        let mut record = R::default();

        let meta = record.meta_mut();
        meta.name = Some(item.name.clone());
        meta.created = decode_lifecycle(item, CREATED_ATTRIBUTE)?;
        meta.updated = decode_lifecycle(item, UPDATED_ATTRIBUTE)?;

        for field in schema.fields() {
            let Some(text) = item.first_value(field.name()) else {
                continue;
            };
            field
                .decode_into(&mut record, Some(text))
                .map_err(|e| Error::decode(field.name(), e))?;
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for attribute in item.attributes.keys() {
                let undeclared = !RESERVED_ATTRIBUTES.contains(&attribute.as_str())
                    && schema.field(attribute).is_none();
                if undeclared {
                    tracing::trace!(
                        item = %item.name,
                        attribute = %attribute,
                        "skipping undeclared attribute"
                    );
                }
            }
        }

        Ok(record)
    }

    /// Fetch `name` from `store` and decode it.
    pub fn load<R, S>(&self, store: &S, name: &str) -> Result<Option<R>>
    where
        R: Record,
        S: ItemStore + ?Sized,
    {
        let Some(item) = store.get(name)? else {
            tracing::debug!(name, "record not found");
            return Ok(None);
        };
        tracing::debug!(name, attributes = item.attributes.len(), "loading record");
        self.from_item(&item).map(Some)
    }

    fn prepare<R: Record>(&self, record: &mut R) -> Result<(String, Attributes)> {
        let stamp = self.stamp(record.meta());
        let schema = R::schema();

        let mut attributes =
            Attributes::with_capacity_and_hasher(schema.len() + 2, Default::default());
        attributes.insert(
            CREATED_ATTRIBUTE.to_owned(),
            encode_lifecycle(CREATED_ATTRIBUTE, stamp.created)?,
        );
        attributes.insert(
            UPDATED_ATTRIBUTE.to_owned(),
            encode_lifecycle(UPDATED_ATTRIBUTE, stamp.updated)?,
        );

        for field in schema.fields() {
            let encoded = field
                .encode(record)
                .map_err(|e| Error::encode(field.name(), e))?;
            if let Some(text) = encoded {
                attributes.insert(field.name().to_owned(), text);
            }
        }

        let meta = record.meta_mut();
        if stamp.generated {
            tracing::debug!(name = %stamp.name, "assigned identifier to new record");
        }
        meta.name = Some(stamp.name.clone());
        meta.created = Some(stamp.created);
        meta.updated = Some(stamp.updated);

        Ok((stamp.name, attributes))
    }

    /// Lifecycle values `meta` will carry once the save is encoded.
    fn stamp(&self, meta: &RecordMeta) -> Stamp {
        let now = self.clock.now();
        let (name, generated) = match meta.name.as_deref() {
            Some(existing) if !existing.is_empty() => (existing.to_owned(), false),
            _ => (self.ids.generate(), true),
        };
        Stamp {
            name,
            generated,
            created: meta.created.unwrap_or(now),
            updated: now,
        }
    }
}

struct Stamp {
    name: String,
    generated: bool,
    created: OffsetDateTime,
    updated: OffsetDateTime,
}

fn encode_lifecycle(attribute: &str, instant: OffsetDateTime) -> Result<String> {
    encode_timestamp(&instant)
        .ok_or_else(|| Error::encode(attribute, EncodeError::InvalidTimestamp))
}

fn decode_lifecycle(item: &Item, attribute: &str) -> Result<Option<OffsetDateTime>> {
    item.first_value(attribute)
        .map(decode_timestamp)
        .transpose()
        .map_err(|e| Error::decode(attribute, e))
}
