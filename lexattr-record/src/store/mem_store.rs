use std::sync::RwLock;

use lexattr_result::{Error, Result};
use rustc_hash::FxHashMap;

use super::ItemStore;
use crate::item::{Attributes, Item};

/// In-memory item store used for tests and examples.
#[derive(Default)]
pub struct MemItemStore {
    items: RwLock<FxHashMap<String, Item>>,
}

impl MemItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        let map = self
            .items
            .read()
            .map_err(|_| Error::internal("MemItemStore read lock poisoned"))?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl ItemStore for MemItemStore {
    fn create(&self, name: &str, attributes: Attributes) -> Result<()> {
        let mut map = self
            .items
            .write()
            .map_err(|_| Error::internal("MemItemStore write lock poisoned"))?;
        let replaced = map
            .insert(name.to_owned(), Item::from_attributes(name, attributes))
            .is_some();
        tracing::trace!(name, replaced, "MemItemStore: upsert");
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<Item>> {
        let map = self
            .items
            .read()
            .map_err(|_| Error::internal("MemItemStore read lock poisoned"))?;
        Ok(map.get(name).cloned())
    }
}
