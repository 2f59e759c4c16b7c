//! Minimal item store trait + in-memory implementation.

use lexattr_result::Result;

use crate::item::{Attributes, Item};

pub mod mem_store;
pub use mem_store::*;

pub trait ItemStore: Send + Sync {
    /// Create-or-replace the item called `name` with exactly `attributes`.
    fn create(&self, name: &str, attributes: Attributes) -> Result<()>;

    /// Fetch an item by name; `None` when it does not exist.
    fn get(&self, name: &str) -> Result<Option<Item>>;
}

impl<S: ItemStore + ?Sized> ItemStore for &S {
    #[inline]
    fn create(&self, name: &str, attributes: Attributes) -> Result<()> {
        (**self).create(name, attributes)
    }

    #[inline]
    fn get(&self, name: &str) -> Result<Option<Item>> {
        (**self).get(name)
    }
}
