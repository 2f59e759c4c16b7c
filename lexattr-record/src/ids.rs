use std::sync::Arc;

use uuid::Uuid;

/// Source of unique item names.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated 8-4-4-4-12 form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    #[inline]
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    #[inline]
    fn generate(&self) -> String {
        (**self).generate()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Arc<T> {
    #[inline]
    fn generate(&self) -> String {
        (**self).generate()
    }
}
