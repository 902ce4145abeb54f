//! Content store trait

use crate::error::StoreError;
use crate::model::{EntityId, MetaValue, UserId};

/// Read/write access to entities
///
/// Implement this trait to back the editor with a real content store.
/// Writes are applied individually; the store's own concurrency control
/// (typically last-write-wins per field) governs concurrent edits.
pub trait ContentStore: Send + Sync {
    /// Current title of the entity
    fn title(&self, id: EntityId) -> Result<String, StoreError>;

    /// Tag labels of the entity, in stored order
    fn tags(&self, id: EntityId) -> Result<Vec<String>, StoreError>;

    /// Metadata value stored under `key`, if any
    fn meta(&self, id: EntityId, key: &str) -> Result<Option<MetaValue>, StoreError>;

    /// Owner of the entity, if it has one
    fn author(&self, id: EntityId) -> Result<Option<UserId>, StoreError>;

    /// Canonical display location of the entity
    fn permalink(&self, id: EntityId) -> Result<String, StoreError>;

    /// Overwrite the title
    fn set_title(&self, id: EntityId, title: &str) -> Result<(), StoreError>;

    /// Replace the whole tag list
    fn set_tags(&self, id: EntityId, tags: &[String]) -> Result<(), StoreError>;

    /// Overwrite one metadata value
    fn set_meta(&self, id: EntityId, key: &str, value: MetaValue) -> Result<(), StoreError>;
}

// Implement ContentStore for Arc<S> to allow sharing one store between collaborators
impl<S: ContentStore> ContentStore for std::sync::Arc<S> {
    fn title(&self, id: EntityId) -> Result<String, StoreError> {
        (**self).title(id)
    }

    fn tags(&self, id: EntityId) -> Result<Vec<String>, StoreError> {
        (**self).tags(id)
    }

    fn meta(&self, id: EntityId, key: &str) -> Result<Option<MetaValue>, StoreError> {
        (**self).meta(id, key)
    }

    fn author(&self, id: EntityId) -> Result<Option<UserId>, StoreError> {
        (**self).author(id)
    }

    fn permalink(&self, id: EntityId) -> Result<String, StoreError> {
        (**self).permalink(id)
    }

    fn set_title(&self, id: EntityId, title: &str) -> Result<(), StoreError> {
        (**self).set_title(id, title)
    }

    fn set_tags(&self, id: EntityId, tags: &[String]) -> Result<(), StoreError> {
        (**self).set_tags(id, tags)
    }

    fn set_meta(&self, id: EntityId, key: &str, value: MetaValue) -> Result<(), StoreError> {
        (**self).set_meta(id, key, value)
    }
}
