//! Schema store trait

use crate::error::StoreError;
use crate::model::{EntityId, FieldSpec};
use serde::{Deserialize, Serialize};

/// A named group of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub key: String,
    pub title: String,
}

impl FieldGroup {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self { key: key.into(), title: title.into() }
    }
}

/// Enumerates the field schema applicable to an entity
pub trait SchemaStore: Send + Sync {
    /// Field groups applicable to the entity, in display order
    fn field_groups(&self, id: EntityId) -> Result<Vec<FieldGroup>, StoreError>;

    /// Fields of one group, in display order
    fn fields(&self, group_key: &str) -> Result<Vec<FieldSpec>, StoreError>;
}

impl<S: SchemaStore> SchemaStore for std::sync::Arc<S> {
    fn field_groups(&self, id: EntityId) -> Result<Vec<FieldGroup>, StoreError> {
        (**self).field_groups(id)
    }

    fn fields(&self, group_key: &str) -> Result<Vec<FieldSpec>, StoreError> {
        (**self).fields(group_key)
    }
}
