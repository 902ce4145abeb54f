//! Field schema resolution
//!
//! Flattens the field groups applicable to an entity into one ordered sequence
//! (group order, then field order within each group) and pairs every field
//! with the entity's current value.
//!
//! A missing or failing schema store is tolerated: resolution yields an empty
//! sequence and the form renders with only its title and tags controls.

use crate::model::{EntityId, FieldDescriptor, FieldSpec};
use crate::store::{ContentStore, SchemaStore};
use std::sync::Arc;

/// Resolves field descriptors for an entity
#[derive(Clone)]
pub struct SchemaResolver {
    schema: Arc<dyn SchemaStore>,
    content: Arc<dyn ContentStore>,
}

impl SchemaResolver {
    pub fn new(schema: Arc<dyn SchemaStore>, content: Arc<dyn ContentStore>) -> Self {
        Self { schema, content }
    }

    /// Flattened field specs applicable to the entity, without values
    pub fn specs(&self, entity: EntityId) -> Vec<FieldSpec> {
        let groups = match self.schema.field_groups(entity) {
            Ok(groups) => groups,
            Err(e) => {
                log::warn!("Field schema unavailable for entity {}: {}", entity, e);
                return Vec::new();
            }
        };

        if groups.is_empty() {
            log::debug!("No field groups apply to entity {}", entity);
        }

        let mut specs = Vec::new();
        for group in groups {
            match self.schema.fields(&group.key) {
                Ok(fields) => specs.extend(fields.into_iter().filter(|spec| {
                    if spec.key.is_empty() {
                        log::warn!("Dropping field with empty key in group {}", group.key);
                        return false;
                    }
                    true
                })),
                Err(e) => log::warn!("Fields of group {} unavailable: {}", group.key, e),
            }
        }
        specs
    }

    /// Ordered field descriptors with the entity's current values
    pub fn resolve(&self, entity: EntityId) -> Vec<FieldDescriptor> {
        self.specs(entity)
            .into_iter()
            .map(|spec| {
                let stored = match self.content.meta(entity, &spec.key) {
                    Ok(stored) => stored,
                    Err(e) => {
                        log::error!(
                            "Reading field {} of entity {} failed: {}",
                            spec.key,
                            entity,
                            e
                        );
                        None
                    }
                };
                let value = spec.kind.read(stored.as_ref());
                FieldDescriptor::new(spec, value)
            })
            .collect()
    }
}
