//! In-memory content and schema store
//!
//! Thread-safe storage using RwLock. Entities and field groups live in memory
//! and can be round-tripped through a JSON document, which is how the CLI
//! persists a site between invocations.

use super::content::ContentStore;
use super::schema::{FieldGroup, SchemaStore};
use crate::error::StoreError;
use crate::model::{EntityId, FieldSpec, MetaValue, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

fn default_kind() -> String {
    "post".to_string()
}

/// An entity as held by the memory store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntity {
    pub id: EntityId,

    /// Entity type (post type); field groups can be restricted to kinds
    #[serde(default = "default_kind")]
    pub kind: String,

    pub title: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<UserId>,

    /// Canonical location; defaults to `/?p=<id>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    #[serde(default)]
    pub meta: BTreeMap<String, MetaValue>,
}

impl StoredEntity {
    pub fn new(id: EntityId, title: impl Into<String>) -> Self {
        Self {
            id,
            kind: default_kind(),
            title: title.into(),
            tags: Vec::new(),
            author: None,
            permalink: None,
            meta: BTreeMap::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_author(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: MetaValue) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    fn permalink(&self) -> String {
        self.permalink.clone().unwrap_or_else(|| format!("/?p={}", self.id))
    }
}

/// A field group together with its location rule and fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredGroup {
    #[serde(flatten)]
    pub group: FieldGroup,

    /// Entity kinds the group applies to; empty means every kind
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl StoredGroup {
    fn applies_to(&self, kind: &str) -> bool {
        self.kinds.is_empty() || self.kinds.iter().any(|k| k == kind)
    }
}

/// Serializable contents of a [`MemoryStore`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub entities: Vec<StoredEntity>,

    #[serde(default)]
    pub groups: Vec<StoredGroup>,
}

#[derive(Debug, Default)]
struct StoreState {
    entities: BTreeMap<EntityId, StoredEntity>,
    groups: Vec<StoredGroup>,
}

/// In-memory store implementing both [`ContentStore`] and [`SchemaStore`]
///
/// # Example
///
/// ```
/// use frontedit_core::store::{FieldGroup, MemoryStore, StoredEntity};
/// use frontedit_core::{EntityId, FieldKind, FieldSpec};
///
/// let store = MemoryStore::new();
/// store.insert(StoredEntity::new(EntityId(1), "Hello"));
/// store.add_group(
///     FieldGroup::new("group_details", "Details"),
///     &[],
///     vec![FieldSpec::new("subtitle", "Subtitle", FieldKind::Text)],
/// );
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let entities = snapshot.entities.into_iter().map(|e| (e.id, e)).collect();
        Self { state: RwLock::new(StoreState { entities, groups: snapshot.groups }) }
    }

    /// Parse a store from its JSON representation
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let snapshot: StoreSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Load a store from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Write the store's current contents to a JSON file
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot()?)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Copy out the current contents
    pub fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let state = self.read()?;
        Ok(StoreSnapshot {
            entities: state.entities.values().cloned().collect(),
            groups: state.groups.clone(),
        })
    }

    /// Insert or replace an entity
    pub fn insert(&self, entity: StoredEntity) {
        if let Ok(mut state) = self.state.write() {
            state.entities.insert(entity.id, entity);
        }
    }

    /// Register a field group; `kinds` restricts it to entity kinds (empty = all)
    pub fn add_group(&self, group: FieldGroup, kinds: &[&str], fields: Vec<FieldSpec>) {
        if let Ok(mut state) = self.state.write() {
            state.groups.push(StoredGroup {
                group,
                kinds: kinds.iter().map(|k| k.to_string()).collect(),
                fields,
            });
        }
    }

    /// Get a copy of an entity
    pub fn entity(&self, id: EntityId) -> Option<StoredEntity> {
        self.state.read().ok().and_then(|state| state.entities.get(&id).cloned())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StoreError> {
        self.state.read().map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StoreError> {
        self.state.write().map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn with_entity<T>(
        &self,
        id: EntityId,
        f: impl FnOnce(&StoredEntity) -> T,
    ) -> Result<T, StoreError> {
        let state = self.read()?;
        state.entities.get(&id).map(f).ok_or(StoreError::NotFound(id))
    }

    fn with_entity_mut(
        &self,
        id: EntityId,
        f: impl FnOnce(&mut StoredEntity),
    ) -> Result<(), StoreError> {
        let mut state = self.write()?;
        state.entities.get_mut(&id).map(f).ok_or(StoreError::NotFound(id))
    }
}

impl ContentStore for MemoryStore {
    fn title(&self, id: EntityId) -> Result<String, StoreError> {
        self.with_entity(id, |e| e.title.clone())
    }

    fn tags(&self, id: EntityId) -> Result<Vec<String>, StoreError> {
        self.with_entity(id, |e| e.tags.clone())
    }

    fn meta(&self, id: EntityId, key: &str) -> Result<Option<MetaValue>, StoreError> {
        self.with_entity(id, |e| e.meta.get(key).cloned())
    }

    fn author(&self, id: EntityId) -> Result<Option<UserId>, StoreError> {
        self.with_entity(id, |e| e.author)
    }

    fn permalink(&self, id: EntityId) -> Result<String, StoreError> {
        self.with_entity(id, StoredEntity::permalink)
    }

    fn set_title(&self, id: EntityId, title: &str) -> Result<(), StoreError> {
        self.with_entity_mut(id, |e| e.title = title.to_string())
    }

    fn set_tags(&self, id: EntityId, tags: &[String]) -> Result<(), StoreError> {
        self.with_entity_mut(id, |e| e.tags = tags.to_vec())
    }

    fn set_meta(&self, id: EntityId, key: &str, value: MetaValue) -> Result<(), StoreError> {
        self.with_entity_mut(id, |e| {
            e.meta.insert(key.to_string(), value);
        })
    }
}

impl SchemaStore for MemoryStore {
    fn field_groups(&self, id: EntityId) -> Result<Vec<FieldGroup>, StoreError> {
        let state = self.read()?;
        let entity = state.entities.get(&id).ok_or(StoreError::NotFound(id))?;
        Ok(state
            .groups
            .iter()
            .filter(|g| g.applies_to(&entity.kind))
            .map(|g| g.group.clone())
            .collect())
    }

    fn fields(&self, group_key: &str) -> Result<Vec<FieldSpec>, StoreError> {
        let state = self.read()?;
        Ok(state
            .groups
            .iter()
            .find(|g| g.group.key == group_key)
            .map(|g| g.fields.clone())
            .unwrap_or_default())
    }
}
