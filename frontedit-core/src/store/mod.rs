//! Content and schema stores
//!
//! The editor never owns entity data. It reads and writes through two traits:
//! - [`ContentStore`] - title, tags, metadata and permalink of an entity
//! - [`SchemaStore`] - field groups applicable to an entity, and their fields
//!
//! [`MemoryStore`] implements both and can be loaded from / saved to a JSON file.
//!
//! # Example
//!
//! ```
//! use frontedit_core::store::{ContentStore, MemoryStore, StoredEntity};
//! use frontedit_core::EntityId;
//!
//! let store = MemoryStore::new();
//! store.insert(StoredEntity::new(EntityId(1), "Draft"));
//! assert_eq!(store.title(EntityId(1)).unwrap(), "Draft");
//! ```

mod content;
mod memory;
mod schema;

pub use content::ContentStore;
pub use memory::{MemoryStore, StoreSnapshot, StoredEntity, StoredGroup};
pub use schema::{FieldGroup, SchemaStore};
