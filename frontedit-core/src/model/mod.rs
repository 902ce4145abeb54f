//! Data model: entity identifiers, stored metadata values and field descriptors

mod entity;
mod field;
mod value;

pub use entity::{EntityId, UserId};
pub use field::{Choice, FieldDescriptor, FieldKind, FieldSpec};
pub use value::{FieldValue, MetaValue};
