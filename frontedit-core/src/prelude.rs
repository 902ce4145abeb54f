//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use frontedit_core::prelude::*;
//! ```

// === Handler ===
pub use crate::editor::{EditForm, PageOutcome, PageRequest, PageView, ShortcodeOutcome};

// === Configuration ===
pub use crate::config::{EditorConfig, MissingBooleanPolicy, WritePolicy};

// === Collaborators ===
pub use crate::html::{Escaper, HtmlEscaper};
pub use crate::security::{Caller, EditAuthorizer, HmacTokenIssuer, RoleAuthorizer, TokenIssuer};
pub use crate::store::{ContentStore, FieldGroup, MemoryStore, SchemaStore, StoredEntity};

// === Data model ===
pub use crate::model::{EntityId, FieldKind, FieldSpec, FieldValue, MetaValue, UserId};

// === HTTP boundary ===
pub use crate::http::{HttpRequest, HttpResponse};

// === Errors ===
pub use crate::error::{EditorError, StoreError};
