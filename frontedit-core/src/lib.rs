//! Frontedit - Core
//!
//! A schema-driven front-end edit form for content entities.
//!
//! # Overview
//!
//! Frontedit provides a single shortcode (`[cpt_edit_form]` by default) that, when
//! embedded in a single-entity page, renders a form for editing the entity's title,
//! tags and custom fields, and applies the form's submission back to the content
//! store before redirecting to the entity's permalink.
//!
//! The custom fields come from a field schema (field groups applicable to the entity).
//! Each field type is a variant of [`FieldKind`]; rendering and submission parsing
//! are both dispatched on that variant so the two directions stay in lock-step.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use frontedit_core::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::from_json_file("site.json")?);
//! let form = EditForm::new(EditorConfig::load()?, store.clone(), store);
//!
//! let page = PageRequest::new(PageView::Single(EntityId(42)), caller, request);
//! match form.render_page("<p>Intro</p>[cpt_edit_form]", &page) {
//!     PageOutcome::Content(html) => println!("{html}"),
//!     PageOutcome::Redirect { location } => println!("-> {location}"),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Architecture
//!
//! - [`resolver`] - Field schema resolution (groups → ordered descriptors + values)
//! - [`html`] - Escaping and form rendering
//! - [`form`] - Submission payload, text sanitization and the submission mapper
//! - [`editor`] - Request-level handler and shortcode substitution
//! - [`security`] - Caller identity, edit authorization, anti-forgery tokens
//! - [`store`] - Content/schema store traits and the in-memory reference store
//! - [`http`] - Minimal HTTP request parsing and response building
//! - [`config`] - Layered configuration (defaults, TOML file, environment)

pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod html;
pub mod http;
pub mod model;
pub mod resolver;
pub mod security;
pub mod shortcode;
pub mod store;

#[cfg(test)]
pub mod testing;

pub mod prelude;

pub use config::EditorConfig;
pub use editor::{EditForm, PageOutcome, PageRequest, PageView, ShortcodeOutcome};
pub use error::{EditorError, StoreError};
pub use model::{
    Choice, EntityId, FieldDescriptor, FieldKind, FieldSpec, FieldValue, MetaValue, UserId,
};

/// Main result type for the crate
pub type Result<T> = std::result::Result<T, EditorError>;
