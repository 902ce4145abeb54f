//! Submission side of the edit form
//!
//! - [`payload`] - the submitted values, parsed once from the request body
//! - [`sanitize`] - plain-text sanitization for title and tags
//! - [`mapper`] - turns a payload into typed store writes

pub mod mapper;
pub mod payload;
pub mod sanitize;

pub use mapper::{SubmissionMapper, WriteCommand};
pub use payload::{RawValue, SubmissionPayload};
pub use sanitize::sanitize_text;

/// Form control carrying the entity title
pub const TITLE_FIELD: &str = "post_title";

/// Form control carrying the comma-separated tags
pub const TAGS_FIELD: &str = "post_tags";

/// Prefix of custom-field controls: `acf[key]` and `acf[key][]`
pub const META_NAMESPACE: &str = "acf";
