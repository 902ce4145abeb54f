//! Error types
//!
//! Only infrastructure failures are errors. The editor's own failure modes
//! (denied authorization, bad anti-forgery token, missing schema, unsupported
//! field types) are ordinary branches of the request and never surface here.

use crate::model::EntityId;

/// Content/schema store failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Entity not found: {0}")]
    NotFound(EntityId),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Main error type for the editor
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("HTTP error: {0}")]
    Http(#[from] crate::http::HttpError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
