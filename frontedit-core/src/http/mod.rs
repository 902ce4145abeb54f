//! Minimal HTTP boundary
//!
//! The editor is embedded in a host page and has no routes of its own. This
//! module only covers what the request boundary needs:
//!
//! - [`request`] - HTTP request parsing, query and urlencoded form decoding
//! - [`response`] - HTTP response building and serialization

pub mod request;
pub mod response;

pub use request::{HttpMethod, HttpRequest, HttpVersion};
pub use response::{HttpResponse, StatusCode};

/// Result type for HTTP operations
pub type HttpResult<T> = std::result::Result<T, HttpError>;

/// HTTP-specific error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Invalid HTTP request format
    #[error("Invalid HTTP request: {0}")]
    InvalidRequest(String),
    /// Unsupported HTTP method
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
    /// Invalid HTTP headers
    #[error("Invalid headers: {0}")]
    InvalidHeaders(String),
}

/// HTTP/1.1 protocol constants
pub mod constants {
    /// Common HTTP headers
    pub mod headers {
        pub const CONTENT_TYPE: &str = "Content-Type";
        pub const CONTENT_LENGTH: &str = "Content-Length";
        pub const LOCATION: &str = "Location";
    }

    /// Common content types
    pub mod content_types {
        pub const HTML: &str = "text/html; charset=utf-8";
        pub const FORM: &str = "application/x-www-form-urlencoded";
    }

    /// HTTP line ending
    pub const CRLF: &str = "\r\n";
}
