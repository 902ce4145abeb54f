//! HTTP response building and serialization

use std::collections::BTreeMap;
use std::fmt::Write;

use super::constants::{content_types, headers, CRLF};
use super::{HttpError, HttpResult};

/// HTTP status codes produced by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NoContent = 204,
    Found = 302,
}

impl StatusCode {
    /// Get the status code as a number
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get the reason phrase for this status code
    pub fn reason_phrase(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NoContent => "No Content",
            StatusCode::Found => "Found",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// HTTP response builder with fluent API
///
/// Headers are kept sorted so serialized output is stable.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code
    pub fn new(status: StatusCode) -> Self {
        let mut response = Self { status, headers: BTreeMap::new(), body: Vec::new() };
        response.set_content_length();
        response
    }

    /// Create a 200 OK response
    pub fn ok() -> Self {
        Self::new(StatusCode::Ok)
    }

    /// Create a 204 No Content response
    pub fn no_content() -> Self {
        Self::new(StatusCode::NoContent)
    }

    /// Redirect to another URL
    pub fn redirect(location: &str) -> Self {
        Self::new(StatusCode::Found).header(headers::LOCATION, location)
    }

    /// Set a header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the body as raw bytes
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self.set_content_length();
        self
    }

    /// Set the body as HTML
    pub fn html(self, html: &str) -> Self {
        self.header(headers::CONTENT_TYPE, content_types::HTML).body(html.as_bytes().to_vec())
    }

    fn set_content_length(&mut self) {
        self.headers
            .insert(headers::CONTENT_LENGTH.to_string(), self.body.len().to_string());
    }

    // Accessors

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get a specific header
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get the response body as a string (if valid UTF-8)
    pub fn body_string(&self) -> HttpResult<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| HttpError::InvalidRequest(format!("Body is not valid UTF-8: {}", e)))
    }

    /// Convert the response to raw HTTP bytes for transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut response = String::new();

        // Writing into a String cannot fail
        let _ = write!(&mut response, "HTTP/1.1 {}{}", self.status, CRLF);
        for (name, value) in &self.headers {
            let _ = write!(&mut response, "{}: {}{}", name, value, CRLF);
        }
        response.push_str(CRLF);

        let mut bytes = response.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::ok()
    }
}
