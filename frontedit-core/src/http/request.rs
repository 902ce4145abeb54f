//! HTTP request parsing and representation

use std::collections::HashMap;
use std::str::FromStr;

use super::constants::content_types;
use super::{HttpError, HttpResult};

/// HTTP methods supported by the request boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    GET,
    POST,
    HEAD,
}

impl HttpMethod {
    /// Convert method to string
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::HEAD => "HEAD",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "HEAD" => Ok(HttpMethod::HEAD),
            _ => Err(HttpError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HTTP version information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http1_0,
    Http1_1,
}

impl HttpVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVersion::Http1_0 => "HTTP/1.0",
            HttpVersion::Http1_1 => "HTTP/1.1",
        }
    }
}

impl FromStr for HttpVersion {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP/1.0" => Ok(HttpVersion::Http1_0),
            "HTTP/1.1" => Ok(HttpVersion::Http1_1),
            _ => Err(HttpError::InvalidRequest(format!("Unsupported HTTP version: {}", s))),
        }
    }
}

/// Parsed query parameters from URL
pub type QueryParams = HashMap<String, String>;

/// HTTP headers collection (names lowercased)
pub type Headers = HashMap<String, String>;

/// A complete HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: HttpMethod,
    path: String,
    query_params: QueryParams,
    version: HttpVersion,
    headers: Headers,
    body: Vec<u8>,
}

impl HttpRequest {
    /// Create a new HTTP request; `path` may carry a query string
    pub fn new(method: HttpMethod, path: &str, headers: Headers, body: Vec<u8>) -> Self {
        let (path, query_params) = Self::parse_path_and_query(path);
        let headers = headers.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect();

        Self { method, path, query_params, version: HttpVersion::Http1_1, headers, body }
    }

    /// A GET request for `path`
    pub fn get(path: &str) -> Self {
        Self::new(HttpMethod::GET, path, Headers::new(), Vec::new())
    }

    /// A urlencoded form POST to `path`
    pub fn post_form(path: &str, body: &str) -> Self {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), content_types::FORM.to_string());
        Self::new(HttpMethod::POST, path, headers, body.as_bytes().to_vec())
    }

    /// Parse an HTTP request from raw bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the request is malformed or unsupported
    pub fn parse(raw_request: &[u8]) -> HttpResult<Self> {
        let request_str = std::str::from_utf8(raw_request)
            .map_err(|e| HttpError::InvalidRequest(format!("Invalid UTF-8: {}", e)))?;

        // Accept bare LF line endings from hand-written request files
        let normalized = request_str.replace("\r\n", "\n");
        let (headers_section, body) = match normalized.split_once("\n\n") {
            Some((head, body)) => (head, body),
            None => (normalized.as_str(), ""),
        };

        let mut lines = headers_section.lines();
        let request_line = lines
            .next()
            .filter(|line| !line.trim().is_empty())
            .ok_or_else(|| HttpError::InvalidRequest("No request line".to_string()))?;

        let (method, path, version) = Self::parse_request_line(request_line)?;
        let headers = Self::parse_headers(lines)?;

        let mut request = Self::new(method, &path, headers, body.as_bytes().to_vec());
        request.version = version;
        Ok(request)
    }

    /// Parse the HTTP request line (e.g., "GET /path HTTP/1.1")
    fn parse_request_line(line: &str) -> HttpResult<(HttpMethod, String, HttpVersion)> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(HttpError::InvalidRequest(format!("Invalid request line: {}", line)));
        }

        let method = parts[0].parse()?;
        let path = parts[1].to_string();
        let version = parts[2].parse()?;

        Ok((method, path, version))
    }

    /// Parse HTTP headers from lines
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HttpResult<Headers> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.is_empty() {
                continue;
            }

            let (name, value) = line.split_once(':').ok_or_else(|| {
                HttpError::InvalidHeaders(format!("Invalid header line: {}", line))
            })?;
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }

        Ok(headers)
    }

    /// Parse path and query parameters
    fn parse_path_and_query(full_path: &str) -> (String, QueryParams) {
        match full_path.split_once('?') {
            None => (full_path.to_string(), HashMap::new()),
            Some((path, query)) => (path.to_string(), decode_pairs(query).into_iter().collect()),
        }
    }

    // Accessors

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Get the request path (without query parameters)
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(|s| s.as_str())
    }

    pub fn version(&self) -> HttpVersion {
        self.version
    }

    /// Get a specific header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the request body as a string (if valid UTF-8)
    pub fn body_string(&self) -> HttpResult<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| HttpError::InvalidRequest(format!("Body is not valid UTF-8: {}", e)))
    }

    /// Check if the body is urlencoded form data
    ///
    /// A missing content type is treated as form data.
    pub fn is_form(&self) -> bool {
        self.header("content-type")
            .map(|ct| ct.starts_with(content_types::FORM))
            .unwrap_or(true)
    }

    /// Decoded `name=value` pairs of a urlencoded body, in body order
    pub fn form_pairs(&self) -> HttpResult<Vec<(String, String)>> {
        Ok(decode_pairs(self.body_string()?))
    }
}

/// Split and decode `a=1&b=2` pairs, keeping order and duplicates
pub fn decode_pairs(encoded: &str) -> Vec<(String, String)> {
    encoded
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (form_decode(key), form_decode(value)),
            None => (form_decode(pair), String::new()),
        })
        .collect()
}

/// Decode one urlencoded component (`+` is a space)
fn form_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
