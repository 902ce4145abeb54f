//! Submitted form values

use super::{META_NAMESPACE, TAGS_FIELD, TITLE_FIELD};
use crate::http::{HttpMethod, HttpRequest, HttpResult};

/// One submitted custom-field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// From `acf[key]=v`
    Scalar(String),
    /// From one or more `acf[key][]=v`
    List(Vec<String>),
}

/// Everything the client submitted, parsed once at the request boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub token: Option<String>,
    pub title: Option<String>,
    pub tags: Option<String>,
    /// Custom-field values in first-submission order
    pub meta: Vec<(String, RawValue)>,
}

impl SubmissionPayload {
    /// Parse the payload of a form POST, reading the token from `token_field`
    ///
    /// Returns `Ok(None)` for any other method: the request is a plain view.
    pub fn from_request(request: &HttpRequest, token_field: &str) -> HttpResult<Option<Self>> {
        if request.method() != HttpMethod::POST {
            return Ok(None);
        }
        if !request.is_form() {
            log::debug!(
                "Ignoring POST body with content type {:?}",
                request.header("content-type")
            );
            return Ok(Some(Self::default()));
        }

        Ok(Some(Self::from_pairs(token_field, request.form_pairs()?)))
    }

    /// Build a payload from decoded `name=value` pairs
    pub fn from_pairs<I, K, V>(token_field: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut payload = Self::default();

        for (name, value) in pairs {
            let name = name.as_ref();
            let value = value.into();

            if name == token_field {
                payload.token = Some(value);
            } else if name == TITLE_FIELD {
                payload.title = Some(value);
            } else if name == TAGS_FIELD {
                payload.tags = Some(value);
            } else if let Some((key, is_list)) = parse_meta_name(name) {
                payload.push_meta(key, is_list, value);
            }
        }

        payload
    }

    /// Submitted value for a custom field
    pub fn meta(&self, key: &str) -> Option<&RawValue> {
        self.meta.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether any custom field was submitted under `key`
    pub fn has_meta(&self, key: &str) -> bool {
        self.meta(key).is_some()
    }

    fn push_meta(&mut self, key: &str, is_list: bool, value: String) {
        let slot = self.meta.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v);

        match (slot, is_list) {
            (Some(RawValue::List(items)), true) => items.push(value),
            (Some(slot), true) => *slot = RawValue::List(vec![value]),
            (Some(slot), false) => *slot = RawValue::Scalar(value),
            (None, true) => self.meta.push((key.to_string(), RawValue::List(vec![value]))),
            (None, false) => self.meta.push((key.to_string(), RawValue::Scalar(value))),
        }
    }
}

/// Split `acf[key]` / `acf[key][]` into the key and whether it is a list entry
fn parse_meta_name(name: &str) -> Option<(&str, bool)> {
    let inner = name.strip_prefix(META_NAMESPACE)?.strip_prefix('[')?;

    let (key, is_list) = match inner.strip_suffix("][]") {
        Some(key) => (key, true),
        None => (inner.strip_suffix(']')?, false),
    };

    if key.is_empty() || key.contains('[') || key.contains(']') {
        return None;
    }
    Some((key, is_list))
}
