//! Stored metadata values and typed field values

use serde::{Deserialize, Serialize};

/// A metadata value as held by the content store
///
/// Stores are loosely typed; the same key may hold a flag, a string or a list
/// depending on which control last wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl MetaValue {
    /// Scalar text view of the value
    ///
    /// Flags read as `"1"`/`""`, lists are joined with `,`.
    pub fn to_text(&self) -> String {
        match self {
            MetaValue::Flag(true) => "1".to_string(),
            MetaValue::Flag(false) => String::new(),
            MetaValue::Text(text) => text.clone(),
            MetaValue::List(items) => items.join(","),
        }
    }

    /// Boolean view of the value, matching a checkbox whose value is `1`
    pub fn is_truthy(&self) -> bool {
        match self {
            MetaValue::Flag(flag) => *flag,
            MetaValue::Text(text) => matches!(text.trim(), "1" | "true"),
            MetaValue::List(items) => items.iter().any(|item| item == "1"),
        }
    }

    /// Set view of the value
    pub fn to_list(&self) -> Vec<String> {
        match self {
            MetaValue::List(items) => items.clone(),
            MetaValue::Text(text) if text.is_empty() => Vec::new(),
            MetaValue::Text(text) => vec![text.clone()],
            MetaValue::Flag(true) => vec!["1".to_string()],
            MetaValue::Flag(false) => Vec::new(),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(text: &str) -> Self {
        MetaValue::Text(text.to_string())
    }
}

impl From<bool> for MetaValue {
    fn from(flag: bool) -> Self {
        MetaValue::Flag(flag)
    }
}

/// Current value of a field, shaped by its [`FieldKind`](super::FieldKind)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Scalar text (text-like inputs, textarea, color, date)
    Text(String),
    /// Checkbox state
    Flag(bool),
    /// Selected choice key of a single-choice field
    Choice(String),
    /// Selected choice keys of a multi-choice field
    Choices(Vec<String>),
    /// No value (unsupported kinds, or nothing selected)
    Absent,
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) | FieldValue::Choice(text) => text,
            _ => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn is_selected(&self, key: &str) -> bool {
        match self {
            FieldValue::Choice(selected) => selected == key,
            FieldValue::Choices(selected) => selected.iter().any(|s| s == key),
            _ => false,
        }
    }
}
