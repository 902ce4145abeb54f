//! Field schema types

use super::value::{FieldValue, MetaValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field type, parsed from the schema's type name
///
/// The set is closed: anything the editor does not know how to render or parse
/// lands in [`FieldKind::Unsupported`] with its original type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Number,
    Textarea,
    TrueFalse,
    Select,
    Radio,
    Checkbox,
    ColorPicker,
    DatePicker,
    Unsupported(String),
}

impl FieldKind {
    /// Parse a schema type name (`color` and `date` are accepted as aliases)
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "url" => FieldKind::Url,
            "number" => FieldKind::Number,
            "textarea" => FieldKind::Textarea,
            "true_false" => FieldKind::TrueFalse,
            "select" => FieldKind::Select,
            "radio" => FieldKind::Radio,
            "checkbox" => FieldKind::Checkbox,
            "color_picker" | "color" => FieldKind::ColorPicker,
            "date_picker" | "date" => FieldKind::DatePicker,
            other => FieldKind::Unsupported(other.to_string()),
        }
    }

    /// Canonical schema type name
    pub fn type_name(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Number => "number",
            FieldKind::Textarea => "textarea",
            FieldKind::TrueFalse => "true_false",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::ColorPicker => "color_picker",
            FieldKind::DatePicker => "date_picker",
            FieldKind::Unsupported(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Unsupported(_))
    }

    /// Shape a stored value into this kind's current-value form
    pub fn read(&self, stored: Option<&MetaValue>) -> FieldValue {
        match self {
            FieldKind::Text
            | FieldKind::Email
            | FieldKind::Url
            | FieldKind::Number
            | FieldKind::Textarea
            | FieldKind::ColorPicker
            | FieldKind::DatePicker => {
                FieldValue::Text(stored.map(MetaValue::to_text).unwrap_or_default())
            }
            FieldKind::TrueFalse => FieldValue::Flag(stored.is_some_and(MetaValue::is_truthy)),
            FieldKind::Select | FieldKind::Radio => match stored.map(MetaValue::to_text) {
                Some(key) if !key.is_empty() => FieldValue::Choice(key),
                _ => FieldValue::Absent,
            },
            FieldKind::Checkbox => {
                FieldValue::Choices(stored.map(MetaValue::to_list).unwrap_or_default())
            }
            FieldKind::Unsupported(_) => FieldValue::Absent,
        }
    }
}

impl From<String> for FieldKind {
    fn from(name: String) -> Self {
        FieldKind::from_type_name(&name)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.type_name().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One option of a choice-like field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Schema-level description of one editable metadata entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Metadata key, unique within the entity's schema
    pub key: String,

    /// Display label
    pub label: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Ordered options, used only by choice-like kinds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self { key: key.into(), label: label.into(), kind, choices: Vec::new() }
    }

    pub fn with_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice::new(value, label));
        self
    }
}

/// A field spec together with the entity's current value for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub spec: FieldSpec,
    pub value: FieldValue,
}

impl FieldDescriptor {
    pub fn new(spec: FieldSpec, value: FieldValue) -> Self {
        Self { spec, value }
    }

    pub fn key(&self) -> &str {
        &self.spec.key
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.spec.kind
    }

    pub fn choices(&self) -> &[Choice] {
        &self.spec.choices
    }
}
